//! The rotary encoder device: two pulled-up quadrature lines decoded at the
//! mechanical detent.

use embassy_futures::select::select;
use embassy_rp::gpio::Input;

use crate::quadrature::{QuadratureDecoder, Step};

/// Owns the encoder's A and B lines and a [`QuadratureDecoder`].
pub struct RotaryEncoder<'d> {
    signal_a: Input<'d>,
    signal_b: Input<'d>,
    decoder: QuadratureDecoder,
}

impl<'d> RotaryEncoder<'d> {
    /// The decoder is seeded with the lines' current levels, in case the
    /// knob is resting between detents at startup.
    #[must_use]
    pub fn new(signal_a: Input<'d>, signal_b: Input<'d>) -> Self {
        let mut decoder = QuadratureDecoder::new();
        let _ = decoder.observe(signal_a.is_high(), signal_b.is_high());
        Self {
            signal_a,
            signal_b,
            decoder,
        }
    }

    /// Wait for one detent of rotation. Edges on either line wake this
    /// future; both lines are sampled on every edge, which is what makes the
    /// decoder's bounce absorption work.
    ///
    /// Decoder state lives in the struct, so dropping this future between
    /// detents and calling again later loses nothing.
    pub async fn step(&mut self) -> Step {
        loop {
            let _ = select(
                self.signal_a.wait_for_any_edge(),
                self.signal_b.wait_for_any_edge(),
            )
            .await;
            if let Some(step) = self
                .decoder
                .observe(self.signal_a.is_high(), self.signal_b.is_high())
            {
                return step;
            }
        }
    }
}
