//! The mode button, classified into commit events.

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::press::PressClassifier;

/// An active-high push button whose presses advance the clock mode.
pub struct Button<'d> {
    inner: Input<'d>,
    classifier: PressClassifier,
}

impl<'d> Button<'d> {
    #[must_use]
    pub fn new(inner: Input<'d>) -> Self {
        Self {
            inner,
            classifier: PressClassifier::new(),
        }
    }

    /// Resolve on the next press that lands inside the commit window.
    /// Bounces and accidental holds are swallowed here, so the caller only
    /// ever sees deliberate presses.
    ///
    /// The classifier state lives in the struct, so dropping this future
    /// mid-press and calling again later loses nothing.
    pub async fn wait_for_commit(&mut self) {
        loop {
            self.inner.wait_for_any_edge().await;
            let pressed = self.inner.is_high();
            if self.classifier.on_edge(pressed, Instant::now()).is_some() {
                info!("commit press");
                return;
            }
        }
    }
}
