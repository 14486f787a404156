//! Detent-level decoding of a quadrature rotary encoder.
//!
//! The decoder watches the two signal levels and fires only when they return
//! to the rest position (both high, the mechanical detent). Which of the two
//! one-away states preceded the rest tells the direction:
//!
//! ```text
//!           A | B
//! Resting   1 | 1
//! CW  last  1 | 0   (B returns high last)
//! CCW last  0 | 1   (A returns high last)
//! ```
//!
//! Everything else - the mid-turn states, contact bounce, repeated rest
//! readings - updates the stored pair and emits nothing. Sub-detent
//! resolution is given up in exchange for bounce tolerance.

/// One detent of rotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Step {
    Clockwise,
    CounterClockwise,
}

impl Step {
    /// The signed amount a clock field moves for this step.
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Tracks the last-seen level pair; see the module docs for the firing rule.
#[derive(Debug)]
pub struct QuadratureDecoder {
    last_a: bool,
    last_b: bool,
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureDecoder {
    /// A decoder that assumes the knob starts at rest.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_a: true,
            last_b: true,
        }
    }

    /// Feed the current levels of both lines; call once per edge on either
    /// line. Returns a step only on arrival at the rest position from one of
    /// the two canonical one-away states.
    pub fn observe(&mut self, level_a: bool, level_b: bool) -> Option<Step> {
        let step = if level_a && level_b {
            match (self.last_a, self.last_b) {
                (true, false) => Some(Step::Clockwise),
                (false, true) => Some(Step::CounterClockwise),
                _ => None,
            }
        } else {
            None
        };

        // Stored unconditionally so a bounce never replays as a phantom step.
        self.last_a = level_a;
        self.last_b = level_b;
        step
    }
}
