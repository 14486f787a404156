//! Press-length classification for the mode button.

use embassy_time::Instant;

use crate::constants::{MAX_COMMIT_PRESS, MIN_COMMIT_PRESS};

/// Emitted when a press-and-release lands inside the commit window.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Commit;

/// Turns press/release edges plus timestamps into [`Commit`] events.
///
/// Holds at most one press start at a time. A release closes the press and
/// classifies it; anything outside the commit window is swallowed without an
/// event, so bounce and accidental holds never change the mode.
#[derive(Debug, Default)]
pub struct PressClassifier {
    pressed_at: Option<Instant>,
}

impl PressClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self { pressed_at: None }
    }

    /// Feed one edge of the button level. Returns [`Commit`] only for a
    /// release whose press lasted at least [`MIN_COMMIT_PRESS`] and strictly
    /// less than [`MAX_COMMIT_PRESS`].
    pub fn on_edge(&mut self, pressed: bool, now: Instant) -> Option<Commit> {
        if pressed {
            // A second down edge while timing is contact noise; keep the
            // first start.
            if self.pressed_at.is_none() {
                self.pressed_at = Some(now);
            }
            return None;
        }

        let pressed_at = self.pressed_at.take()?;
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "A release cannot precede the press that started it."
        )]
        let held = now - pressed_at;
        (MIN_COMMIT_PRESS..MAX_COMMIT_PRESS)
            .contains(&held)
            .then_some(Commit)
    }
}
