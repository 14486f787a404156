//! Operating modes of the clock and the ring a commit press walks through.

/// The five live modes form a ring; `Dead` is terminal and only entered
/// through an explicit shutdown.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub enum ClockMode {
    #[default]
    Clock,
    SetHour,
    SetMinute,
    SetSecond,
    SetRtcTime,
    Dead,
}

impl ClockMode {
    /// The mode one commit press advances to. `Dead` never leaves.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Clock => Self::SetHour,
            Self::SetHour => Self::SetMinute,
            Self::SetMinute => Self::SetSecond,
            Self::SetSecond => Self::SetRtcTime,
            Self::SetRtcTime => Self::Clock,
            Self::Dead => Self::Dead,
        }
    }

    /// True once the machine has shut down; events are ignored from here on.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Dead)
    }
}
