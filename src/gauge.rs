//! Value-to-duty mapping for one moving-coil gauge, with write suppression.

use crate::constants::METER_TOP;

/// Which clock field a gauge displays; fixes the range of the linear mapping.
#[derive(Clone, Copy, Debug, defmt::Format)]
pub enum GaugeScale {
    /// Hours 1-12; hour 1 sits at zero deflection.
    Hours12,
    /// Minutes or seconds, 0-59.
    Sixty,
}

impl GaugeScale {
    const fn span(self) -> u32 {
        match self {
            Self::Hours12 => 12,
            Self::Sixty => 60,
        }
    }

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Hours are 1-12 by the TimeOfDay invariant."
    )]
    const fn zero_based(self, value: u8) -> u32 {
        match self {
            Self::Hours12 => (value - 1) as u32,
            Self::Sixty => value as u32,
        }
    }
}

/// The two hand-tuned duty points of one gauge, in PWM ticks.
#[derive(Clone, Copy, Debug)]
pub struct GaugeCalibration {
    /// Deflection parked on while another field is being edited.
    pub setup: u16,
    /// Duty at which the needle reaches the top mark on the dial.
    pub upper: u16,
}

impl GaugeCalibration {
    /// Build from fractions of full scale (the form the meters are tuned in).
    #[must_use]
    pub const fn from_cycles(setup: f32, upper: f32) -> Self {
        Self {
            setup: cycle_to_ticks(setup),
            upper: cycle_to_ticks(upper),
        }
    }
}

/// Convert a duty-cycle fraction in [0, 1] to PWM compare ticks, rounded.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects,
    reason = "Fractions are in [0, 1], so the product fits in u16."
)]
const fn cycle_to_ticks(cycle: f32) -> u16 {
    (cycle * (METER_TOP as f32 + 1.0) + 0.5) as u16
}

/// One gauge's mapping plus the cache that suppresses redundant writes.
#[derive(Debug)]
pub struct Gauge {
    scale: GaugeScale,
    calibration: GaugeCalibration,
    current: Option<u16>,
}

impl Gauge {
    /// The cache starts empty, so the first plan always writes.
    #[must_use]
    pub const fn new(scale: GaugeScale, calibration: GaugeCalibration) -> Self {
        debug_assert!(calibration.setup <= METER_TOP && calibration.upper <= METER_TOP);
        Self {
            scale,
            calibration,
            current: None,
        }
    }

    /// Duty for a concrete value, or the setup point for the resting
    /// sentinel (`None`).
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "upper <= METER_TOP and value <= span, so the product stays in u32 and the quotient in u16."
    )]
    #[must_use]
    pub fn target(&self, value: Option<u8>) -> u16 {
        match value {
            None => self.calibration.setup,
            Some(value) => {
                (u32::from(self.calibration.upper) * self.scale.zero_based(value)
                    / self.scale.span()) as u16
            }
        }
    }

    /// The duty to write for this value, or `None` when the cached duty
    /// already matches and the hardware write should be skipped.
    pub fn plan(&mut self, value: Option<u8>) -> Option<u16> {
        let target = self.target(value);
        if self.current == Some(target) {
            return None;
        }
        self.current = Some(target);
        Some(target)
    }
}
