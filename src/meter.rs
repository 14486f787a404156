//! Hardware-PWM driver for one moving-coil panel meter.
//! - 5 kHz carrier (the needle reads the mean voltage)
//! - Clock-independent: computes the divider from clk_sys for a fixed frame
//! - Updates duty WITHOUT reconfiguring the slice

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};

use crate::constants::{METER_PWM_HZ, METER_TOP};

/// A meter on a PWM channel A output (even GPIO).
/// e.g.: `PanelMeter::new(Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, Config::default()))`
pub struct PanelMeter<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Store config so later compare updates keep the divider
}

impl<'d> PanelMeter<'d> {
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "The tick rate is fixed and nonzero; the divider is clamped to u8."
    )]
    #[must_use]
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let clk = u64::from(clk_sys_freq());
        // One frame is METER_TOP + 1 ticks at METER_PWM_HZ frames per second.
        let tick_rate = u64::from(METER_PWM_HZ) * (u64::from(METER_TOP) + 1);
        let div_int = ((clk + tick_rate / 2) / tick_rate).clamp(1, 255) as u8;

        let mut cfg = Config::default();
        cfg.top = METER_TOP;
        cfg.phase_correct = false; // edge-aligned => exact tick steps
        cfg.divider = div_int.into();
        cfg.compare_a = 0; // needle starts at rest
        cfg.enable = true;
        pwm.set_config(&cfg);

        Self { pwm, cfg }
    }

    /// Set the duty in compare ticks (a fraction of full scale times
    /// `METER_TOP + 1`), clamped to the frame.
    pub fn set_duty(&mut self, ticks: u16) {
        // Only the compare value changes; reapplying the stored config keeps
        // the divider intact.
        self.cfg.compare_a = ticks.min(METER_TOP);
        self.pwm.set_config(&self.cfg);
    }

    /// Drop the needle to rest.
    pub fn park(&mut self) {
        self.set_duty(0);
    }
}
