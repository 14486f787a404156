//! Timing constants and per-gauge calibration for the clock face.

use embassy_time::Duration;

/// PWM carrier for the moving-coil meters; fast enough that the needle
/// reads the mean voltage rather than chattering.
pub const METER_PWM_HZ: u32 = 5_000;
/// Counter wrap value; full scale is `METER_TOP + 1` ticks per frame.
pub const METER_TOP: u16 = 24_999;

// Each gauge carries two hand-tuned calibration points, expressed as a
// fraction of full scale. `*_SETUP_CYCLE` is the deflection shown while some
// other field is being edited; `*_UPPER_CYCLE` is the duty at which the
// needle reaches the top mark on the dial. Measured per meter, not derivable.
pub const HOURS_SETUP_CYCLE: f32 = 0.790;
pub const MINUTES_SETUP_CYCLE: f32 = 0.880;
pub const SECONDS_SETUP_CYCLE: f32 = 0.860;

pub const HOURS_UPPER_CYCLE: f32 = 0.765;
pub const MINUTES_UPPER_CYCLE: f32 = 0.795;
pub const SECONDS_UPPER_CYCLE: f32 = 0.770;

/// A release inside [`MIN_COMMIT_PRESS`, `MAX_COMMIT_PRESS`) commits a mode
/// change. Shorter is contact bounce, longer is an accidental hold.
pub const MIN_COMMIT_PRESS: Duration = Duration::from_millis(50);
pub const MAX_COMMIT_PRESS: Duration = Duration::from_millis(400);

/// How often the face tracks the wall clock while in clock mode.
pub const FACE_REFRESH_PERIOD: Duration = Duration::from_millis(300);

// Startup sweep pacing: step all needles up, hold, then let them fall back.
pub const SWEEP_STEP_TICKS: u16 = 25;
pub const SWEEP_STEP_DELAY: Duration = Duration::from_micros(1_500);
pub const SWEEP_HOLD: Duration = Duration::from_millis(500);
pub const SWEEP_SETTLE: Duration = Duration::from_millis(1_500);
