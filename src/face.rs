//! The three-meter clock face.
//!
//! Pairs each [`PanelMeter`] with its [`Gauge`] mapping and exposes the one
//! update operation the rest of the system uses: show some fields, park the
//! others at their setup deflection.

use embassy_time::Timer;

use crate::constants::{
    HOURS_SETUP_CYCLE, HOURS_UPPER_CYCLE, MINUTES_SETUP_CYCLE, MINUTES_UPPER_CYCLE,
    SECONDS_SETUP_CYCLE, SECONDS_UPPER_CYCLE, SWEEP_HOLD, SWEEP_SETTLE, SWEEP_STEP_DELAY,
    SWEEP_STEP_TICKS,
};
use crate::gauge::{Gauge, GaugeCalibration, GaugeScale};
use crate::meter::PanelMeter;

struct FaceChannel<'d> {
    meter: PanelMeter<'d>,
    gauge: Gauge,
}

impl FaceChannel<'_> {
    /// Drive the meter only when the mapped duty actually changed.
    fn show(&mut self, value: Option<u8>) {
        if let Some(ticks) = self.gauge.plan(value) {
            self.meter.set_duty(ticks);
        }
    }
}

/// Hours, minutes and seconds meters behind one update call.
pub struct ClockFace<'d> {
    hours: FaceChannel<'d>,
    minutes: FaceChannel<'d>,
    seconds: FaceChannel<'d>,
}

impl<'d> ClockFace<'d> {
    #[must_use]
    pub fn new(hours: PanelMeter<'d>, minutes: PanelMeter<'d>, seconds: PanelMeter<'d>) -> Self {
        Self {
            hours: FaceChannel {
                meter: hours,
                gauge: Gauge::new(
                    GaugeScale::Hours12,
                    GaugeCalibration::from_cycles(HOURS_SETUP_CYCLE, HOURS_UPPER_CYCLE),
                ),
            },
            minutes: FaceChannel {
                meter: minutes,
                gauge: Gauge::new(
                    GaugeScale::Sixty,
                    GaugeCalibration::from_cycles(MINUTES_SETUP_CYCLE, MINUTES_UPPER_CYCLE),
                ),
            },
            seconds: FaceChannel {
                meter: seconds,
                gauge: Gauge::new(
                    GaugeScale::Sixty,
                    GaugeCalibration::from_cycles(SECONDS_SETUP_CYCLE, SECONDS_UPPER_CYCLE),
                ),
            },
        }
    }

    /// Show the given fields; `None` parks that gauge at its setup
    /// deflection so the operator can see which field is live.
    pub fn update(&mut self, hour: Option<u8>, minute: Option<u8>, second: Option<u8>) {
        self.hours.show(hour);
        self.minutes.show(minute);
        self.seconds.show(second);
    }

    /// Boot-time flourish: ramp all three needles up together, hold, then
    /// drop them and give the movements time to settle. Purely cosmetic,
    /// and a quick check that all three coils respond.
    pub async fn startup_sweep(&mut self) {
        let top = GaugeCalibration::from_cycles(HOURS_SETUP_CYCLE, HOURS_UPPER_CYCLE).upper;
        let mut ticks = 0_u16;
        while ticks < top {
            self.hours.meter.set_duty(ticks);
            self.minutes.meter.set_duty(ticks);
            self.seconds.meter.set_duty(ticks);
            ticks = ticks.saturating_add(SWEEP_STEP_TICKS);
            Timer::after(SWEEP_STEP_DELAY).await;
        }
        // hold for a moment, then let the arms return and rest
        Timer::after(SWEEP_HOLD).await;
        self.park();
        Timer::after(SWEEP_SETTLE).await;
    }

    /// Drop every needle to rest. The gauge caches are left as they are;
    /// this only runs at boot and at shutdown.
    pub fn park(&mut self) {
        self.hours.meter.park();
        self.minutes.meter.park();
        self.seconds.meter.park();
    }
}
