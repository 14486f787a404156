//! The mode state machine that owns the displayed time.
//!
//! Each mode runs as its own async function that returns the next mode, in a
//! loop driven by [`PanelClock::run`]. All mutation of [`TimeOfDay`] and the
//! face happens on this one task; the encoder and button are awaited here,
//! and the only resource shared with other tasks is the [`WallClock`].

use defmt::{Debug2Format, info, warn};
use embassy_futures::select::{Either3, select3};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;

use crate::button::Button;
use crate::clock_mode::ClockMode;
use crate::constants::FACE_REFRESH_PERIOD;
use crate::encoder::RotaryEncoder;
use crate::face::ClockFace;
use crate::time_of_day::TimeOfDay;
use crate::wall_clock::WallClock;

/// Raised from any task to retire the clock; the machine parks the meters
/// and stops consuming input.
pub type ShutdownSignal = Signal<CriticalSectionRawMutex, ()>;

/// The whole clock: face, inputs, wall clock and the displayed time.
pub struct PanelClock<'d> {
    face: ClockFace<'d>,
    wall_clock: &'d WallClock,
    encoder: RotaryEncoder<'d>,
    button: Button<'d>,
    time: TimeOfDay,
}

impl<'d> PanelClock<'d> {
    /// The displayed time starts at the twelve o'clock default; the first
    /// clock-mode refresh pulls the real time within one period.
    #[must_use]
    pub fn new(
        face: ClockFace<'d>,
        wall_clock: &'d WallClock,
        encoder: RotaryEncoder<'d>,
        button: Button<'d>,
    ) -> Self {
        Self {
            face,
            wall_clock,
            encoder,
            button,
            time: TimeOfDay::default(),
        }
    }

    /// Run the mode ring until `shutdown` is raised, then park the meters.
    pub async fn run(&mut self, shutdown: &ShutdownSignal) {
        let mut mode = ClockMode::default();
        while !mode.is_terminal() {
            info!("mode: {:?}", mode);
            mode = match mode {
                ClockMode::Clock => self.run_clock(shutdown).await,
                ClockMode::SetHour | ClockMode::SetMinute | ClockMode::SetSecond => {
                    self.run_set_field(mode, shutdown).await
                }
                ClockMode::SetRtcTime => self.run_commit(),
                ClockMode::Dead => ClockMode::Dead,
            };
        }
        self.face.park();
        info!("panel clock stopped");
    }

    /// Track the wall clock on the face until a commit press enters setting
    /// mode. Re-entered every time the ring cycles back to clock mode.
    async fn run_clock(&mut self, shutdown: &ShutdownSignal) -> ClockMode {
        loop {
            self.refresh_from_wall_clock();
            match select3(
                Timer::after(FACE_REFRESH_PERIOD),
                self.button.wait_for_commit(),
                shutdown.wait(),
            )
            .await
            {
                Either3::First(()) => {}
                Either3::Second(()) => return ClockMode::Clock.next(),
                Either3::Third(()) => return ClockMode::Dead,
            }
        }
    }

    fn refresh_from_wall_clock(&mut self) {
        match self.wall_clock.now() {
            Ok(now) => {
                self.time.sync_from_wall(now.hour, now.minute, now.second);
                self.face.update(
                    Some(self.time.hour()),
                    Some(self.time.minute()),
                    Some(self.time.second()),
                );
            }
            // Worst case the face keeps its last reading for one period.
            Err(err) => warn!("wall clock read failed: {}", Debug2Format(&err)),
        }
    }

    /// Adjust one field with the encoder; the other two gauges hold their
    /// setup deflection so the operator can see which needle is live.
    async fn run_set_field(&mut self, mode: ClockMode, shutdown: &ShutdownSignal) -> ClockMode {
        // A zero step forces the redraw that isolates the live gauge.
        self.apply_step(mode, 0);
        loop {
            match select3(
                self.encoder.step(),
                self.button.wait_for_commit(),
                shutdown.wait(),
            )
            .await
            {
                Either3::First(step) => self.apply_step(mode, step.delta()),
                Either3::Second(()) => return mode.next(),
                Either3::Third(()) => return ClockMode::Dead,
            }
        }
    }

    fn apply_step(&mut self, mode: ClockMode, delta: i8) {
        match mode {
            ClockMode::SetHour => {
                self.time.step_hour(delta);
                self.face.update(Some(self.time.hour()), None, None);
            }
            ClockMode::SetMinute => {
                self.time.step_minute(delta);
                self.face.update(None, Some(self.time.minute()), None);
            }
            ClockMode::SetSecond => {
                self.time.step_second(delta);
                self.face.update(None, None, Some(self.time.second()));
            }
            _ => {}
        }
    }

    /// Pass-through mode: flush a dirty time to the real-time clock, then
    /// fall straight back to clock mode without waiting for another commit.
    fn run_commit(&mut self) -> ClockMode {
        info!("commit to rtc, dirty: {}", self.time.is_dirty());
        if self.time.is_dirty() {
            let (hour, minute, second) =
                (self.time.hour(), self.time.minute(), self.time.second());
            match self
                .wall_clock
                .overlay_time_of_day(Some(hour), Some(minute), Some(second))
            {
                Ok(()) => {
                    self.time.mark_clean();
                    info!("wall clock set to {}:{}:{}", hour, minute, second);
                }
                // Leave the time dirty; the next trip around the ring
                // retries the commit.
                Err(err) => warn!("wall clock write failed: {}", Debug2Format(&err)),
            }
        }
        ClockMode::SetRtcTime.next()
    }
}
