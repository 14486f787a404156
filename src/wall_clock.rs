//! Shared access to the RP2040 real-time clock.
//!
//! The RTC peripheral is the one resource touched from more than one task
//! (the state machine's refresh/commit paths and the network time setter),
//! so it lives behind a blocking critical-section mutex. Reads and writes
//! are register accesses; the lock is never held across an await point.

use core::cell::RefCell;

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::{Error, Result};

/// Where the clock starts until someone sets it: the date this project was
/// first powered on.
const FIRST_POWER_ON: DateTime = DateTime {
    year: 2024,
    month: 11,
    day: 24,
    day_of_week: DayOfWeek::Sunday,
    hour: 3,
    minute: 22,
    second: 0,
};

/// The real-time clock, shareable across tasks.
pub struct WallClock {
    rtc: Mutex<CriticalSectionRawMutex, RefCell<Rtc<'static, RTC>>>,
}

impl WallClock {
    /// Wrap the RTC peripheral, starting it from [`FIRST_POWER_ON`] if it is
    /// not already running.
    pub fn new(mut rtc: Rtc<'static, RTC>) -> Result<Self> {
        if !rtc.is_running() {
            rtc.set_datetime(FIRST_POWER_ON).map_err(Error::Rtc)?;
        }
        Ok(Self {
            rtc: Mutex::new(RefCell::new(rtc)),
        })
    }

    /// The current date and time (24-hour).
    pub fn now(&self) -> Result<DateTime> {
        self.rtc
            .lock(|cell| cell.borrow().now().map_err(Error::Rtc))
    }

    /// Overwrite only the given time-of-day fields, preserving the date and
    /// any field passed as `None`. Read-merge-write happens under the lock,
    /// so concurrent setters cannot interleave.
    pub fn overlay_time_of_day(
        &self,
        hour: Option<u8>,
        minute: Option<u8>,
        second: Option<u8>,
    ) -> Result<()> {
        self.rtc.lock(|cell| {
            let mut rtc = cell.borrow_mut();
            let now = rtc.now().map_err(Error::Rtc)?;
            let merged = DateTime {
                hour: hour.unwrap_or(now.hour),
                minute: minute.unwrap_or(now.minute),
                second: second.unwrap_or(now.second),
                ..now
            };
            rtc.set_datetime(merged).map_err(Error::Rtc)
        })
    }
}
