//! Shared items for the panel-meter clock project.
#![no_std]

mod clock_mode;
mod constants;
mod error;
mod gauge;
mod press;
mod quadrature;
mod time_of_day;
mod time_query;

#[cfg(feature = "pico1")]
mod button;
#[cfg(feature = "pico1")]
mod clock_state;
#[cfg(feature = "pico1")]
mod encoder;
#[cfg(feature = "pico1")]
mod face;
#[cfg(feature = "pico1")]
mod meter;
#[cfg(all(feature = "pico1", feature = "wifi"))]
mod time_server;
#[cfg(feature = "pico1")]
mod wall_clock;

// Re-export commonly used items
pub use clock_mode::ClockMode;
pub use constants::*;
pub use error::{Error, Result};
pub use gauge::{Gauge, GaugeCalibration, GaugeScale};
pub use press::{Commit, PressClassifier};
pub use quadrature::{QuadratureDecoder, Step};
pub use time_of_day::{TimeOfDay, fold_hour_12};
pub use time_query::{TimeSetQuery, request_query, resolve_query};

#[cfg(feature = "pico1")]
pub use button::Button;
#[cfg(feature = "pico1")]
pub use clock_state::{PanelClock, ShutdownSignal};
#[cfg(feature = "pico1")]
pub use encoder::RotaryEncoder;
#[cfg(feature = "pico1")]
pub use face::ClockFace;
#[cfg(feature = "pico1")]
pub use meter::PanelMeter;
#[cfg(all(feature = "pico1", feature = "wifi"))]
pub use time_server::TimeSetServer;
#[cfg(feature = "pico1")]
pub use wall_clock::WallClock;
