//! Analog panel-meter clock for the Raspberry Pi Pico.
//!
//! Three moving-coil meters show hours, minutes and seconds; a rotary
//! encoder and a push button set the time. Wiring:
//!   - meters on GPIO 10 / 12 / 14 (PWM slices 5A, 6A, 7A)
//!   - push button on GPIO 16 (active high)
//!   - encoder A / B on GPIO 21 / 22 (pulled up)
//!
//! Run with: `cargo run --example meter_clock --release`

#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::{Config, Pwm};
use embassy_rp::rtc::Rtc;
use panel_meter_clock::{
    Button, ClockFace, PanelClock, PanelMeter, Result, RotaryEncoder, ShutdownSignal, WallClock,
};
use panic_probe as _;
use static_cell::StaticCell;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    info!("panel meter clock starting");
    let peripherals = embassy_rp::init(Default::default());

    let hours = PanelMeter::new(Pwm::new_output_a(
        peripherals.PWM_SLICE5,
        peripherals.PIN_10,
        Config::default(),
    ));
    let minutes = PanelMeter::new(Pwm::new_output_a(
        peripherals.PWM_SLICE6,
        peripherals.PIN_12,
        Config::default(),
    ));
    let seconds = PanelMeter::new(Pwm::new_output_a(
        peripherals.PWM_SLICE7,
        peripherals.PIN_14,
        Config::default(),
    ));
    let mut face = ClockFace::new(hours, minutes, seconds);

    static WALL_CLOCK: StaticCell<WallClock> = StaticCell::new();
    let wall_clock = WALL_CLOCK.init(WallClock::new(Rtc::new(peripherals.RTC))?);

    let button = Button::new(Input::new(peripherals.PIN_16, Pull::Down));
    let encoder = RotaryEncoder::new(
        Input::new(peripherals.PIN_21, Pull::Up),
        Input::new(peripherals.PIN_22, Pull::Up),
    );

    face.startup_sweep().await;

    static SHUTDOWN: ShutdownSignal = ShutdownSignal::new();
    let mut clock = PanelClock::new(face, wall_clock, encoder, button);
    clock.run(&SHUTDOWN).await;

    // Only reached after a shutdown request; nothing left to do.
    loop {
        embassy_time::Timer::after(embassy_time::Duration::from_secs(60 * 60 * 24)).await;
    }
}
