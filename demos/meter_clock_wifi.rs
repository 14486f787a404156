//! Panel-meter clock with a Wi-Fi time-set page (Pico W).
//!
//! Same wiring as `meter_clock`, plus the CYW43 radio brought up as an open
//! access point. Join the `Panel Meter Clock` network, give yourself an
//! address in 192.168.4.0/24 (the AP runs no DHCP server), and browse to
//! http://192.168.4.1/ to set the time from the served page or directly:
//! `http://192.168.4.1/?hour=14&minute=5`.
//!
//! Run with: `cargo run --example meter_clock_wifi --features wifi --release`

#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use core::convert::Infallible;

use cyw43_pio::{DEFAULT_CLOCK_DIVIDER, PioSpi};
use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Ipv4Address, Ipv4Cidr, Stack, StackResources};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{DMA_CH0, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pwm::{Config, Pwm};
use embassy_rp::rtc::Rtc;
use panel_meter_clock::{
    Button, ClockFace, PanelClock, PanelMeter, Result, RotaryEncoder, ShutdownSignal,
    TimeSetServer, WallClock,
};
use panic_probe as _;
use static_cell::StaticCell;

const AP_SSID: &str = "Panel Meter Clock";
const AP_CHANNEL: u8 = 1;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[embassy_executor::task]
async fn cyw43_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    info!("panel meter clock (wifi) starting");
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

    // Bring up the radio as an open access point.
    let firmware = cyw43_firmware::CYW43_43439A0;
    let clm = cyw43_firmware::CYW43_43439A0_CLM;

    let pwr = Output::new(peripherals.PIN_23, Level::Low);
    let cs = Output::new(peripherals.PIN_25, Level::High);
    let mut pio = Pio::new(peripherals.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        peripherals.PIN_24,
        peripherals.PIN_29,
        peripherals.DMA_CH0,
    );

    static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = CYW43_STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, firmware).await;
    let cyw43_token = unwrap!(cyw43_task(runner));
    spawner.spawn(cyw43_token);

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    // We are the gateway; clients pick their own address in this subnet.
    let net_config = NetConfig::ipv4_static(embassy_net::StaticConfigV4 {
        address: Ipv4Cidr::new(Ipv4Address::new(192, 168, 4, 1), 24),
        gateway: Some(Ipv4Address::new(192, 168, 4, 1)),
        dns_servers: heapless::Vec::new(),
    });

    static RESOURCES: StaticCell<StackResources<5>> = StaticCell::new();
    static STACK: StaticCell<Stack<'static>> = StaticCell::new();
    let (stack_val, net_runner) = embassy_net::new(
        net_device,
        net_config,
        RESOURCES.init(StackResources::<5>::new()),
        0x0bad_cafe_dead_beef,
    );
    let stack = STACK.init(stack_val);
    let net_token = unwrap!(net_task(net_runner));
    spawner.spawn(net_token);

    control.start_ap_open(AP_SSID, AP_CHANNEL).await;
    stack.wait_config_up().await;
    info!("AP '{}' up at 192.168.4.1", AP_SSID);

    TimeSetServer::start(stack, wall_clock, spawner);

    face.startup_sweep().await;

    static SHUTDOWN: ShutdownSignal = ShutdownSignal::new();
    let mut clock = PanelClock::new(face, wall_clock, encoder, button);
    clock.run(&SHUTDOWN).await;

    // Only reached after a shutdown request; the network tasks keep running.
    loop {
        embassy_time::Timer::after(embassy_time::Duration::from_secs(60 * 60 * 24)).await;
    }
}
