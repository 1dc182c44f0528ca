//! Blinks the onboard LED from the embassy executor.
//!
//! The delays are `Timer` awaits, so the core sleeps in between phases.

#![no_std]
#![no_main]

use blinky::{BlinkController, Never};
use blinky_rp2040::{
    LED_CONFIG,
    board::{RttConsole, take_led_line},
};
use defmt::{Debug2Format, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Delay;
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let peripherals = embassy_rp::init(Default::default());
    info!("Device started");

    let Some(led) = take_led_line(peripherals, LED_CONFIG.pin) else {
        defmt::panic!("{} is not a bank 0 GPIO", LED_CONFIG.pin);
    };

    let mut blink = BlinkController::new(LED_CONFIG, led, Delay, RttConsole);
    if let Err(error) = blink.initialize() {
        defmt::panic!("blink init failed: {}", Debug2Format(&error));
    }

    match blink.run_until_async(Never).await {
        Ok(cycles) => defmt::panic!("blink loop stopped after {=u32} phases", cycles.phases()),
        Err(error) => defmt::panic!("blink loop failed: {}", Debug2Format(&error)),
    }
}
