//! Blinks the onboard LED with blocking delays, no executor involved.

#![no_std]
#![no_main]

use blinky::BlinkController;
use blinky_rp2040::{
    LED_CONFIG,
    board::{RttConsole, take_led_line},
};
use cortex_m_rt::entry;
use defmt::info;
use defmt_rtt as _;
use embassy_time::Delay;
use panic_probe as _;

#[entry]
fn main() -> ! {
    let peripherals = embassy_rp::init(Default::default());
    info!("Device started");

    let Some(led) = take_led_line(peripherals, LED_CONFIG.pin) else {
        defmt::panic!("{} is not a bank 0 GPIO", LED_CONFIG.pin);
    };

    // `Delay` busy-waits on the embassy time driver, the whole core
    // stalls for each half period.
    BlinkController::new(LED_CONFIG, led, Delay, RttConsole).run_forever()
}
