#![no_std]

//! Raspberry Pi Pico firmware for the blink controller.
//!
//! The binaries in `src/bin` share the board glue in [`board`] and the
//! blink parameters in [`LED_CONFIG`].

pub mod board;

use blinky::BlinkConfig;

/// Onboard LED on GPIO 25, 500 ms on and 500 ms off.
pub const LED_CONFIG: BlinkConfig = BlinkConfig::pico();
