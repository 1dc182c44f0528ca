#![cfg_attr(not(test), no_std)]

//! Blink controller for a single LED line.
//!
//! The controller configures one GPIO as an output and then alternates it
//! between asserted and deasserted forever, holding each level for a fixed
//! half period and writing a status line on every transition.
//!
//! Nothing in this crate touches hardware directly. The board provides
//! - an [`OutputLine`] (direction + level of one pin),
//! - an [`embedded_hal::delay::DelayNs`] blocking delay,
//! - a [`Console`] for the status lines.
//!
//! so the same controller runs on the Pico and against the recording
//! doubles in [`mock`] on the host.

#[cfg(all(feature = "mock", not(test)))]
extern crate std;

mod log;

pub mod config;
pub mod controller;
pub mod error;
pub mod io;
pub mod state;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::{BlinkConfig, PinId, Polarity};
pub use controller::{BlinkController, Cycles};
pub use error::BlinkError;
pub use io::{AfterPhases, Console, Halt, Never, OutputLine};
pub use state::LedState;
