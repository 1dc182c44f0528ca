//! RP2040 implementations of the blink controller's collaborators.

use core::convert::Infallible;

use blinky::{Console, OutputLine, PinId};
use embassy_rp::{Peripherals, gpio::Flex};
use embedded_hal::digital::{ErrorType, OutputPin};

/// A bank 0 GPIO used as the LED line.
///
/// The pin starts as an input (high impedance) and only drives the LED
/// once the controller calls [`OutputLine::set_as_output`].
pub struct LedLine {
    flex: Flex<'static>,
}

impl LedLine {
    pub fn new(flex: Flex<'static>) -> LedLine {
        LedLine { flex }
    }
}

impl ErrorType for LedLine {
    type Error = Infallible;
}

impl OutputPin for LedLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.flex.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.flex.set_high();
        Ok(())
    }
}

impl OutputLine for LedLine {
    fn set_as_output(&mut self) -> Result<(), Self::Error> {
        self.flex.set_as_output();
        Ok(())
    }
}

/// Expands to a `match` on a GPIO number that moves the matching field
/// out of `Peripherals` and wraps it in a [`LedLine`].
macro_rules! bank0_line {
    ($p:ident, $number:expr, $($gpio:literal => $field:ident),+ $(,)?) => {
        match $number {
            $($gpio => Some(LedLine::new(Flex::new($p.$field))),)+
            _ => None,
        }
    };
}

/// Takes the GPIO numbered `pin` out of the RP2040 peripherals.
///
/// Returns `None` for numbers outside bank 0 (GPIO 0 to 29).
pub fn take_led_line(p: Peripherals, pin: PinId) -> Option<LedLine> {
    bank0_line!(p, pin.number(),
        0 => PIN_0, 1 => PIN_1, 2 => PIN_2, 3 => PIN_3, 4 => PIN_4,
        5 => PIN_5, 6 => PIN_6, 7 => PIN_7, 8 => PIN_8, 9 => PIN_9,
        10 => PIN_10, 11 => PIN_11, 12 => PIN_12, 13 => PIN_13, 14 => PIN_14,
        15 => PIN_15, 16 => PIN_16, 17 => PIN_17, 18 => PIN_18, 19 => PIN_19,
        20 => PIN_20, 21 => PIN_21, 22 => PIN_22, 23 => PIN_23, 24 => PIN_24,
        25 => PIN_25, 26 => PIN_26, 27 => PIN_27, 28 => PIN_28, 29 => PIN_29,
    )
}

/// Status lines over RTT, read on the host by `probe-rs`.
pub struct RttConsole;

impl Console for RttConsole {
    fn write_line(&mut self, line: &str) {
        defmt::println!("{=str}", line);
    }
}
