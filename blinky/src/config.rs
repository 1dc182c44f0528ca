//! Blink configuration.
//!
//! Everything here is decided at compile time. The defaults describe the
//! Raspberry Pi Pico: the onboard LED sits on GPIO 25 and lights up when the
//! pin is HIGH.

/// Onboard LED of the Raspberry Pi Pico
pub const PICO_LED_PIN: PinId = PinId(25);

/// How long each phase is held, in milliseconds
pub const DEFAULT_HALF_PERIOD_MS: u32 = 500;

/// Written once to the console before the first transition
pub const DEFAULT_BANNER: &str = "Pico SDK LED Blink Example";

/// Logical GPIO number of the LED line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl PinId {
    pub const fn number(&self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(number: u8) -> Self {
        PinId(number)
    }
}

impl core::fmt::Display for PinId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Which electrical level lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// The LED lights up when the pin is HIGH.
    #[default]
    ActiveHigh,
    /// The LED lights up when the pin is LOW.
    ActiveLow,
}

/// Parameters of a [`BlinkController`](crate::BlinkController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    /// The GPIO driving the LED
    pub pin: PinId,
    /// Duration of each phase. The duty cycle is always 50%.
    pub half_period_ms: u32,
    /// Startup banner
    pub banner: &'static str,
    pub polarity: Polarity,
}

impl BlinkConfig {
    /// The onboard LED of the Pico, 500 ms on and 500 ms off.
    pub const fn pico() -> BlinkConfig {
        BlinkConfig {
            pin: PICO_LED_PIN,
            half_period_ms: DEFAULT_HALF_PERIOD_MS,
            banner: DEFAULT_BANNER,
            polarity: Polarity::ActiveHigh,
        }
    }

    pub const fn with_pin(mut self, pin: PinId) -> BlinkConfig {
        self.pin = pin;
        self
    }

    pub const fn with_half_period_ms(mut self, half_period_ms: u32) -> BlinkConfig {
        self.half_period_ms = half_period_ms;
        self
    }

    pub const fn with_banner(mut self, banner: &'static str) -> BlinkConfig {
        self.banner = banner;
        self
    }

    pub const fn with_polarity(mut self, polarity: Polarity) -> BlinkConfig {
        self.polarity = polarity;
        self
    }

    /// Length of a full on + off cycle, in milliseconds.
    pub const fn period_ms(&self) -> u32 {
        self.half_period_ms.saturating_mul(2)
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        BlinkConfig::pico()
    }
}
