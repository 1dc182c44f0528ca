use embedded_hal::digital::PinState;

use crate::config::Polarity;

/// The two phases of the blink cycle.
///
/// The cycle starts with [`LedState::On`] and never terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// The phase entered right after initialization.
    pub const FIRST: LedState = LedState::On;

    /// Returns the phase that follows this one.
    pub fn next(&self) -> LedState {
        match self {
            LedState::On => LedState::Off,
            LedState::Off => LedState::On,
        }
    }

    /// `true` when the line is logically asserted (LED lit).
    pub fn is_asserted(&self) -> bool {
        matches!(self, LedState::On)
    }

    /// The status line written to the console when this phase starts.
    pub fn message(&self) -> &'static str {
        match self {
            LedState::On => "LED on",
            LedState::Off => "LED off",
        }
    }

    /// The electrical level that drives the LED into this phase.
    ///
    /// Active low LEDs light up when the pin is LOW, so the level is
    /// inverted for them.
    pub fn pin_state(&self, polarity: Polarity) -> PinState {
        let asserted = self.is_asserted();
        match polarity {
            Polarity::ActiveHigh => PinState::from(asserted),
            Polarity::ActiveLow => PinState::from(!asserted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_and_alternates() {
        let mut state = LedState::FIRST;
        let mut seen = [LedState::Off; 5];
        for slot in seen.iter_mut() {
            *slot = state;
            state = state.next();
        }
        assert_eq!(
            seen,
            [
                LedState::On,
                LedState::Off,
                LedState::On,
                LedState::Off,
                LedState::On
            ]
        );
    }

    #[test]
    fn messages() {
        assert_eq!(LedState::On.message(), "LED on");
        assert_eq!(LedState::Off.message(), "LED off");
    }

    #[test]
    fn active_high_drives_high_when_on() {
        assert_eq!(LedState::On.pin_state(Polarity::ActiveHigh), PinState::High);
        assert_eq!(LedState::Off.pin_state(Polarity::ActiveHigh), PinState::Low);
    }

    #[test]
    fn active_low_inverts_the_level() {
        assert_eq!(LedState::On.pin_state(Polarity::ActiveLow), PinState::Low);
        assert_eq!(LedState::Off.pin_state(Polarity::ActiveLow), PinState::High);
    }
}
