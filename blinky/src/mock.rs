//! Recording test doubles for the controller's collaborators.
//!
//! All doubles append to one shared [`Journal`], so a test can check the
//! relative order of direction changes, levels, console lines and delays.

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin, PinState};

use crate::io::{Console, OutputLine};

/// One observable side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ConsoleInit,
    SetOutput,
    Level(PinState),
    Line(String),
    DelayMs(u32),
    DelayNs(u32),
}

/// Shared, ordered log of [`Event`]s.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Journal {
    pub fn new() -> Journal {
        Journal::default()
    }

    pub fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn levels(&self) -> Vec<PinState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Level(level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Line(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn delays_ms(&self) -> Vec<u32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    /// Index of the first event equal to `event`.
    pub fn position(&self, event: &Event) -> Option<usize> {
        self.events.borrow().iter().position(|e| e == event)
    }
}

/// An infallible output line.
#[derive(Debug)]
pub struct MockLine {
    journal: Journal,
    output: bool,
}

impl MockLine {
    pub fn new(journal: &Journal) -> MockLine {
        MockLine {
            journal: journal.clone(),
            output: false,
        }
    }

    pub fn is_output(&self) -> bool {
        self.output
    }
}

impl ErrorType for MockLine {
    type Error = Infallible;
}

impl OutputPin for MockLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.journal.push(Event::Level(PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.journal.push(Event::Level(PinState::High));
        Ok(())
    }
}

impl OutputLine for MockLine {
    fn set_as_output(&mut self) -> Result<(), Self::Error> {
        self.output = true;
        self.journal.push(Event::SetOutput);
        Ok(())
    }
}

/// Error returned by [`FailingLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFault;

impl digital::Error for LineFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A line that accepts its direction but rejects every level change.
#[derive(Debug)]
pub struct FailingLine {
    journal: Journal,
}

impl FailingLine {
    pub fn new(journal: &Journal) -> FailingLine {
        FailingLine {
            journal: journal.clone(),
        }
    }
}

impl ErrorType for FailingLine {
    type Error = LineFault;
}

impl OutputPin for FailingLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(LineFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(LineFault)
    }
}

impl OutputLine for FailingLine {
    fn set_as_output(&mut self) -> Result<(), Self::Error> {
        self.journal.push(Event::SetOutput);
        Ok(())
    }
}

/// A console that records every line.
#[derive(Debug)]
pub struct MockConsole {
    journal: Journal,
}

impl MockConsole {
    pub fn new(journal: &Journal) -> MockConsole {
        MockConsole {
            journal: journal.clone(),
        }
    }
}

impl Console for MockConsole {
    fn init(&mut self) {
        self.journal.push(Event::ConsoleInit);
    }

    fn write_line(&mut self, line: &str) {
        self.journal.push(Event::Line(line.to_string()));
    }
}

/// A delay that returns immediately.
///
/// With a budget, the delay panics when called more often than allowed and
/// [`MockDelay::exhausted`] yields a [`Halt`](crate::Halt) token that fires
/// once the budget is used up.
#[derive(Debug)]
pub struct MockDelay {
    journal: Journal,
    remaining: Option<Rc<Cell<u32>>>,
}

impl MockDelay {
    pub fn new(journal: &Journal) -> MockDelay {
        MockDelay {
            journal: journal.clone(),
            remaining: None,
        }
    }

    /// Allows exactly `calls` delays.
    pub fn with_budget(journal: &Journal, calls: u32) -> MockDelay {
        MockDelay {
            journal: journal.clone(),
            remaining: Some(Rc::new(Cell::new(calls))),
        }
    }

    /// A halt token that stops the run once the budget is spent.
    ///
    /// Never fires for a delay without a budget.
    pub fn exhausted(&self) -> impl FnMut() -> bool + use<> {
        let remaining = self.remaining.clone();
        move || remaining.as_ref().is_some_and(|left| left.get() == 0)
    }

    fn spend(&mut self, event: Event) {
        if let Some(left) = &self.remaining {
            assert!(left.get() > 0, "delay called after the budget was spent");
            left.set(left.get() - 1);
        }
        self.journal.push(event);
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.spend(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.spend(Event::DelayMs(ms));
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.spend(Event::DelayNs(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.spend(Event::DelayMs(ms));
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::delay::DelayNs;

    use super::*;
    use crate::io::Halt;

    #[test]
    fn journal_keeps_order_across_doubles() {
        let journal = Journal::new();
        let mut line = MockLine::new(&journal);
        let mut console = MockConsole::new(&journal);

        line.set_as_output().unwrap();
        line.set_high().unwrap();
        console.write_line("hello");

        assert!(line.is_output());
        assert_eq!(
            journal.events(),
            [
                Event::SetOutput,
                Event::Level(PinState::High),
                Event::Line("hello".to_string())
            ]
        );
    }

    #[test]
    fn budget_fires_halt_when_spent() {
        let journal = Journal::new();
        let mut delay = MockDelay::with_budget(&journal, 2);
        let mut halt = delay.exhausted();

        delay.delay_ms(10);
        assert!(!halt.should_halt());
        delay.delay_ms(10);
        assert!(halt.should_halt());
        assert_eq!(journal.delays_ms(), [10, 10]);
    }

    #[test]
    #[should_panic(expected = "budget")]
    fn budget_panics_on_extra_delay() {
        let journal = Journal::new();
        let mut delay = MockDelay::with_budget(&journal, 1);
        delay.delay_ms(1);
        delay.delay_ms(1);
    }

    #[test]
    fn unbudgeted_delay_never_halts() {
        let journal = Journal::new();
        let mut delay = MockDelay::new(&journal);
        let mut halt = delay.exhausted();
        delay.delay_ms(1);
        assert!(!halt.should_halt());
    }

    #[test]
    fn failing_line_rejects_levels() {
        let journal = Journal::new();
        let mut line = FailingLine::new(&journal);
        assert_eq!(line.set_as_output(), Ok(()));
        assert_eq!(line.set_high(), Err(LineFault));
        assert_eq!(line.set_state(PinState::Low), Err(LineFault));
    }
}
