//! Collaborators of the blink controller.
//!
//! The level of the line and the blocking delay come straight from the
//! `embedded_hal` traits. Two things are missing from those traits and are
//! defined here:
//! - switching a line's direction to output ([`OutputLine`]),
//! - the console that receives the status lines ([`Console`]).
//!
//! [`Halt`] decides when a bounded run stops. The production loop never
//! consults it.

use embedded_hal::digital::OutputPin;

/// Digital I/O service for a single line.
///
/// Setting the level is inherited from [`OutputPin`]. The controller calls
/// [`OutputLine::set_as_output`] exactly once, before the first level change.
pub trait OutputLine: OutputPin {
    /// Configures the line's direction as output.
    fn set_as_output(&mut self) -> Result<(), Self::Error>;
}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    fn set_as_output(&mut self) -> Result<(), Self::Error> {
        T::set_as_output(self)
    }
}

/// Text output for status lines.
///
/// Writes are fire and forget, a console that cannot keep up drops text.
pub trait Console {
    /// Prepares the console for output. Called once, before the banner.
    fn init(&mut self) {}

    /// Writes `line` followed by a line terminator.
    fn write_line(&mut self, line: &str);
}

impl<T: Console + ?Sized> Console for &mut T {
    fn init(&mut self) {
        T::init(self)
    }

    fn write_line(&mut self, line: &str) {
        T::write_line(self, line)
    }
}

/// Cancellation token for a bounded run.
///
/// Polled after each phase delay completes.
pub trait Halt {
    fn should_halt(&mut self) -> bool;
}

impl<F: FnMut() -> bool> Halt for F {
    fn should_halt(&mut self) -> bool {
        self()
    }
}

/// Never stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Halt for Never {
    fn should_halt(&mut self) -> bool {
        false
    }
}

/// Stops after a fixed number of phases.
#[derive(Debug, Clone, Copy)]
pub struct AfterPhases {
    remaining: u32,
}

impl AfterPhases {
    /// Stops once `phases` phases have completed.
    ///
    /// The token is first polled after a phase, so a run always completes
    /// at least one phase: `new(0)` stops at the same point as `new(1)`.
    pub const fn new(phases: u32) -> AfterPhases {
        AfterPhases { remaining: phases }
    }

    /// Stops after `cycles` full on + off cycles.
    pub const fn cycles(cycles: u32) -> AfterPhases {
        AfterPhases::new(cycles.saturating_mul(2))
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Halt for AfterPhases {
    fn should_halt(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}
