//! The blink controller.
//!
//! A linear initialization followed by a two phase loop:
//!
//! ```text
//! console init -> line as output -> banner
//! loop { assert + "LED on", wait, deassert + "LED off", wait }
//! ```
//!
//! Each phase sets the level first and writes its status line right after,
//! with nothing in between. The delay is a plain blocking wait, there is no
//! drift correction.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

use crate::{
    config::BlinkConfig,
    error::BlinkError,
    io::{Console, Halt, OutputLine},
    log::{log_debug, log_trace, log_warn},
    state::LedState,
};

/// Number of phases a bounded run completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycles {
    phases: u32,
}

impl Cycles {
    /// Completed phases, each one a level change followed by its delay.
    pub fn phases(&self) -> u32 {
        self.phases
    }

    /// Completed on + off pairs.
    pub fn full_cycles(&self) -> u32 {
        self.phases / 2
    }

    /// Counts one more phase. Wraps around on runs that never halt.
    fn record(&mut self) {
        self.phases = self.phases.wrapping_add(1);
    }
}

/// Drives one output line through the on/off cycle.
///
/// `L` is the LED line, `D` the delay and `C` the console. The controller
/// owns all three until [`BlinkController::release`].
pub struct BlinkController<L, D, C> {
    config: BlinkConfig,
    line: L,
    delay: D,
    console: C,
    /// The phase applied by the next call to `phase`
    state: LedState,
    initialized: bool,
}

impl<L, D, C> BlinkController<L, D, C>
where
    L: OutputLine,
    C: Console,
{
    pub fn new(config: BlinkConfig, line: L, delay: D, console: C) -> Self {
        BlinkController {
            config,
            line,
            delay,
            console,
            state: LedState::FIRST,
            initialized: false,
        }
    }

    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// The phase the next transition will enter.
    pub fn state(&self) -> LedState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Prepares the console, makes the line an output and writes the banner.
    ///
    /// Must run exactly once, before the first phase. A second call is
    /// rejected without touching the line.
    pub fn initialize(&mut self) -> Result<(), BlinkError<L::Error>> {
        if self.initialized {
            log_warn!("blink controller initialized twice");
            return Err(BlinkError::AlreadyInitialized);
        }
        self.bring_up().map_err(BlinkError::Pin)
    }

    /// Applies the current phase: sets the level, then writes the status line.
    ///
    /// Returns the phase that was applied. Does not wait.
    pub fn phase(&mut self) -> Result<LedState, BlinkError<L::Error>> {
        if !self.initialized {
            return Err(BlinkError::NotInitialized);
        }
        self.transition().map_err(BlinkError::Pin)
    }

    /// Gives back the line, the delay and the console.
    pub fn release(self) -> (L, D, C) {
        (self.line, self.delay, self.console)
    }

    fn bring_up(&mut self) -> Result<(), L::Error> {
        self.console.init();
        self.line.set_as_output()?;
        self.initialized = true;
        log_debug!(
            "{} configured as output, {} ms per phase, {}",
            self.config.pin,
            self.config.half_period_ms,
            self.config.polarity
        );
        self.console.write_line(self.config.banner);
        Ok(())
    }

    fn transition(&mut self) -> Result<LedState, L::Error> {
        let state = self.state;
        self.line.set_state(state.pin_state(self.config.polarity))?;
        self.console.write_line(state.message());
        log_trace!("{} {}", self.config.pin, state);
        self.state = state.next();
        Ok(state)
    }
}

impl<L, D, C> BlinkController<L, D, C>
where
    L: OutputLine,
    D: DelayNs,
    C: Console,
{
    /// Runs the cycle until `halt` asks to stop.
    ///
    /// Every phase is followed by one half period delay, then `halt` is
    /// polled. A run that is allowed `k` delays therefore performs exactly
    /// `k` level changes.
    pub fn run_until<H: Halt>(&mut self, mut halt: H) -> Result<Cycles, BlinkError<L::Error>> {
        if !self.initialized {
            return Err(BlinkError::NotInitialized);
        }
        let mut cycles = Cycles::default();
        loop {
            self.step().map_err(BlinkError::Pin)?;
            cycles.record();
            if halt.should_halt() {
                log_debug!("blink halted after {} phases", cycles.phases);
                return Ok(cycles);
            }
        }
    }

    /// One phase followed by its half period delay.
    fn step(&mut self) -> Result<LedState, L::Error> {
        let state = self.transition()?;
        self.delay.delay_ms(self.config.half_period_ms);
        Ok(state)
    }
}

impl<L, D, C> BlinkController<L, D, C>
where
    L: OutputLine<Error = Infallible>,
    D: DelayNs,
    C: Console,
{
    /// Initializes the controller if needed and blinks forever.
    ///
    /// Only available when the line cannot fail.
    pub fn run_forever(mut self) -> ! {
        if !self.initialized {
            let Ok(()) = self.bring_up();
        }
        loop {
            let Ok(_) = self.step();
        }
    }
}

impl<L, D, C> BlinkController<L, D, C>
where
    L: OutputLine,
    D: AsyncDelayNs,
    C: Console,
{
    /// Same cycle as [`BlinkController::run_until`], waiting on an async
    /// delay so an executor can run other tasks in between.
    pub async fn run_until_async<H: Halt>(
        &mut self,
        mut halt: H,
    ) -> Result<Cycles, BlinkError<L::Error>> {
        let mut cycles = Cycles::default();
        loop {
            self.phase()?;
            self.delay.delay_ms(self.config.half_period_ms).await;
            cycles.record();
            if halt.should_halt() {
                log_debug!("blink halted after {} phases", cycles.phases);
                return Ok(cycles);
            }
        }
    }
}
