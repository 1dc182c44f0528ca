//! Observable behavior of a bounded blink run against recording doubles.

use blinky::{
    BlinkConfig, BlinkController, LedState,
    mock::{Event, Journal, MockConsole, MockDelay, MockLine},
};
use embedded_hal::digital::PinState;

const BANNER: &str = "Pico SDK LED Blink Example";

/// Initializes a Pico controller and lets it run for exactly `delays` delays.
fn run_with_delay_budget(delays: u32) -> (Journal, u32) {
    let journal = Journal::new();
    let delay = MockDelay::with_budget(&journal, delays);
    let halt = delay.exhausted();
    let mut blink = BlinkController::new(
        BlinkConfig::pico(),
        MockLine::new(&journal),
        delay,
        MockConsole::new(&journal),
    );

    blink.initialize().unwrap();
    let cycles = blink.run_until(halt).unwrap();
    (journal, cycles.phases())
}

fn level_of(state: LedState) -> PinState {
    if state.is_asserted() {
        PinState::High
    } else {
        PinState::Low
    }
}

#[test]
fn four_delays_produce_two_full_cycles() {
    let (journal, phases) = run_with_delay_budget(4);

    assert_eq!(phases, 4);
    assert_eq!(
        journal.levels(),
        [PinState::High, PinState::Low, PinState::High, PinState::Low]
    );
    assert_eq!(
        journal.lines(),
        [BANNER, "LED on", "LED off", "LED on", "LED off"]
    );
}

#[test]
fn direction_is_set_once_before_any_level() {
    let (journal, _) = run_with_delay_budget(6);

    assert_eq!(journal.count(&Event::SetOutput), 1);
    let set_output = journal.position(&Event::SetOutput).unwrap();
    let first_level = journal.position(&Event::Level(PinState::High)).unwrap();
    assert!(set_output < first_level);
}

#[test]
fn levels_strictly_alternate_starting_asserted() {
    let (journal, _) = run_with_delay_budget(9);

    let levels = journal.levels();
    assert_eq!(levels.len(), 9);
    let mut expected = LedState::FIRST;
    for level in levels {
        assert_eq!(level, level_of(expected));
        expected = expected.next();
    }
}

#[test]
fn every_phase_waits_the_same_half_period() {
    let (journal, _) = run_with_delay_budget(7);

    let delays = journal.delays_ms();
    assert_eq!(delays.len(), 7);
    assert!(delays.iter().all(|&ms| ms == 500));
}

#[test]
fn each_message_directly_follows_its_level() {
    let (journal, _) = run_with_delay_budget(6);

    let events = journal.events();
    for (index, event) in events.iter().enumerate() {
        let expected = match event {
            Event::Level(PinState::High) => "LED on",
            Event::Level(PinState::Low) => "LED off",
            _ => continue,
        };
        assert_eq!(events[index + 1], Event::Line(expected.to_string()));
        assert_eq!(events[index + 2], Event::DelayMs(500));
    }
}

#[test]
fn banner_is_written_once_before_the_first_level() {
    let (journal, _) = run_with_delay_budget(10);

    let banner = Event::Line(BANNER.to_string());
    assert_eq!(journal.count(&banner), 1);
    assert!(
        journal.position(&banner).unwrap()
            < journal.position(&Event::Level(PinState::High)).unwrap()
    );
}

#[test]
fn bounded_run_has_no_hidden_exit() {
    for delays in 1..=12 {
        let (journal, phases) = run_with_delay_budget(delays);
        let delays = delays as usize;

        assert_eq!(phases as usize, delays);
        assert_eq!(journal.levels().len(), delays);
        // Banner plus one status line per transition
        assert_eq!(journal.lines().len(), delays + 1);
        assert_eq!(journal.delays_ms().len(), delays);
    }
}

#[test]
fn closure_halt_stops_on_request() {
    let journal = Journal::new();
    let mut blink = BlinkController::new(
        BlinkConfig::pico(),
        MockLine::new(&journal),
        MockDelay::new(&journal),
        MockConsole::new(&journal),
    );
    blink.initialize().unwrap();

    let mut polls = 0;
    let mut halt = || {
        polls += 1;
        polls == 3
    };
    let cycles = blink.run_until(&mut halt).unwrap();

    assert_eq!(cycles.phases(), 3);
    assert_eq!(blink.state(), LedState::Off);
}
