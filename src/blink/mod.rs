//! Blink state machine
//!
//! Two-phase loop driving an LED: hold the line high for the derived delay,
//! then low for the same delay, forever. The LED handle is owned by the
//! blinker for the remainder of process life; the delay is computed once at
//! startup and never recomputed.

pub mod delay;

pub use delay::{derive_delay_ms, MIN_DELAY_MS};

use crate::platform::{traits::TimerInterface, LedInterface, Result};

/// Blink loop phase
///
/// Initial phase is [`BlinkPhase::On`]; phases alternate after each delay.
/// There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    /// LED driven high
    On,
    /// LED driven low
    Off,
}

impl BlinkPhase {
    /// The phase after this one
    pub fn next(self) -> Self {
        match self {
            BlinkPhase::On => BlinkPhase::Off,
            BlinkPhase::Off => BlinkPhase::On,
        }
    }
}

/// LED blink loop
///
/// Owns the LED handle and the derived delay. Each step drives the level for
/// the current phase, blocks for the delay, and advances the phase, giving a
/// full period of `2 x delay`.
#[derive(Debug)]
pub struct Blinker<L: LedInterface> {
    led: L,
    delay_ms: u64,
    phase: BlinkPhase,
}

impl<L: LedInterface> Blinker<L> {
    /// Create a blinker starting in the ON phase
    pub fn new(led: L, delay_ms: u64) -> Self {
        Self {
            led,
            delay_ms,
            phase: BlinkPhase::On,
        }
    }

    /// Delay held in each phase, in milliseconds
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Phase the next step will drive
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// The owned LED handle
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Drive one phase: set the level, block for the delay, advance
    ///
    /// # Errors
    ///
    /// Propagates LED and timer errors; the phase does not advance if the
    /// level write fails.
    pub fn step<T: TimerInterface>(&mut self, timer: &mut T) -> Result<()> {
        match self.phase {
            BlinkPhase::On => self.led.set_high()?,
            BlinkPhase::Off => self.led.set_low()?,
        }
        timer.delay_ms(self.delay_ms)?;
        self.phase = self.phase.next();
        Ok(())
    }

    /// Run the blink loop forever
    ///
    /// Never returns under normal operation. An `Err` means a hardware write
    /// or delay failed; it is surfaced to the caller instead of being
    /// swallowed.
    pub fn run<T: TimerInterface>(
        &mut self,
        timer: &mut T,
    ) -> Result<core::convert::Infallible> {
        loop {
            self.step(timer)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockLed, MockTimer};

    #[test]
    fn test_blinker_starts_in_on_phase() {
        let blinker = Blinker::new(MockLed::new(), 1000);
        assert_eq!(blinker.phase(), BlinkPhase::On);
        assert!(!blinker.led().read());
    }

    #[test]
    fn test_first_step_drives_high() {
        let mut blinker = Blinker::new(MockLed::new(), 1000);
        let mut timer = MockTimer::new();

        blinker.step(&mut timer).unwrap();

        assert!(blinker.led().read());
        assert_eq!(blinker.phase(), BlinkPhase::Off);
    }

    #[test]
    fn test_phases_alternate() {
        let mut blinker = Blinker::new(MockLed::new(), 50);
        let mut timer = MockTimer::new();

        for _ in 0..4 {
            blinker.step(&mut timer).unwrap();
        }

        assert_eq!(blinker.led().history(), &[true, false, true, false]);
    }

    #[test]
    fn test_each_phase_holds_for_delay() {
        let mut blinker = Blinker::new(MockLed::new(), 200);
        let mut timer = MockTimer::new();

        blinker.step(&mut timer).unwrap();
        blinker.step(&mut timer).unwrap();

        assert_eq!(timer.sleeps_us(), &[200_000, 200_000]);
    }

    #[test]
    fn test_full_period_is_twice_the_delay() {
        let mut blinker = Blinker::new(MockLed::new(), 1000);
        let mut timer = MockTimer::new();

        // One ON phase plus one OFF phase
        blinker.step(&mut timer).unwrap();
        blinker.step(&mut timer).unwrap();

        assert_eq!(timer.now_ms(), 2 * blinker.delay_ms());
        assert_eq!(blinker.phase(), BlinkPhase::On);
    }

    #[test]
    fn test_phase_next_cycles() {
        assert_eq!(BlinkPhase::On.next(), BlinkPhase::Off);
        assert_eq!(BlinkPhase::Off.next(), BlinkPhase::On);
    }
}
