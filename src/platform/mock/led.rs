//! Mock LED implementation for testing

use crate::platform::{traits::LedInterface, Result};

/// Capacity of the recorded level-write history
const HISTORY_LEN: usize = 32;

/// Mock LED implementation
///
/// Tracks the current output level and records every level write for test
/// verification. The history saturates at [`HISTORY_LEN`] entries; writes
/// beyond that still update the current level.
#[derive(Debug, Default)]
pub struct MockLed {
    state: bool,
    history: heapless::Vec<bool, HISTORY_LEN>,
}

impl MockLed {
    /// Create a new mock LED, initially off
    pub fn new() -> Self {
        Self::default()
    }

    /// Level writes observed so far, in order
    pub fn history(&self) -> &[bool] {
        &self.history
    }

    fn record(&mut self, on: bool) {
        self.state = on;
        let _ = self.history.push(on);
    }
}

impl LedInterface for MockLed {
    fn set_high(&mut self) -> Result<()> {
        self.record(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.record(false);
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        let next = !self.state;
        self.record(next);
        Ok(())
    }

    fn read(&self) -> bool {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_led_levels() {
        let mut led = MockLed::new();
        assert!(!led.read());

        led.set_high().unwrap();
        assert!(led.read());

        led.set_low().unwrap();
        assert!(!led.read());
    }

    #[test]
    fn test_mock_led_toggle() {
        let mut led = MockLed::new();

        led.toggle().unwrap();
        assert!(led.read());

        led.toggle().unwrap();
        assert!(!led.read());
    }

    #[test]
    fn test_mock_led_history() {
        let mut led = MockLed::new();

        led.set_high().unwrap();
        led.set_low().unwrap();
        led.toggle().unwrap();

        assert_eq!(led.history(), &[true, false, true]);
    }
}
