//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Capacity of the recorded sleep history
const SLEEP_LOG_LEN: usize = 32;

/// Mock Timer implementation
///
/// Uses simulated time: delays advance an internal counter instead of
/// blocking, and each requested sleep duration is recorded in microseconds
/// for test verification.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    sleeps_us: heapless::Vec<u64, SLEEP_LOG_LEN>,
}

impl MockTimer {
    /// Create a new mock timer at t=0
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep durations requested so far, in microseconds
    pub fn sleeps_us(&self) -> &[u64] {
        &self.sleeps_us
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u64) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(us);
        let _ = self.sleeps_us.push(us);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u64) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();

        timer.delay_ms(1).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_us(), 6000);
    }

    #[test]
    fn test_mock_timer_now_ms() {
        let mut timer = MockTimer::new();
        timer.delay_us(3500).unwrap();
        assert_eq!(timer.now_ms(), 3);
    }

    #[test]
    fn test_mock_timer_records_sleeps() {
        let mut timer = MockTimer::new();
        timer.delay_ms(50).unwrap();
        timer.delay_ms(50).unwrap();
        assert_eq!(timer.sleeps_us(), &[50_000, 50_000]);
    }
}
