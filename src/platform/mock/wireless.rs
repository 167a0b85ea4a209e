//! Mock wireless subsystem implementation for testing

use super::MockLed;
use crate::platform::{
    error::{PlatformError, WirelessError},
    traits::WirelessInterface,
    Result,
};

/// Mock wireless subsystem implementation
///
/// Tracks bring-up state and LED claims. Can be constructed in a
/// fail-on-enable mode to exercise the bootstrap failure path.
#[derive(Debug, Default)]
pub struct MockWireless {
    enabled: bool,
    fail_enable: bool,
    led_claimed: bool,
}

impl MockWireless {
    /// Create a new mock wireless subsystem that enables successfully
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock wireless subsystem whose bring-up always fails
    pub fn failing() -> Self {
        Self {
            fail_enable: true,
            ..Self::default()
        }
    }

    /// Whether the LED handle has been claimed
    pub fn led_claimed(&self) -> bool {
        self.led_claimed
    }
}

impl WirelessInterface for MockWireless {
    type Led = MockLed;

    fn enable(&mut self) -> Result<()> {
        if self.fail_enable {
            return Err(PlatformError::Wireless(WirelessError::EnableFailed));
        }
        self.enabled = true;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn claim_led(&mut self) -> Result<Self::Led> {
        if !self.enabled {
            return Err(PlatformError::Wireless(WirelessError::NotEnabled));
        }
        if self.led_claimed {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.led_claimed = true;
        Ok(MockLed::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_wireless_enable() {
        let mut wireless = MockWireless::new();
        assert!(!wireless.is_enabled());

        wireless.enable().unwrap();
        assert!(wireless.is_enabled());
    }

    #[test]
    fn test_mock_wireless_failing_enable() {
        let mut wireless = MockWireless::failing();
        assert_eq!(
            wireless.enable(),
            Err(PlatformError::Wireless(WirelessError::EnableFailed))
        );
        assert!(!wireless.is_enabled());
    }

    #[test]
    fn test_mock_wireless_claim_requires_enable() {
        let mut wireless = MockWireless::new();
        assert!(matches!(
            wireless.claim_led(),
            Err(PlatformError::Wireless(WirelessError::NotEnabled))
        ));
    }

    #[test]
    fn test_mock_wireless_claim_once() {
        let mut wireless = MockWireless::new();
        wireless.enable().unwrap();

        assert!(wireless.claim_led().is_ok());
        assert!(wireless.led_claimed());
        assert_eq!(
            wireless.claim_led().unwrap_err(),
            PlatformError::ResourceUnavailable
        );
    }
}
