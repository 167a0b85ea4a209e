//! Startup sequence
//!
//! Runs the linear process lifecycle once: radio bring-up, one call to the
//! computation provider, delay derivation, LED claim. The result is a
//! configured [`Blinker`] ready to run forever, or an error the caller
//! decides how to handle. Nothing here retries or spins on failure.

use crate::blink::{derive_delay_ms, Blinker};
use crate::compute::ComputeProvider;
use crate::platform::{
    traits::{Platform, WirelessInterface},
    Result,
};

/// Bring up the wireless subsystem and configure the blink loop
///
/// Control flow: enable radio -> call provider exactly once -> derive delay
/// -> claim LED. On any error the LED is never claimed and never toggled.
///
/// # Errors
///
/// - `PlatformError::Wireless(WirelessError::EnableFailed)` if the radio
///   does not come up
/// - `PlatformError::ResourceUnavailable` if the LED was already claimed
pub fn start<P: Platform, C: ComputeProvider>(
    platform: &mut P,
    provider: &mut C,
) -> Result<Blinker<<P::Wireless as WirelessInterface>::Led>> {
    platform.wireless().enable()?;

    let result = provider.compute();
    let delay_ms = derive_delay_ms(result);
    crate::log_info!("computation result {}, blink delay {} ms", result, delay_ms);

    let led = platform.wireless().claim_led()?;
    Ok(Blinker::new(led, delay_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::BlinkPhase;
    use crate::compute::FixedCompute;
    use crate::platform::error::{PlatformError, WirelessError};
    use crate::platform::mock::MockPlatform;
    use crate::platform::traits::TimerInterface;

    #[test]
    fn test_start_derives_delay_from_provider() {
        let mut platform = MockPlatform::new();
        let mut provider = FixedCompute::new(3);

        let blinker = start(&mut platform, &mut provider).unwrap();

        assert_eq!(blinker.delay_ms(), 3000);
        assert_eq!(blinker.phase(), BlinkPhase::On);
        assert!(platform.wireless().is_enabled());
    }

    #[test]
    fn test_start_clamps_zero_result() {
        let mut platform = MockPlatform::new();
        let mut provider = FixedCompute::new(0);

        let blinker = start(&mut platform, &mut provider).unwrap();
        assert_eq!(blinker.delay_ms(), 50);
    }

    #[test]
    fn test_radio_failure_never_claims_led() {
        let mut platform = MockPlatform::with_radio_failure();
        let mut provider = FixedCompute::new(1);

        let err = start(&mut platform, &mut provider).unwrap_err();

        assert_eq!(err, PlatformError::Wireless(WirelessError::EnableFailed));
        assert!(!platform.wireless().led_claimed());
    }

    #[test]
    fn test_blink_sequence_after_start() {
        let mut platform = MockPlatform::new();
        let mut provider = FixedCompute::new(1);

        let mut blinker = start(&mut platform, &mut provider).unwrap();
        for _ in 0..4 {
            blinker.step(platform.timer_mut()).unwrap();
        }

        // ON phase first, each level held for the derived delay
        assert_eq!(blinker.led().history(), &[true, false, true, false]);
        assert_eq!(platform.timer().now_ms(), 4000);
    }

    #[test]
    fn test_start_claims_led_exactly_once() {
        let mut platform = MockPlatform::new();
        let mut provider = FixedCompute::new(1);

        let _blinker = start(&mut platform, &mut provider).unwrap();
        let err = start(&mut platform, &mut provider).unwrap_err();
        assert_eq!(err, PlatformError::ResourceUnavailable);
    }
}
