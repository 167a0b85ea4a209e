//! Pico W GPIO LED implementation
//!
//! Drives an LED attached to an ordinary GPIO pin. The Pico W's onboard LED
//! hangs off the wireless chip instead and is handled by
//! [`wireless::WirelessLed`](super::wireless::WirelessLed).

use crate::platform::{traits::LedInterface, Result};
use embassy_rp::gpio::{AnyPin, Level, Output};

/// GPIO LED implementation
///
/// Wraps an `embassy-rp` push-pull output to implement the `LedInterface`
/// trait. Level writes on RP2040 SIO cannot fail.
pub struct PicoLed {
    output: Output<'static>,
}

impl PicoLed {
    /// Create a new LED handle on the given pin, initially off
    pub fn new(pin: AnyPin) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }
}

impl LedInterface for PicoLed {
    fn set_high(&mut self) -> Result<()> {
        self.output.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.output.set_low();
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        self.output.toggle();
        Ok(())
    }

    fn read(&self) -> bool {
        self.output.is_set_high()
    }
}
