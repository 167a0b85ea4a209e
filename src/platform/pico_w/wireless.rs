//! Pico W wireless chip bring-up
//!
//! Initializes the CYW43439 wireless chip over PIO SPI and hands back the
//! control handle. The chip owns the Pico W's onboard LED (WL_GPIO 0), so
//! [`WirelessLed`] is the way to drive it.
//!
//! No network stack is brought up here: the chip is initialized for LED
//! control only, and no join or IP configuration ever happens.
//!
//! # Bring-up Flow
//!
//! ```text
//! 1. Locate CYW43439 firmware + CLM blobs in flash
//! 2. Initialize PIO SPI to the chip (PWR, CS, DIO, CLK, DMA)
//! 3. Spawn the cyw43 driver task on the Embassy executor
//! 4. Push the CLM and set power management
//! 5. Return the control handle
//! ```
//!
//! Failure is surfaced as `PlatformError::Wireless(..)`; the caller decides
//! whether to halt, retry, or report.

use crate::platform::{
    error::{PlatformError, WirelessError},
    Result,
};

use cyw43::Control;
use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    gpio::{Level, Output},
    peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0},
    pio::{InterruptHandler as PioInterruptHandler, Pio},
};
use embassy_time::{with_timeout, Duration};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Wireless chip GPIO line wired to the onboard LED
pub const WL_GPIO_LED: u8 = 0;

/// Upper bound on chip bring-up; exceeding it reports a failed radio
const INIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Flash location of the CYW43439 main firmware blob
const FW_ADDR: usize = 0x10100000;
const FW_LEN: usize = 230321;

/// Flash location of the CYW43439 CLM blob
const CLM_ADDR: usize = 0x10140000;
const CLM_LEN: usize = 4752;

/// Peripherals consumed by the wireless chip
///
/// These pins are hardwired to the CYW43439 on the Pico W board.
pub struct WirelessPins {
    /// WL_ON power line (GPIO 23)
    pub pwr: PIN_23,
    /// SPI chip select (GPIO 25)
    pub cs: PIN_25,
    /// SPI data line (GPIO 24)
    pub dio: PIN_24,
    /// SPI clock (GPIO 29)
    pub clk: PIN_29,
    /// PIO block driving the SPI
    pub pio: PIO0,
    /// DMA channel for SPI transfers
    pub dma: DMA_CH0,
}

#[embassy_executor::task]
async fn wireless_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Bring up the CYW43439 wireless chip
///
/// Called exactly once at startup. The chip cannot be de-initialized within
/// this process.
///
/// The firmware blobs are not baked into the image; flash them separately at
/// the fixed addresses above:
///
/// ```bash
/// probe-rs download 43439A0.bin --binary-format bin --chip RP2040 --base-address 0x10100000
/// probe-rs download 43439A0_clm.bin --binary-format bin --chip RP2040 --base-address 0x10140000
/// ```
///
/// # Errors
///
/// - `PlatformError::Wireless(WirelessError::Timeout)` if the chip does not
///   come up within [`INIT_TIMEOUT`]
/// - `PlatformError::Wireless(WirelessError::EnableFailed)` if the driver
///   task cannot be spawned
pub async fn init_wireless(spawner: Spawner, pins: WirelessPins) -> Result<Control<'static>> {
    // 1. Locate CYW43439 firmware, flashed at fixed addresses
    let fw = unsafe { core::slice::from_raw_parts(FW_ADDR as *const u8, FW_LEN) };
    let clm = unsafe { core::slice::from_raw_parts(CLM_ADDR as *const u8, CLM_LEN) };

    // 2. Initialize PIO for wireless SPI communication
    let pwr = Output::new(pins.pwr, Level::Low);
    let cs = Output::new(pins.cs, Level::High);
    let mut pio = Pio::new(pins.pio, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        pins.dio,
        pins.clk,
        pins.dma,
    );

    // 3. Initialize the cyw43 driver
    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (_net_device, mut control, runner) =
        with_timeout(INIT_TIMEOUT, cyw43::new(state, pwr, spi, fw))
            .await
            .map_err(|_| PlatformError::Wireless(WirelessError::Timeout))?;

    // 4. Spawn the driver task
    spawner
        .spawn(wireless_task(runner))
        .map_err(|_| PlatformError::Wireless(WirelessError::EnableFailed))?;

    // 5. Push the CLM and configure power management
    with_timeout(INIT_TIMEOUT, control.init(clm))
        .await
        .map_err(|_| PlatformError::Wireless(WirelessError::Timeout))?;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    crate::log_info!("wireless chip initialized");
    Ok(control)
}

/// Onboard LED handle, driven through the wireless chip
///
/// The line lives on the CYW43439, so every level write is an async exchange
/// with the chip rather than an SIO register write.
pub struct WirelessLed {
    control: Control<'static>,
    state: bool,
}

impl WirelessLed {
    /// Wrap a wireless control handle as an LED
    pub fn new(control: Control<'static>) -> Self {
        Self {
            control,
            state: false,
        }
    }

    /// Drive the LED line to the given level
    pub async fn set(&mut self, on: bool) {
        self.control.gpio_set(WL_GPIO_LED, on).await;
        self.state = on;
    }

    /// Drive the LED line high
    pub async fn set_high(&mut self) {
        self.set(true).await;
    }

    /// Drive the LED line low
    pub async fn set_low(&mut self) {
        self.set(false).await;
    }

    /// Last level written to the LED line
    pub fn is_on(&self) -> bool {
        self.state
    }
}
