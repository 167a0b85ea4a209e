//! Wireless-chip LED blinker for the Raspberry Pi Pico W
//!
//! Brings up the CYW43439 radio, calls the externally linked computation
//! routine once, derives the blink delay from its result, and toggles the
//! onboard LED forever (ON phase first, period 2 x delay). If the radio does
//! not come up, the error is logged and the program parks without ever
//! blinking.
//!
//! # Hardware
//!
//! Raspberry Pi Pico W - onboard LED on the wireless chip's WL_GPIO 0.
//!
//! # Usage
//!
//! ```bash
//! # Flash the CYW43439 blobs once (see platform::pico_w::wireless)
//! probe-rs download 43439A0.bin --binary-format bin --chip RP2040 --base-address 0x10100000
//! probe-rs download 43439A0_clm.bin --binary-format bin --chip RP2040 --base-address 0x10140000
//!
//! # Build and run (requires an object providing the asm_compute symbol)
//! cargo run --release --example blinky --features pico_w --target thumbv6m-none-eabi
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Timer;
use pico_blink::blink::derive_delay_ms;
use pico_blink::compute::{AsmCompute, ComputeProvider};
use pico_blink::platform::pico_w::{init_wireless, WirelessLed, WirelessPins};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let pins = WirelessPins {
        pwr: p.PIN_23,
        cs: p.PIN_25,
        dio: p.PIN_24,
        clk: p.PIN_29,
        pio: p.PIO0,
        dma: p.DMA_CH0,
    };

    let control = match init_wireless(spawner, pins).await {
        Ok(control) => control,
        Err(e) => {
            defmt::error!("radio bring-up failed: {}", e);
            // Terminal error state: the LED never blinks. Park while
            // yielding the core instead of spinning.
            loop {
                Timer::after_secs(1).await;
            }
        }
    };
    let mut led = WirelessLed::new(control);

    let result = AsmCompute::new().compute();
    let delay_ms = derive_delay_ms(result);
    defmt::info!("computation result {}, blink delay {} ms", result, delay_ms);

    loop {
        led.set_high().await;
        Timer::after_millis(delay_ms).await;
        led.set_low().await;
        Timer::after_millis(delay_ms).await;
    }
}
