//! External-LED variant of the blinker
//!
//! Same pipeline as `blinky`, but over a plain GPIO pin with the blocking
//! `Blinker` state machine and a deterministic computation provider. Useful
//! for bench checks without the wireless chip (or with an LED on GPIO 15).
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --example blinky_gpio --features pico_w --target thumbv6m-none-eabi
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::gpio::Pin;
use embassy_time::Timer;
use pico_blink::blink::{derive_delay_ms, Blinker};
use pico_blink::compute::{ComputeProvider, FixedCompute};
use pico_blink::platform::pico_w::{PicoLed, PicoTimer};
use {defmt_rtt as _, panic_probe as _};

/// Stand-in computation result (seconds per phase)
const BLINK_SECONDS: i32 = 1;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let mut provider = FixedCompute::new(BLINK_SECONDS);
    let delay_ms = derive_delay_ms(provider.compute());
    defmt::info!("blink delay {} ms", delay_ms);

    let mut blinker = Blinker::new(PicoLed::new(p.PIN_15.degrade()), delay_ms);
    let mut timer = PicoTimer::new();

    // Blocking loop; only returns if a hardware write fails.
    if let Err(e) = blinker.run(&mut timer) {
        defmt::error!("blink loop failed: {}", e);
    }
    loop {
        Timer::after_secs(1).await;
    }
}
