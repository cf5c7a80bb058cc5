//! Blocking delay adapter.
//!
//! Implements [`DelayNs`] for the executor's inter-tick wait and the
//! probes' settle time.
//!
//! - **`target_os = "espidf"`** — millisecond waits yield to FreeRTOS
//!   (`vTaskDelay`), sub-millisecond waits busy-wait in ROM (`ets_delay_us`).
//! - **`not(target_os = "espidf")`** — `std::thread::sleep` for host-side
//!   simulation.

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct LoopDelay;

impl LoopDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for LoopDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ns(&mut self, ns: u32) {
        esp_idf_svc::hal::delay::Ets::delay_us(ns.div_ceil(1_000));
    }

    #[cfg(target_os = "espidf")]
    fn delay_ms(&mut self, ms: u32) {
        esp_idf_svc::hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}
