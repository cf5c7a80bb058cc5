//! Board pin adapter.
//!
//! Implements [`PinPort`] on top of the `hw_init` primitives, so the
//! sensor reader samples real ADC/GPIO on target and the simulated pin
//! bank on the host.

use crate::app::ports::PinPort;
use crate::drivers::hw_init;

/// Zero-sized handle to the board's pins.  Peripherals must have been
/// configured by [`hw_init::init_peripherals`] first.
#[derive(Debug, Default, Clone, Copy)]
pub struct HwBoard;

impl HwBoard {
    pub fn new() -> Self {
        Self
    }
}

impl PinPort for HwBoard {
    fn digital_write(&mut self, pin: u8, high: bool) {
        hw_init::gpio_write(pin, high);
    }

    fn digital_read(&mut self, pin: u8) -> bool {
        hw_init::gpio_read(pin)
    }

    fn analog_read(&mut self, pin: u8) -> u16 {
        hw_init::adc_read(pin)
    }
}
