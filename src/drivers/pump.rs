//! Fill pump relay driver.
//!
//! The pump is switched through a single relay channel: energised means
//! running.  There is no speed or direction control.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the relay GPIO via hw_init helpers.
//! On host/test: the same helpers write the simulated pin bank.

use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Stopped,
    Running,
}

pub struct PumpDriver {
    relay_pin: u8,
    state: PumpState,
}

impl PumpDriver {
    /// A stopped pump on `relay_pin`.  The relay is not touched until the
    /// first command; `hw_init` already drove every output low.
    pub fn new(relay_pin: u8) -> Self {
        Self {
            relay_pin,
            state: PumpState::Stopped,
        }
    }

    pub fn start(&mut self) {
        self.set_relay_hw(true);
        self.state = PumpState::Running;
    }

    pub fn stop(&mut self) {
        self.set_relay_hw(false);
        self.state = PumpState::Stopped;
    }

    fn set_relay_hw(&self, energised: bool) {
        hw_init::gpio_write(self.relay_pin, energised);
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::Running
    }
}
