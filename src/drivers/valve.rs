//! Drain valve driver (normally-closed solenoid on a relay channel).
//!
//! Energising the relay opens the valve; with the relay released the
//! spring closes it again.

use log::debug;

use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveState {
    Closed,
    Open,
}

pub struct ValveDriver {
    relay_pin: u8,
    state: ValveState,
}

impl ValveDriver {
    pub fn new(relay_pin: u8) -> Self {
        Self {
            relay_pin,
            state: ValveState::Closed,
        }
    }

    pub fn open(&mut self) {
        debug!("Valve: energising solenoid on GPIO{}", self.relay_pin);
        hw_init::gpio_write(self.relay_pin, true);
        self.state = ValveState::Open;
    }

    pub fn close(&mut self) {
        debug!("Valve: releasing solenoid on GPIO{}", self.relay_pin);
        hw_init::gpio_write(self.relay_pin, false);
        self.state = ValveState::Closed;
    }

    pub fn state(&self) -> ValveState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ValveState::Open
    }
}
