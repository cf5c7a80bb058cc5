//! Hardware adapter — bridges the relay drivers to [`ActuatorPort`].
//!
//! Owns the pump and valve drivers.  Writes are unconditional; the
//! controller in front of this adapter decides whether a write is needed.
//! On non-espidf targets the underlying drivers hit the simulated pin bank.

use log::debug;

use crate::app::ports::ActuatorPort;
use crate::drivers::pump::PumpDriver;
use crate::drivers::valve::ValveDriver;
use crate::pins;

/// Concrete adapter that combines all actuators behind [`ActuatorPort`].
pub struct HardwareAdapter {
    pump: PumpDriver,
    valve: ValveDriver,
}

impl HardwareAdapter {
    pub fn new(pump: PumpDriver, valve: ValveDriver) -> Self {
        Self { pump, valve }
    }

    /// Adapter wired to the board's relay channels.
    pub fn on_board() -> Self {
        Self::new(
            PumpDriver::new(pins::PUMP_RELAY_GPIO),
            ValveDriver::new(pins::VALVE_RELAY_GPIO),
        )
    }

    pub fn pump(&self) -> &PumpDriver {
        &self.pump
    }

    pub fn valve(&self) -> &ValveDriver {
        &self.valve
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_pump(&mut self, on: bool) {
        debug!("Hardware: pump relay -> {}", on);
        if on {
            self.pump.start();
        } else {
            self.pump.stop();
        }
    }

    fn set_valve_open(&mut self, open: bool) {
        debug!("Hardware: valve open -> {}", open);
        if open {
            self.valve.open();
        } else {
            self.valve.close();
        }
    }
}
