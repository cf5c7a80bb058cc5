//! [`Controller`] — idempotent pump and valve commands.
//!
//! Checks the actuator mirror in [`StatePort`] before every hardware write
//! so that a command repeated tick after tick never toggles a relay that is
//! already in position.

use log::{debug, info};

use super::ports::{ActuatorPort, ControllerPort, StatePort};

pub struct Controller<A> {
    actuators: A,
}

impl<A: ActuatorPort> Controller<A> {
    pub fn new(actuators: A) -> Self {
        Self { actuators }
    }

    /// Borrow the underlying actuator adapter.
    pub fn actuators(&self) -> &A {
        &self.actuators
    }
}

impl<A: ActuatorPort> ControllerPort for Controller<A> {
    fn turn_on_pump(&mut self, state: &mut dyn StatePort) {
        if state.is_pump_on() {
            debug!("Controller: pump already on");
            return;
        }
        info!("Controller: turning on the pump");
        self.actuators.set_pump(true);
        state.set_pump_on(true);
    }

    fn turn_off_pump(&mut self, state: &mut dyn StatePort) {
        if !state.is_pump_on() {
            debug!("Controller: pump already off");
            return;
        }
        info!("Controller: turning off the pump");
        self.actuators.set_pump(false);
        state.set_pump_on(false);
    }

    fn open_valve(&mut self, state: &mut dyn StatePort) {
        if !state.is_valve_closed() {
            debug!("Controller: valve already open");
            return;
        }
        info!("Controller: opening valve");
        self.actuators.set_valve_open(true);
        state.set_valve_closed(false);
    }

    fn close_valve(&mut self, state: &mut dyn StatePort) {
        if state.is_valve_closed() {
            debug!("Controller: valve already closed");
            return;
        }
        info!("Controller: closing valve");
        self.actuators.set_valve_open(false);
        state.set_valve_closed(true);
    }
}
