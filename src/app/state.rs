//! [`SystemState`] — phase flags, actuator mirrors and threshold predicates.
//!
//! The predicates take the tick's [`SensorReadings`] snapshot instead of
//! querying the reader themselves, so every predicate evaluated during one
//! tick sees the same values.

use log::{debug, info};

use crate::config::Thresholds;
use crate::error::Result;
use crate::fsm::{Phase, StatusFlags};
use crate::sensors::{SensorId, SensorReadings};

use super::ports::StatePort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    cool_down_state: bool,
    active_state: bool,
    watering_cycle_state: bool,
    pump_on: bool,
    valve_closed: bool,
    thresholds: Thresholds,
}

impl SystemState {
    /// Cold-boot state: no phase flag set (forced phase), pump off,
    /// valve open.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            cool_down_state: false,
            active_state: false,
            watering_cycle_state: false,
            pump_on: false,
            valve_closed: false,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// The phase the flags currently encode.  Cool-down wins if both flags
    /// are somehow set.
    pub fn phase(&self) -> Phase {
        if self.cool_down_state {
            Phase::CoolDown
        } else if self.active_state {
            Phase::Active
        } else {
            Phase::Forced
        }
    }

    pub fn status(&self) -> StatusFlags {
        StatusFlags {
            pump_on: self.pump_on,
            valve_closed: self.valve_closed,
            watering_cycle: self.watering_cycle_state,
        }
    }

    // ── Threshold predicates ──────────────────────────────────

    /// Water level at or above the maximum allowed.
    pub fn is_water_level_max(&self, readings: &SensorReadings) -> Result<bool> {
        let level = readings.get(SensorId::WaterLevel)?;
        let at_max = level >= self.thresholds.water_level_max;
        debug!("State: water level {} at max? {}", level, at_max);
        Ok(at_max)
    }

    /// Water level at or below the minimum allowed.
    pub fn is_water_level_min(&self, readings: &SensorReadings) -> Result<bool> {
        let level = readings.get(SensorId::WaterLevel)?;
        let at_min = level <= self.thresholds.water_level_min;
        debug!("State: water level {} at min? {}", level, at_min);
        Ok(at_min)
    }

    /// Moisture at or below the minimum allowed.
    pub fn is_moisture_level_min(&self, readings: &SensorReadings) -> Result<bool> {
        let moisture = readings.get(SensorId::MoistureLevel)?;
        let at_min = moisture <= self.thresholds.moisture_level_min;
        debug!("State: moisture level {} at min? {}", moisture, at_min);
        Ok(at_min)
    }
}

impl StatePort for SystemState {
    fn is_cool_down_state(&self) -> bool {
        self.cool_down_state
    }

    fn is_active_state(&self) -> bool {
        self.active_state
    }

    fn is_watering_cycle_state(&self) -> bool {
        self.watering_cycle_state
    }

    fn set_cool_down_state(&mut self) {
        if !self.cool_down_state || self.active_state {
            info!("State: entering cool down");
            self.cool_down_state = true;
            self.active_state = false;
        }
    }

    fn reset_cool_down_state(&mut self) {
        if self.cool_down_state || !self.active_state {
            info!("State: leaving cool down, system active");
            self.cool_down_state = false;
            self.active_state = true;
        }
    }

    fn set_active_state(&mut self) {
        if !self.active_state || self.cool_down_state {
            info!("State: entering active");
            self.active_state = true;
            self.cool_down_state = false;
        }
    }

    fn reset_active_state(&mut self) {
        if self.active_state || !self.cool_down_state {
            info!("State: leaving active, system cooling down");
            self.active_state = false;
            self.cool_down_state = true;
        }
    }

    fn set_watering_cycle_state(&mut self) {
        if !self.watering_cycle_state {
            info!("State: watering cycle started");
            self.watering_cycle_state = true;
        }
    }

    fn reset_watering_cycle_state(&mut self) {
        if self.watering_cycle_state {
            info!("State: watering cycle ended");
            self.watering_cycle_state = false;
        }
    }

    fn set_pump_on(&mut self, on: bool) {
        self.pump_on = on;
    }

    fn is_pump_on(&self) -> bool {
        self.pump_on
    }

    fn set_valve_closed(&mut self, closed: bool) {
        self.valve_closed = closed;
    }

    fn is_valve_closed(&self) -> bool {
        self.valve_closed
    }
}
