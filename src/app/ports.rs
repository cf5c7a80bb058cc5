//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ WateringProcess / Executor (domain)
//! ```
//!
//! Driven adapters (pins, sensors, actuators, event sinks) implement these
//! traits.  The domain consumes them via generics, so the decision core
//! never touches hardware directly and every collaborator has a test double.

use crate::error::Result;
use crate::fsm::{Phase, TickReport};
use crate::sensors::{SensorId, SensorReadings};

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Pin port (driven adapter: domain ↔ GPIO / ADC)
// ───────────────────────────────────────────────────────────────

/// Raw pin primitives provided by the platform.
pub trait PinPort {
    /// Drive a digital output.
    fn digital_write(&mut self, pin: u8, high: bool);

    /// Sample a digital input.
    fn digital_read(&mut self, pin: u8) -> bool;

    /// Sample an analog input (raw ADC counts).
    fn analog_read(&mut self, pin: u8) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (Sensor Reader: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: polls every registered sensor and serves the latest
/// value per sensor.
pub trait SensorPort {
    /// One-time preparation of the probes (power pins low).
    fn setup(&mut self);

    /// Sample every registered sensor, replacing the stored snapshot.
    fn read_all_sensors(&mut self);

    /// Sample one sensor and update only its entry.
    fn read_sensor(&mut self, id: SensorId) -> Result<i16>;

    /// Last recorded value for `id`.  Never-read or unregistered sensors
    /// yield [`SensorError::NotFound`](crate::error::SensorError::NotFound).
    fn get_sensor_reading(&self, id: SensorId) -> Result<i16>;

    /// The whole latest snapshot.
    fn get_all_sensor_readings(&self) -> &SensorReadings;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → relays)
// ───────────────────────────────────────────────────────────────

/// Write-side port: unconditional hardware writes.  Idempotence lives in
/// the [`ControllerPort`] implementation, not here.
pub trait ActuatorPort {
    /// Energise (`true`) or stop (`false`) the fill pump.
    fn set_pump(&mut self, on: bool);

    /// Open (`true`) or close (`false`) the drain valve.
    fn set_valve_open(&mut self, open: bool);
}

// ───────────────────────────────────────────────────────────────
// System state port
// ───────────────────────────────────────────────────────────────

/// Phase flags and actuator mirrors of the watering rig.
///
/// Every transition is idempotent.  Cool-down and active are always
/// flipped as a pair so that exactly one of them is set once the system
/// has left its boot phase.
pub trait StatePort {
    fn is_cool_down_state(&self) -> bool;
    fn is_active_state(&self) -> bool;
    fn is_watering_cycle_state(&self) -> bool;

    /// Enter cool-down (clears active).
    fn set_cool_down_state(&mut self);
    /// Leave cool-down (sets active).
    fn reset_cool_down_state(&mut self);
    /// Enter active (clears cool-down).
    fn set_active_state(&mut self);
    /// Leave active (sets cool-down).
    fn reset_active_state(&mut self);
    fn set_watering_cycle_state(&mut self);
    fn reset_watering_cycle_state(&mut self);

    fn set_pump_on(&mut self, on: bool);
    fn is_pump_on(&self) -> bool;
    fn set_valve_closed(&mut self, closed: bool);
    fn is_valve_closed(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Controller port (domain → idempotent actuator commands)
// ───────────────────────────────────────────────────────────────

/// Idempotent actuator commands.  Each method consults the state mirror
/// first and only writes to hardware (and updates the mirror) when the
/// actuator is not already in the requested position.
pub trait ControllerPort {
    fn turn_on_pump(&mut self, state: &mut dyn StatePort);
    fn turn_off_pump(&mut self, state: &mut dyn StatePort);
    fn open_valve(&mut self, state: &mut dyn StatePort);
    fn close_valve(&mut self, state: &mut dyn StatePort);
}

// ───────────────────────────────────────────────────────────────
// Process ports (driven by the executor once per tick)
// ───────────────────────────────────────────────────────────────

/// The watering state machine.
pub trait ProcessPort {
    /// Evaluate one tick against a single sensor snapshot.
    fn run(&mut self, readings: &SensorReadings) -> Result<TickReport>;

    /// The phase the state flags currently encode.
    fn phase(&self) -> Phase;
}

/// External per-tick collaborator run after the watering process
/// (telemetry and the like).  Called on every tick, failed ones included;
/// `tick` is the executor's tick number.
pub trait DataProcessPort {
    fn run(
        &mut self,
        tick: u64,
        readings: &SensorReadings,
        outcome: Result<&TickReport>,
        sink: &mut dyn EventSink,
    );
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Test doubles shared by unit tests
// ───────────────────────────────────────────────────────────────
