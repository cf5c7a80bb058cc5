//! Mock hardware for integration tests.
//!
//! Records every pin access, actuator write, controller command and event
//! so tests can assert on the full command history without touching real
//! GPIO/ADC registers.

use std::collections::HashMap;

use embedded_hal::delay::DelayNs;
use hydrofirm::app::events::AppEvent;
use hydrofirm::app::ports::{ActuatorPort, ControllerPort, EventSink, PinPort, StatePort};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetPump(bool),
    SetValveOpen(bool),
}

// ── MockActuators ─────────────────────────────────────────────

#[derive(Default)]
pub struct MockActuators {
    pub calls: Vec<ActuatorCall>,
}

impl ActuatorPort for MockActuators {
    fn set_pump(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetPump(on));
    }

    fn set_valve_open(&mut self, open: bool) {
        self.calls.push(ActuatorCall::SetValveOpen(open));
    }
}

// ── MockController ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCall {
    TurnOnPump,
    TurnOffPump,
    OpenValve,
    CloseValve,
}

/// Records every command, including ones a real controller would skip,
/// and keeps the state mirror up to date.
#[derive(Default)]
pub struct MockController {
    pub calls: Vec<ControllerCall>,
}

#[allow(dead_code)]
impl MockController {
    pub fn count(&self, call: ControllerCall) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }
}

impl ControllerPort for MockController {
    fn turn_on_pump(&mut self, state: &mut dyn StatePort) {
        self.calls.push(ControllerCall::TurnOnPump);
        state.set_pump_on(true);
    }

    fn turn_off_pump(&mut self, state: &mut dyn StatePort) {
        self.calls.push(ControllerCall::TurnOffPump);
        state.set_pump_on(false);
    }

    fn open_valve(&mut self, state: &mut dyn StatePort) {
        self.calls.push(ControllerCall::OpenValve);
        state.set_valve_closed(false);
    }

    fn close_valve(&mut self, state: &mut dyn StatePort) {
        self.calls.push(ControllerCall::CloseValve);
        state.set_valve_closed(true);
    }
}

// ── MockPins ──────────────────────────────────────────────────

/// Pin bank with scripted ADC values; remembers the last level driven
/// on every output.
#[derive(Default)]
pub struct MockPins {
    pub adc: HashMap<u8, u16>,
    pub levels: HashMap<u8, bool>,
    pub writes: Vec<(u8, bool)>,
}

#[allow(dead_code)]
impl MockPins {
    pub fn with_adc(mut self, pin: u8, raw: u16) -> Self {
        self.adc.insert(pin, raw);
        self
    }
}

impl PinPort for MockPins {
    fn digital_write(&mut self, pin: u8, high: bool) {
        self.writes.push((pin, high));
        self.levels.insert(pin, high);
    }

    fn digital_read(&mut self, pin: u8) -> bool {
        self.levels.get(&pin).copied().unwrap_or(false)
    }

    fn analog_read(&mut self, pin: u8) -> u16 {
        self.adc.get(&pin).copied().unwrap_or(0)
    }
}

// ── NoDelay ───────────────────────────────────────────────────

/// Delay that returns immediately, counting the requested time.
#[derive(Default)]
pub struct NoDelay {
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn telemetry_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Telemetry(_)))
            .count()
    }

    /// Tick labels of every telemetry snapshot, in order.
    pub fn telemetry_ticks(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Telemetry(data) => Some(data.tick),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
