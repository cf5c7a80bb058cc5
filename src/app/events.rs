//! Outbound application events.
//!
//! The [`Executor`](super::executor::Executor) and the telemetry data
//! process emit these through the [`EventSink`](super::ports::EventSink)
//! port.  Adapters on the other side decide what to do with them — log to
//! serial today, anything else that implements the trait tomorrow.

use serde::Serialize;

use crate::error::Error;
use crate::fsm::{Phase, TickReport};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The executor finished setup (carries the boot phase).
    Started(Phase),

    /// The phase derived from the state flags moved.
    PhaseChanged { from: Phase, to: Phase },

    /// What the process did this tick.
    Action(TickReport),

    /// A tick aborted before any actuator command was issued.
    TickFailed(Error),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TelemetryData {
    pub tick: u64,
    pub phase: Phase,
    pub water_level: Option<i16>,
    pub moisture_level: Option<i16>,
    pub pump_on: bool,
    pub valve_closed: bool,
    pub watering_cycle: bool,
}
