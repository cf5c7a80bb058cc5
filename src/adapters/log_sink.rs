//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! Telemetry records are rendered as JSON so a host on the other end of
//! the serial line can parse them.

use log::{debug, error, info, warn};

use crate::app::events::{AppEvent, TelemetryData};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// One telemetry record as a single-line JSON object.
pub fn telemetry_json(t: &TelemetryData) -> Option<String> {
    serde_json::to_string(t).ok()
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(phase) => {
                info!("START | initial_phase={:?}", phase);
            }
            AppEvent::PhaseChanged { from, to } => {
                info!("PHASE | {:?} -> {:?}", from, to);
            }
            AppEvent::Action(report) => {
                debug!(
                    "ACTION | {:?} in {:?} | pump={} valve={}",
                    report.action,
                    report.phase_before,
                    if report.status.pump_on { "ON" } else { "OFF" },
                    if report.status.valve_closed { "CLOSED" } else { "OPEN" },
                );
            }
            AppEvent::TickFailed(e) => {
                error!("TICK | failed: {}", e);
            }
            AppEvent::Telemetry(t) => match telemetry_json(t) {
                Some(json) => info!("TELEM | {}", json),
                None => warn!("TELEM | tick {} could not be serialised", t.tick),
            },
        }
    }
}
