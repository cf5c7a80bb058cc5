//! Telemetry data process.
//!
//! Plugs into the executor's Data Process seam and emits an
//! [`AppEvent::Telemetry`] snapshot on every executor tick that is a
//! multiple of `every_ticks`.  A failed tick on that boundary yields no
//! snapshot but does not shift the ones after it.

use log::debug;

use crate::app::events::{AppEvent, TelemetryData};
use crate::app::ports::{DataProcessPort, EventSink};
use crate::error::Result;
use crate::fsm::TickReport;
use crate::sensors::{SensorId, SensorReadings};

pub struct TelemetryDataProcess {
    every_ticks: u32,
    emitted: u64,
}

impl TelemetryDataProcess {
    /// `every_ticks` of `0` is treated as `1`.
    pub fn new(every_ticks: u32) -> Self {
        Self {
            every_ticks: every_ticks.max(1),
            emitted: 0,
        }
    }

    /// Snapshots emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl DataProcessPort for TelemetryDataProcess {
    fn run(
        &mut self,
        tick: u64,
        readings: &SensorReadings,
        outcome: Result<&TickReport>,
        sink: &mut dyn EventSink,
    ) {
        if tick % u64::from(self.every_ticks) != 0 {
            return;
        }
        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                debug!("Telemetry: no snapshot at tick {} ({})", tick, e);
                return;
            }
        };

        debug!("Telemetry: snapshot at tick {}", tick);
        self.emitted += 1;
        sink.emit(&AppEvent::Telemetry(TelemetryData {
            tick,
            phase: report.phase_after,
            water_level: readings.get(SensorId::WaterLevel).ok(),
            moisture_level: readings.get(SensorId::MoistureLevel).ok(),
            pump_on: report.status.pump_on,
            valve_closed: report.status.valve_closed,
            watering_cycle: report.status.watering_cycle,
        }));
    }
}
