//! HydroFirm Firmware — Main Entry Point
//!
//! Hexagonal architecture driven by a fixed-period executor.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HwBoard       HardwareAdapter   LogEventSink   LoopDelay      │
//! │  (PinPort)     (ActuatorPort)    (EventSink)    (DelayNs)      │
//! │  TelemetryDataProcess (DataProcessPort)                        │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │ ReadSensors → WateringProcess (state · controller)     │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Executor: read → process → data process → delay, forever      │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use log::{error, info};

use hydrofirm::adapters::board::HwBoard;
use hydrofirm::adapters::hardware::HardwareAdapter;
use hydrofirm::adapters::log_sink::LogEventSink;
use hydrofirm::adapters::telemetry::TelemetryDataProcess;
use hydrofirm::adapters::time::LoopDelay;
use hydrofirm::app::controller::Controller;
use hydrofirm::app::executor::Executor;
use hydrofirm::app::ports::{ActuatorPort, StatePort};
use hydrofirm::app::process::WateringProcess;
use hydrofirm::app::state::SystemState;
use hydrofirm::config::SystemConfig;
use hydrofirm::drivers::hw_init;
use hydrofirm::sensors::moisture_level::moisture_level_sensor;
use hydrofirm::sensors::water_level::water_level_sensor;
use hydrofirm::sensors::ReadSensors;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  HydroFirm v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (compiled in) ────────────────────────
    let config = SystemConfig::default();
    config.validate()?;

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(hydrofirm::Error::from)?;

    // ── 4. Sensor reader ──────────────────────────────────────
    let reader = ReadSensors::new(HwBoard::new(), LoopDelay::new()).with_sensors([
        moisture_level_sensor(config.sensor_settle_ms),
        water_level_sensor(config.sensor_settle_ms),
    ])?;

    // ── 5. State, controller, process ─────────────────────────
    let state = SystemState::new(config.thresholds);
    let mut actuators = HardwareAdapter::on_board();
    // Relays start where the state mirror says they are.
    actuators.set_pump(state.is_pump_on());
    actuators.set_valve_open(!state.is_valve_closed());

    let process = WateringProcess::builder()
        .controller(Controller::new(actuators))
        .state(state)
        .cool_down_ticks(config.cool_down_ticks)
        .build()?;

    // ── 6. Executor ───────────────────────────────────────────
    let mut executor = Executor::builder()
        .reader(reader)
        .process(process)
        .data_process(TelemetryDataProcess::new(config.telemetry_every_ticks))
        .delay(LoopDelay::new())
        .config(&config)
        .build()?;

    let mut sink = LogEventSink::new();
    executor.setup(&mut sink);

    info!("System ready. Entering watering loop.");
    loop {
        if let Err(e) = executor.tick(&mut sink) {
            error!("Tick {} failed: {}", executor.tick_count(), e);
        }
    }
}
