//! Full-stack ticks: real reader, process and controller over mock pins
//! and mock relays.

use hydrofirm::adapters::telemetry::TelemetryDataProcess;
use hydrofirm::app::controller::Controller;
use hydrofirm::app::events::AppEvent;
use hydrofirm::app::executor::Executor;
use hydrofirm::app::ports::{ProcessPort, SensorPort, StatePort};
use hydrofirm::app::process::WateringProcess;
use hydrofirm::app::state::SystemState;
use hydrofirm::config::SystemConfig;
use hydrofirm::fsm::{Action, Phase};
use hydrofirm::pins;
use hydrofirm::sensors::moisture_level::moisture_level_sensor;
use hydrofirm::sensors::water_level::water_level_sensor;
use hydrofirm::sensors::{ReadSensors, SensorId};

use crate::mock_hw::{ActuatorCall, MockActuators, MockPins, NoDelay, RecordingSink};

type Rig = Executor<
    ReadSensors<MockPins, NoDelay>,
    WateringProcess<Controller<MockActuators>>,
    TelemetryDataProcess,
    NoDelay,
>;

fn rig(config: &SystemConfig, water: u16, moisture: u16) -> Rig {
    let pins = MockPins::default()
        .with_adc(pins::WATER_LEVEL_ADC_GPIO, water)
        .with_adc(pins::MOISTURE_ADC_GPIO, moisture);
    let reader = ReadSensors::new(pins, NoDelay::default())
        .with_sensors([
            moisture_level_sensor(config.sensor_settle_ms),
            water_level_sensor(config.sensor_settle_ms),
        ])
        .unwrap();

    let process = WateringProcess::builder()
        .controller(Controller::new(MockActuators::default()))
        .state(SystemState::new(config.thresholds))
        .cool_down_ticks(config.cool_down_ticks)
        .build()
        .unwrap();

    Executor::builder()
        .reader(reader)
        .process(process)
        .data_process(TelemetryDataProcess::new(config.telemetry_every_ticks))
        .delay(NoDelay::default())
        .config(config)
        .build()
        .unwrap()
}

fn set_levels(ex: &mut Rig, water: u16, moisture: u16) {
    let pins = ex.reader_mut().pins_mut();
    pins.adc.insert(pins::WATER_LEVEL_ADC_GPIO, water);
    pins.adc.insert(pins::MOISTURE_ADC_GPIO, moisture);
}

fn relay_writes(ex: &Rig) -> &[ActuatorCall] {
    &ex.process().controller().actuators().calls
}

#[test]
fn setup_leaves_probes_unpowered_and_state_untouched() {
    let config = SystemConfig::default();
    let mut ex = rig(&config, 0, 0);
    let mut sink = RecordingSink::default();

    ex.setup(&mut sink);

    let writes = &ex.reader().pins().writes;
    assert!(writes.contains(&(pins::MOISTURE_POWER_GPIO, false)));
    assert!(writes.contains(&(pins::WATER_LEVEL_POWER_GPIO, false)));
    assert!(writes.iter().all(|&(_, high)| !high));
    assert_eq!(ex.process().phase(), Phase::Forced);
    assert!(relay_writes(&ex).is_empty());
    assert_eq!(sink.events, vec![AppEvent::Started(Phase::Forced)]);
}

#[test]
fn repeated_fill_ticks_write_each_relay_once() {
    let config = SystemConfig::default();
    let mut ex = rig(&config, 0, 0);
    let mut sink = RecordingSink::default();

    assert_eq!(ex.run_for(5, &mut sink), 0);

    assert_eq!(
        relay_writes(&ex),
        &[ActuatorCall::SetValveOpen(false), ActuatorCall::SetPump(true)]
    );
    assert!(ex.process().state().is_pump_on());
}

#[test]
fn boot_fill_drain_rest_and_refill() {
    let config = SystemConfig {
        cool_down_ticks: 3,
        telemetry_every_ticks: 1,
        ..SystemConfig::default()
    };
    let mut ex = rig(&config, 0, 0);
    let mut sink = RecordingSink::default();
    ex.setup(&mut sink);

    // Forced fill from cold boot.
    assert_eq!(ex.tick(&mut sink).unwrap().action, Action::Fill);

    // Container full: drain.
    set_levels(&mut ex, 10, 0);
    let report = ex.tick(&mut sink).unwrap();
    assert_eq!(report.action, Action::Drain);
    assert_eq!(report.phase_after, Phase::CoolDown);
    assert!(!ex.process().state().is_pump_on());
    assert!(!ex.process().state().is_valve_closed());

    // Drained; rest for the configured period, then release.
    set_levels(&mut ex, 0, 0);
    let actions: Vec<Action> = (0..4).map(|_| ex.tick(&mut sink).unwrap().action).collect();
    assert_eq!(
        actions,
        vec![Action::CloseValve, Action::CloseValve, Action::CloseValve, Action::EndCoolDown]
    );
    assert_eq!(ex.process().phase(), Phase::Active);

    // Soil still dry: the next fill starts.
    assert_eq!(ex.tick(&mut sink).unwrap().action, Action::Fill);

    assert!(sink.events.contains(&AppEvent::PhaseChanged {
        from: Phase::Forced,
        to: Phase::CoolDown
    }));
    assert!(sink.events.contains(&AppEvent::PhaseChanged {
        from: Phase::CoolDown,
        to: Phase::Active
    }));
    assert_eq!(sink.telemetry_count(), 7);
    assert_eq!(
        relay_writes(&ex),
        &[
            ActuatorCall::SetValveOpen(false),
            ActuatorCall::SetPump(true),
            ActuatorCall::SetPump(false),
            ActuatorCall::SetValveOpen(true),
            ActuatorCall::SetValveOpen(false),
            ActuatorCall::SetPump(true),
        ]
    );
}

#[test]
fn tick_reads_every_sensor_before_deciding() {
    let config = SystemConfig::default();
    let mut ex = rig(&config, 4, 55);
    ex.tick(&mut RecordingSink::default()).unwrap();

    assert_eq!(ex.reader().get_sensor_reading(SensorId::WaterLevel), Ok(4));
    assert_eq!(ex.reader().get_sensor_reading(SensorId::MoistureLevel), Ok(55));
}

#[test]
fn missing_probe_fails_the_tick_without_relay_writes() {
    let config = SystemConfig::default();
    let reader = ReadSensors::new(MockPins::default(), NoDelay::default())
        .with_sensors([water_level_sensor(config.sensor_settle_ms)])
        .unwrap();
    let mut state = SystemState::new(config.thresholds);
    state.set_active_state();
    let process = WateringProcess::builder()
        .controller(Controller::new(MockActuators::default()))
        .state(state)
        .build()
        .unwrap();
    let mut ex = Executor::builder()
        .reader(reader)
        .process(process)
        .data_process(TelemetryDataProcess::new(1))
        .delay(NoDelay::default())
        .build()
        .unwrap();
    let mut sink = RecordingSink::default();

    assert_eq!(ex.run_for(3, &mut sink), 3);
    assert!(ex.process().controller().actuators().calls.is_empty());
    assert_eq!(sink.telemetry_count(), 0);
    assert_eq!(ex.delay().total_ns, 3 * 1_000_000_000);
}

#[test]
fn telemetry_keeps_executor_cadence_across_failed_tick() {
    let config = SystemConfig {
        telemetry_every_ticks: 2,
        ..SystemConfig::default()
    };
    let pins = MockPins::default()
        .with_adc(pins::WATER_LEVEL_ADC_GPIO, 0)
        .with_adc(pins::MOISTURE_ADC_GPIO, 500);
    let reader = ReadSensors::new(pins, NoDelay::default())
        .with_sensors([water_level_sensor(config.sensor_settle_ms)])
        .unwrap();
    // Active with an empty tank consults the moisture probe.
    let mut state = SystemState::new(config.thresholds);
    state.set_active_state();
    let process = WateringProcess::builder()
        .controller(Controller::new(MockActuators::default()))
        .state(state)
        .build()
        .unwrap();
    let mut ex = Executor::builder()
        .reader(reader)
        .process(process)
        .data_process(TelemetryDataProcess::new(config.telemetry_every_ticks))
        .delay(NoDelay::default())
        .config(&config)
        .build()
        .unwrap();
    let mut sink = RecordingSink::default();

    assert!(ex.tick(&mut sink).is_err(), "moisture probe not registered yet");
    ex.reader_mut()
        .register(moisture_level_sensor(config.sensor_settle_ms))
        .unwrap();
    for _ in 0..3 {
        assert_eq!(ex.tick(&mut sink).unwrap().action, Action::CloseValve);
    }

    assert_eq!(ex.tick_count(), 4);
    assert_eq!(sink.telemetry_ticks(), vec![2, 4]);
    assert_eq!(ex.data().emitted(), 2);
}
