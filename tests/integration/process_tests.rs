//! Watering process scenarios against a recording controller.

use hydrofirm::app::ports::{ProcessPort, StatePort};
use hydrofirm::app::process::WateringProcess;
use hydrofirm::app::state::SystemState;
use hydrofirm::config::{
    MOISTURE_LEVEL_MIN_ALLOWED, Thresholds, WATER_LEVEL_MAX_ALLOWED, WATER_LEVEL_MIN_ALLOWED,
};
use hydrofirm::fsm::{Action, Phase};
use hydrofirm::sensors::{SensorId, SensorReadings};

use crate::mock_hw::{ControllerCall, MockController};

fn process_in(phase: Phase) -> WateringProcess<MockController> {
    let mut state = SystemState::new(Thresholds::default());
    match phase {
        Phase::CoolDown => state.set_cool_down_state(),
        Phase::Active => state.set_active_state(),
        Phase::Forced => {}
    }
    WateringProcess::builder()
        .controller(MockController::default())
        .state(state)
        .build()
        .unwrap()
}

fn readings(water: i16, moisture: i16) -> SensorReadings {
    SensorReadings::from_pairs(&[(SensorId::WaterLevel, water), (SensorId::MoistureLevel, moisture)])
        .unwrap()
}

#[test]
fn cool_down_at_min_only_closes_valve() {
    let mut p = process_in(Phase::CoolDown);
    p.run(&readings(WATER_LEVEL_MIN_ALLOWED, MOISTURE_LEVEL_MIN_ALLOWED))
        .unwrap();

    assert_eq!(p.controller().calls, vec![ControllerCall::CloseValve]);
    assert!(p.state().is_cool_down_state());
}

#[test]
fn cool_down_above_min_keeps_draining() {
    let mut p = process_in(Phase::CoolDown);
    let report = p
        .run(&readings(WATER_LEVEL_MIN_ALLOWED + 1, MOISTURE_LEVEL_MIN_ALLOWED))
        .unwrap();

    assert_eq!(report.action, Action::Drain);
    assert_eq!(
        p.controller().calls,
        vec![ControllerCall::TurnOffPump, ControllerCall::OpenValve]
    );
    assert!(!p.state().is_watering_cycle_state());
    assert!(p.state().is_cool_down_state());
    assert_eq!(report.phase_after, Phase::CoolDown);
}

#[test]
fn active_at_max_drains_into_cool_down() {
    let mut p = process_in(Phase::Active);
    let report = p
        .run(&readings(WATER_LEVEL_MAX_ALLOWED, MOISTURE_LEVEL_MIN_ALLOWED))
        .unwrap();

    assert_eq!(
        p.controller().calls,
        vec![ControllerCall::TurnOffPump, ControllerCall::OpenValve]
    );
    assert!(!p.state().is_active_state());
    assert!(p.state().is_cool_down_state());
    assert!(!p.state().is_watering_cycle_state());
    assert!(report.phase_changed());
}

#[test]
fn active_empty_and_dry_fills() {
    let mut p = process_in(Phase::Active);
    p.run(&readings(WATER_LEVEL_MIN_ALLOWED, MOISTURE_LEVEL_MIN_ALLOWED))
        .unwrap();

    assert_eq!(
        p.controller().calls,
        vec![ControllerCall::CloseValve, ControllerCall::TurnOnPump]
    );
    assert!(p.state().is_watering_cycle_state());
    assert!(p.state().is_active_state());
}

#[test]
fn forced_below_max_fills() {
    let mut p = process_in(Phase::Forced);
    let report = p
        .run(&readings(WATER_LEVEL_MAX_ALLOWED - 1, MOISTURE_LEVEL_MIN_ALLOWED + 100))
        .unwrap();

    assert_eq!(report.action, Action::Fill);
    assert_eq!(
        p.controller().calls,
        vec![ControllerCall::CloseValve, ControllerCall::TurnOnPump]
    );
    assert!(p.state().is_watering_cycle_state());
    assert_eq!(p.phase(), Phase::Forced);
}

#[test]
fn active_between_thresholds_holds_water() {
    let mut p = process_in(Phase::Active);
    p.run(&readings(WATER_LEVEL_MIN_ALLOWED + 1, MOISTURE_LEVEL_MIN_ALLOWED))
        .unwrap();

    assert_eq!(p.controller().calls, vec![ControllerCall::CloseValve]);
    assert_eq!(p.controller().count(ControllerCall::TurnOnPump), 0);
}

#[test]
fn missing_reading_aborts_before_any_command() {
    let mut p = process_in(Phase::Active);
    let only_water = SensorReadings::from_pairs(&[(SensorId::WaterLevel, WATER_LEVEL_MIN_ALLOWED)]).unwrap();

    assert!(p.run(&only_water).is_err());
    assert!(p.controller().calls.is_empty());
}

#[test]
fn custom_thresholds_are_honoured() {
    let thresholds = Thresholds {
        water_level_max: 800,
        water_level_min: 100,
        moisture_level_min: 300,
    };
    let mut p = WateringProcess::builder()
        .controller(MockController::default())
        .state(SystemState::new(thresholds))
        .build()
        .unwrap();

    // 500 would be "full" with the default thresholds.
    let report = p.run(&readings(500, 0)).unwrap();
    assert_eq!(report.action, Action::Fill);
}
