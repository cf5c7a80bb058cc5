//! [`WateringProcess`] — the per-tick watering state machine.
//!
//! ```text
//!  SensorReadings ──▶ ┌──────────────────────┐ ──▶ TickReport
//!                     │   WateringProcess    │
//!  ControllerPort ◀───│ PhaseTable · State   │
//!                     └──────────────────────┘
//! ```
//!
//! Owns the [`SystemState`] and the controller.  Each tick it derives the
//! phase from the state flags, lets the phase table pick an [`Action`],
//! then applies that action through the controller and the state.

use log::debug;

use crate::error::{ConfigError, Result};
use crate::fsm::context::DecisionContext;
use crate::fsm::{Action, Phase, PhaseTable, TickReport};
use crate::sensors::SensorReadings;

use super::ports::{ControllerPort, ProcessPort, StatePort};
use super::state::SystemState;

pub struct WateringProcess<C> {
    controller: C,
    state: SystemState,
    table: PhaseTable,
    cool_down_ticks: u32,
    ticks_in_phase: u64,
}

impl<C: ControllerPort> WateringProcess<C> {
    pub fn builder() -> WateringProcessBuilder<C> {
        WateringProcessBuilder::default()
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Ticks spent in the current phase so far.
    pub fn ticks_in_phase(&self) -> u64 {
        self.ticks_in_phase
    }

    fn apply(&mut self, action: Action) {
        let state = &mut self.state;
        match action {
            Action::CloseValve => self.controller.close_valve(state),
            Action::Drain => {
                debug!("Process: draining water");
                self.controller.turn_off_pump(state);
                self.controller.open_valve(state);
                state.reset_watering_cycle_state();
                state.set_cool_down_state();
            }
            Action::Fill => {
                debug!("Process: filling water");
                self.controller.close_valve(state);
                self.controller.turn_on_pump(state);
                state.set_watering_cycle_state();
            }
            Action::EndCoolDown => {
                self.controller.close_valve(state);
                state.reset_cool_down_state();
            }
        }
    }
}

impl<C: ControllerPort> ProcessPort for WateringProcess<C> {
    fn run(&mut self, readings: &SensorReadings) -> Result<TickReport> {
        let phase_before = self.state.phase();
        debug!("Process: running in {}", self.table.name(phase_before));

        let ctx = DecisionContext::new(
            &self.state,
            readings,
            self.ticks_in_phase,
            self.cool_down_ticks,
        );
        let action = self.table.decide(&ctx)?;
        self.apply(action);

        let phase_after = self.state.phase();
        if phase_after == phase_before {
            self.ticks_in_phase = self.ticks_in_phase.saturating_add(1);
        } else {
            self.ticks_in_phase = 0;
        }

        Ok(TickReport {
            phase_before,
            action,
            phase_after,
            status: self.state.status(),
        })
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }
}

// ───────────────────────────────────────────────────────────────
// Builder
// ───────────────────────────────────────────────────────────────

/// Assembles a [`WateringProcess`].  `build()` fails fast when the
/// controller or the state was never supplied.
pub struct WateringProcessBuilder<C> {
    controller: Option<C>,
    state: Option<SystemState>,
    cool_down_ticks: u32,
}

impl<C> Default for WateringProcessBuilder<C> {
    fn default() -> Self {
        Self {
            controller: None,
            state: None,
            cool_down_ticks: 0,
        }
    }
}

impl<C: ControllerPort> WateringProcessBuilder<C> {
    pub fn controller(mut self, controller: C) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn state(mut self, state: SystemState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn cool_down_ticks(mut self, ticks: u32) -> Self {
        self.cool_down_ticks = ticks;
        self
    }

    pub fn build(self) -> Result<WateringProcess<C>> {
        let controller = self
            .controller
            .ok_or(ConfigError::MissingCollaborator("controller"))?;
        let state = self.state.ok_or(ConfigError::MissingCollaborator("state"))?;
        Ok(WateringProcess {
            controller,
            state,
            table: PhaseTable::default(),
            cool_down_ticks: self.cool_down_ticks,
            ticks_in_phase: 0,
        })
    }
}
