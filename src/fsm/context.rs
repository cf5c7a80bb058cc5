//! Read-only context handed to every phase handler.
//!
//! Bundles the state flags, the tick's single sensor snapshot and the
//! cool-down timing so handlers stay plain `fn` pointers.

use crate::app::state::SystemState;
use crate::error::Result;
use crate::sensors::SensorReadings;

use super::Phase;

pub struct DecisionContext<'a> {
    state: &'a SystemState,
    readings: &'a SensorReadings,
    /// Ticks elapsed since the current phase was entered.
    pub ticks_in_phase: u64,
    /// Cool-down length in ticks; `0` disables the release.
    pub cool_down_ticks: u32,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        state: &'a SystemState,
        readings: &'a SensorReadings,
        ticks_in_phase: u64,
        cool_down_ticks: u32,
    ) -> Self {
        Self {
            state,
            readings,
            ticks_in_phase,
            cool_down_ticks,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn water_level_max(&self) -> Result<bool> {
        self.state.is_water_level_max(self.readings)
    }

    pub fn water_level_min(&self) -> Result<bool> {
        self.state.is_water_level_min(self.readings)
    }

    pub fn moisture_level_min(&self) -> Result<bool> {
        self.state.is_moisture_level_min(self.readings)
    }

    /// `true` once the configured cool-down period has elapsed.
    pub fn cool_down_elapsed(&self) -> bool {
        self.cool_down_ticks != 0 && self.ticks_in_phase >= u64::from(self.cool_down_ticks)
    }
}
