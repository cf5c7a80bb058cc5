//! System configuration parameters
//!
//! All tunable parameters for the watering rig.  Values are compiled in;
//! there is no persistent store to override them.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

// ---------------------------------------------------------------------------
// Compile-time defaults
// ---------------------------------------------------------------------------

/// Water level at or above which the container is considered full.
pub const WATER_LEVEL_MAX_ALLOWED: i16 = 10;
/// Water level at or below which the container is considered empty.
pub const WATER_LEVEL_MIN_ALLOWED: i16 = 0;
/// Moisture reading at or below which the soil is considered dry.
pub const MOISTURE_LEVEL_MIN_ALLOWED: i16 = 10;

/// Delay between executor ticks (milliseconds).
pub const LOOP_DELAY_MS: u32 = 1000;
/// Settle time between powering a sensor and sampling it (milliseconds).
pub const SENSOR_SETTLE_MS: u32 = 10;
/// Serial console baud rate.
pub const BAUD_RATE: u32 = 115_200;

/// Raw sensor thresholds the state machine compares readings against.
///
/// Fixed once the watering process is built; never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub water_level_max: i16,
    pub water_level_min: i16,
    pub moisture_level_min: i16,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            water_level_max: WATER_LEVEL_MAX_ALLOWED,
            water_level_min: WATER_LEVEL_MIN_ALLOWED,
            moisture_level_min: MOISTURE_LEVEL_MIN_ALLOWED,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Thresholds ---
    pub thresholds: Thresholds,

    // --- Timing ---
    /// Delay after every executor tick (milliseconds)
    pub loop_delay_ms: u32,
    /// Sensor power-on settle delay (milliseconds)
    pub sensor_settle_ms: u32,
    /// Ticks spent in cool-down (with the container drained) before the
    /// system returns to active.  `0` keeps the system in cool-down.
    pub cool_down_ticks: u32,
    /// Emit a telemetry record every N ticks
    pub telemetry_every_ticks: u32,

    // --- Console ---
    pub baud_rate: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),

            // Timing
            loop_delay_ms: LOOP_DELAY_MS,       // 1 Hz
            sensor_settle_ms: SENSOR_SETTLE_MS,
            cool_down_ticks: 1800,              // 30 min at 1 Hz
            telemetry_every_ticks: 60,          // 1/min

            baud_rate: BAUD_RATE,
        }
    }
}

impl SystemConfig {
    /// Reject configurations the state machine cannot operate under.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if t.water_level_min >= t.water_level_max {
            return Err(ConfigError::ValidationFailed(
                "water_level_min must be below water_level_max",
            )
            .into());
        }
        if self.loop_delay_ms == 0 {
            return Err(ConfigError::ValidationFailed("loop_delay_ms must be non-zero").into());
        }
        if self.baud_rate == 0 {
            return Err(ConfigError::ValidationFailed("baud_rate must be non-zero").into());
        }
        if self.telemetry_every_ticks == 0 {
            return Err(
                ConfigError::ValidationFailed("telemetry_every_ticks must be non-zero").into(),
            );
        }
        Ok(())
    }

    /// Parse a JSON configuration blob and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|_| ConfigError::ValidationFailed("malformed config JSON"))?;
        config.validate()?;
        Ok(config)
    }
}
