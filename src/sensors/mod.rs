//! Sensor subsystem — probe drivers and the aggregating [`ReadSensors`].
//!
//! The reader owns every registered probe and keeps only the latest
//! reading per [`SensorId`].  Each executor tick it overwrites the whole
//! [`SensorReadings`] snapshot, which the watering process then consults
//! exactly once.

pub mod moisture_level;
pub mod probe;
pub mod reader;
pub mod water_level;

use core::fmt;

use heapless::LinearMap;
use serde::{Deserialize, Serialize};

use crate::error::SensorError;

pub use probe::{PoweredSensor, SignalKind};
pub use reader::ReadSensors;

/// Capacity of the sensor registry and of every readings snapshot.
pub const MAX_SENSORS: usize = 4;

/// Identity of a probe on the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorId {
    MoistureLevel,
    WaterLevel,
}

impl SensorId {
    /// Human-readable probe name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MoistureLevel => "Moisture Level Sensor",
            Self::WaterLevel => "Water Level Sensor",
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Latest raw reading per sensor.  No history is retained.
#[derive(Debug, Clone, Default)]
pub struct SensorReadings {
    values: LinearMap<SensorId, i16, MAX_SENSORS>,
}

impl SensorReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from `(id, value)` pairs.  Later pairs win.
    pub fn from_pairs(pairs: &[(SensorId, i16)]) -> Result<Self, SensorError> {
        let mut readings = Self::new();
        for &(id, value) in pairs {
            readings.insert(id, value)?;
        }
        Ok(readings)
    }

    /// Last recorded value for `id`, or [`SensorError::NotFound`].
    pub fn get(&self, id: SensorId) -> Result<i16, SensorError> {
        self.values.get(&id).copied().ok_or(SensorError::NotFound(id))
    }

    /// Record `value` for `id`, replacing any previous value.
    pub fn insert(&mut self, id: SensorId, value: i16) -> Result<(), SensorError> {
        self.values
            .insert(id, value)
            .map(|_| ())
            .map_err(|_| SensorError::RegistryFull)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (SensorId, i16)> + '_ {
        self.values.iter().map(|(id, value)| (*id, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
