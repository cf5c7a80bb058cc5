//! Capacitive soil-moisture probe.
//!
//! Lower readings mean drier soil.  Shares the power-on-to-sample
//! sequence with the water-level probe.

use super::{PoweredSensor, SensorId, SignalKind};
use crate::pins;

/// The soil-moisture probe as wired on the main board.
pub fn moisture_level_sensor(settle_ms: u32) -> PoweredSensor {
    PoweredSensor::new(SensorId::MoistureLevel, SignalKind::Analog, pins::MOISTURE_ADC_GPIO)
        .with_power(pins::MOISTURE_POWER_GPIO, settle_ms)
}
