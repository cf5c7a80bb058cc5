//! Resistive water-level probe in the plant container.
//!
//! Analog output that rises with the water column.  Powered only while
//! sampling to limit electrode corrosion.

use super::{PoweredSensor, SensorId, SignalKind};
use crate::pins;

/// The water-level probe as wired on the main board.
pub fn water_level_sensor(settle_ms: u32) -> PoweredSensor {
    PoweredSensor::new(SensorId::WaterLevel, SignalKind::Analog, pins::WATER_LEVEL_ADC_GPIO)
        .with_power(pins::WATER_LEVEL_POWER_GPIO, settle_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_analog_water_level_probe() {
        let probe = water_level_sensor(10);
        assert_eq!(probe.id(), SensorId::WaterLevel);
        assert_eq!(probe.kind(), SignalKind::Analog);
    }
}
