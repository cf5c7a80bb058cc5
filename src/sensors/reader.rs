//! [`ReadSensors`] — the rig's Sensor Reader.
//!
//! Owns the registered probes, the pin adapter they are sampled through,
//! and the delay used for their settle time.  Reads are sequential and
//! blocking; a full sweep is O(number of probes).

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use log::{debug, info, warn};

use super::{MAX_SENSORS, PoweredSensor, SensorId, SensorReadings};
use crate::app::ports::{PinPort, SensorPort};
use crate::error::{Result, SensorError};

pub struct ReadSensors<P, D> {
    sensors: Vec<PoweredSensor, MAX_SENSORS>,
    readings: SensorReadings,
    pins: P,
    delay: D,
}

impl<P: PinPort, D: DelayNs> ReadSensors<P, D> {
    pub fn new(pins: P, delay: D) -> Self {
        Self {
            sensors: Vec::new(),
            readings: SensorReadings::new(),
            pins,
            delay,
        }
    }

    /// Register a probe.  A probe with the same id replaces the old one.
    pub fn register(&mut self, sensor: PoweredSensor) -> Result<()> {
        if let Some(slot) = self.sensors.iter_mut().find(|s| s.id() == sensor.id()) {
            *slot = sensor;
            return Ok(());
        }
        self.sensors
            .push(sensor)
            .map_err(|_| SensorError::RegistryFull)?;
        Ok(())
    }

    /// Register every probe in `sensors`, failing on the first overflow.
    pub fn with_sensors(mut self, sensors: impl IntoIterator<Item = PoweredSensor>) -> Result<Self> {
        for sensor in sensors {
            self.register(sensor)?;
        }
        Ok(self)
    }

    /// The pin adapter probes are sampled through.
    pub fn pins(&self) -> &P {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Forget every stored reading.  Queries fail with `NotFound` until
    /// the next read.
    pub fn reset(&mut self) {
        info!("Sensors: resetting all readings");
        for sensor in &mut self.sensors {
            sensor.reset();
        }
        self.readings.clear();
    }
}

impl<P: PinPort, D: DelayNs> SensorPort for ReadSensors<P, D> {
    fn setup(&mut self) {
        for sensor in &self.sensors {
            sensor.power_off(&mut self.pins);
        }
        info!("Sensors: {} probe(s) registered, all unpowered", self.sensors.len());
    }

    fn read_all_sensors(&mut self) {
        debug!("Sensors: start reading");
        self.readings.clear();
        for sensor in &mut self.sensors {
            let value = sensor.read(&mut self.pins, &mut self.delay);
            if let Err(e) = self.readings.insert(sensor.id(), value) {
                warn!("Sensors: dropped {} reading {}: {}", sensor.id(), value, e);
            }
        }
    }

    fn read_sensor(&mut self, id: SensorId) -> Result<i16> {
        let sensor = self
            .sensors
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(SensorError::NotFound(id))?;
        debug!("Sensors: start reading from {}", id);
        let value = sensor.read(&mut self.pins, &mut self.delay);
        self.readings.insert(id, value)?;
        Ok(value)
    }

    fn get_sensor_reading(&self, id: SensorId) -> Result<i16> {
        Ok(self.readings.get(id)?)
    }

    fn get_all_sensor_readings(&self) -> &SensorReadings {
        &self.readings
    }
}
