//! A single wired probe: analog or digital signal, optionally powered
//! only while it is being sampled.
//!
//! Resistive moisture and level probes corrode when left energised, so
//! the read sequence for a powered probe is
//! `power pin HIGH → settle delay → sample → power pin LOW`.

use embedded_hal::delay::DelayNs;
use log::debug;

use super::SensorId;
use crate::app::ports::PinPort;

/// How the probe's signal pin is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Analog,
    Digital,
}

/// Power switching for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PowerSwitch {
    pin: u8,
    settle_ms: u32,
}

#[derive(Debug, Clone)]
pub struct PoweredSensor {
    id: SensorId,
    kind: SignalKind,
    read_pin: u8,
    power: Option<PowerSwitch>,
    reading: Option<i16>,
}

impl PoweredSensor {
    /// An always-on probe.
    pub fn new(id: SensorId, kind: SignalKind, read_pin: u8) -> Self {
        Self {
            id,
            kind,
            read_pin,
            power: None,
            reading: None,
        }
    }

    /// Switch the probe through `power_pin`, waiting `settle_ms` after
    /// power-on before sampling.
    pub fn with_power(mut self, power_pin: u8, settle_ms: u32) -> Self {
        self.power = Some(PowerSwitch {
            pin: power_pin,
            settle_ms,
        });
        self
    }

    pub fn id(&self) -> SensorId {
        self.id
    }

    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Last sampled value, `None` before the first read or after a reset.
    pub fn reading(&self) -> Option<i16> {
        self.reading
    }

    /// Sample the probe and remember the value.
    pub fn read(&mut self, pins: &mut impl PinPort, delay: &mut impl DelayNs) -> i16 {
        if let Some(power) = self.power {
            pins.digital_write(power.pin, true);
            delay.delay_ms(power.settle_ms);
        }

        let value = match self.kind {
            SignalKind::Analog => pins.analog_read(self.read_pin).min(i16::MAX as u16) as i16,
            SignalKind::Digital => i16::from(pins.digital_read(self.read_pin)),
        };

        if let Some(power) = self.power {
            pins.digital_write(power.pin, false);
        }

        debug!("{}: read {}", self.id, value);
        self.reading = Some(value);
        value
    }

    /// De-energise the probe (no-op for always-on probes).
    pub fn power_off(&self, pins: &mut impl PinPort) {
        if let Some(power) = self.power {
            pins.digital_write(power.pin, false);
        }
    }

    /// Forget the last reading.
    pub fn reset(&mut self) {
        debug!("{}: reset", self.id);
        self.reading = None;
    }
}
