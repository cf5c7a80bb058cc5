//! GPIO / peripheral pin assignments for the watering rig board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Capacitive soil-moisture probe, analog output.
pub const MOISTURE_ADC_GPIO: u8 = 4;
/// Water-level probe in the plant container, analog output.
pub const WATER_LEVEL_ADC_GPIO: u8 = 5;

// ---------------------------------------------------------------------------
// Sensor power (probes are only energised while sampling)
// ---------------------------------------------------------------------------

/// Digital output: HIGH powers the moisture probe.
pub const MOISTURE_POWER_GPIO: u8 = 6;
/// Digital output: HIGH powers the water-level probe.
pub const WATER_LEVEL_POWER_GPIO: u8 = 7;

// ---------------------------------------------------------------------------
// Actuators (relay board)
// ---------------------------------------------------------------------------

/// Digital output: HIGH energises the fill pump relay.
pub const PUMP_RELAY_GPIO: u8 = 15;
/// Digital output: HIGH energises the drain solenoid (valve open).
pub const VALVE_RELAY_GPIO: u8 = 16;

/// Every pin configured as an output at boot.
pub const OUTPUT_PINS: [u8; 4] = [
    MOISTURE_POWER_GPIO,
    WATER_LEVEL_POWER_GPIO,
    PUMP_RELAY_GPIO,
    VALVE_RELAY_GPIO,
];

/// Every pin sampled through ADC1.
pub const ADC_PINS: [u8; 2] = [MOISTURE_ADC_GPIO, WATER_LEVEL_ADC_GPIO];

