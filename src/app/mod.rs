//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules of the watering rig: system
//! state, idempotent actuator control, the watering process and the
//! executor that drives it.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod controller;
pub mod events;
pub mod executor;
pub mod ports;
pub mod process;
pub mod state;
