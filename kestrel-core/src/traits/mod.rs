//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the board support crate that drives the actual peripherals.

pub mod adc;
pub mod sensor;

pub use adc::{AdcChannel, AdcError, AdcFifo};
pub use sensor::{SensorError, TemperatureSensor};
