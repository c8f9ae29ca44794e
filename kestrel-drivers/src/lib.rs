//! Sensor driver implementations
//!
//! This crate builds on the traits defined in kestrel-core:
//!
//! - Averaging ADC sampler backed by the core sample list
//! - On-die temperature sensor conversion
//! - Supply voltage (VSYS) monitor

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod sensor;
