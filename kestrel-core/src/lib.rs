//! Board-agnostic core logic for the sensor board firmware
//!
//! This crate contains everything that does not depend on a specific
//! chip or board:
//!
//! - Positional doubly-linked list used as a scratch buffer for samples
//! - ADC and temperature sensor abstraction traits
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod list;
pub mod traits;
