//! Configuration types
//!
//! Board-agnostic sampling configuration, stored as postcard binary data.

pub mod types;

pub use types::*;
