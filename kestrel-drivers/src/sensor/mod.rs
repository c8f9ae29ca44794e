//! ADC-backed sensors

pub mod onboard_temp;
pub mod sampler;
pub mod supply;

pub use onboard_temp::OnboardTempSensor;
pub use sampler::{SampleSummary, Sampler, SamplerError};
pub use supply::SupplyMonitor;
