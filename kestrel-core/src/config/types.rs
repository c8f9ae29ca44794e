//! Sampling configuration type definitions
//!
//! These types describe which ADC inputs are sampled and how. With the
//! `serde` feature they round-trip through postcard for flash storage.

use heapless::String;

use crate::traits::AdcChannel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Maximum sampled channels per config
pub const MAX_CHANNELS: usize = 5;

/// Readings discarded after starting the ADC
///
/// The first conversions after power-up read low.
pub const DEFAULT_WARMUP_DISCARD: u8 = 10;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sample count of zero
    ZeroSamples,
    /// Reference voltage of zero
    ZeroReference,
    /// Too many channels
    TooManyChannels,
    /// Label longer than [`MAX_LABEL_LEN`]
    LabelTooLong,
    /// Failed to encode
    Serialize,
    /// Failed to decode
    Deserialize,
}

/// ADC sampler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Readings thrown away before collecting
    pub warmup_discard: u8,
    /// Readings averaged per measurement
    pub sample_count: u16,
    /// ADC reference voltage in millivolts
    pub vref_mv: u16,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            warmup_discard: DEFAULT_WARMUP_DISCARD,
            sample_count: 16,
            vref_mv: 3300,
        }
    }
}

impl SamplerConfig {
    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.vref_mv == 0 {
            return Err(ConfigError::ZeroReference);
        }
        Ok(())
    }

    /// Reference voltage in volts
    pub fn vref(&self) -> f32 {
        self.vref_mv as f32 / 1000.0
    }

    /// Volts per raw ADC code
    pub fn volts_per_code(&self) -> f32 {
        self.vref() / crate::traits::adc::ADC_FULL_SCALE as f32
    }
}

/// One sampled input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelConfig {
    /// Display label
    pub label: String<MAX_LABEL_LEN>,
    /// ADC input
    pub channel: AdcChannel,
    /// Readings averaged for this input (overrides the sampler default)
    pub sample_count: Option<u16>,
}

impl ChannelConfig {
    /// Create a channel entry
    pub fn new(label: &str, channel: AdcChannel) -> Result<Self, ConfigError> {
        Ok(Self {
            label: String::try_from(label).map_err(|_| ConfigError::LabelTooLong)?,
            channel,
            sample_count: None,
        })
    }

    /// Set a per-channel sample count
    pub fn with_sample_count(mut self, sample_count: u16) -> Self {
        self.sample_count = Some(sample_count);
        self
    }
}

/// Complete sampling configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingConfig {
    /// Sampler settings shared by all channels
    pub sampler: SamplerConfig,
    /// Sampled inputs
    pub channels: heapless::Vec<ChannelConfig, MAX_CHANNELS>,
}

impl SamplingConfig {
    /// Add a sampled input
    pub fn add_channel(&mut self, channel: ChannelConfig) -> Result<(), ConfigError> {
        self.channels
            .push(channel)
            .map_err(|_| ConfigError::TooManyChannels)
    }

    /// Find a channel by label
    pub fn channel(&self, label: &str) -> Option<&ChannelConfig> {
        self.channels.iter().find(|c| c.label.as_str() == label)
    }

    /// Sample count to use for `channel`
    pub fn sample_count_for(&self, channel: &ChannelConfig) -> u16 {
        channel.sample_count.unwrap_or(self.sampler.sample_count)
    }

    /// Validate sampler settings and every channel override
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sampler.validate()?;
        if self.channels.iter().any(|c| c.sample_count == Some(0)) {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl SamplingConfig {
    /// Encode as postcard into `buffer`, returning the used prefix
    pub fn to_postcard<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buffer).map_err(|_| ConfigError::Serialize)
    }

    /// Decode from postcard bytes
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}
