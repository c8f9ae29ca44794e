//! ADC abstractions
//!
//! RP2040 has a single ADC multiplexed over 5 inputs:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29 (VSYS/3 on most boards)
//! - ADC4: Internal temperature sensor
//!
//! Conversions are pushed into a FIFO while the ADC is free-running;
//! [`AdcFifo`] is the view of that FIFO the sampling code works against.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ADC resolution in bits
pub const ADC_BITS: u8 = 12;

/// Number of distinct raw codes (12-bit)
pub const ADC_FULL_SCALE: u16 = 1 << ADC_BITS;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Input mux index (AINSEL)
    pub fn ainsel(&self) -> u8 {
        match self {
            AdcChannel::Adc0 => 0,
            AdcChannel::Adc1 => 1,
            AdcChannel::Adc2 => 2,
            AdcChannel::Adc3 => 3,
            AdcChannel::Temperature => 4,
        }
    }

    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Temperature => None,
            channel => Some(26 + channel.ainsel()),
        }
    }

    /// Get ADC channel from GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// Errors reported by the ADC FIFO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// ADC block was never initialized
    NotInitialized,
    /// No conversion arrived (ADC stopped or timed out)
    FifoEmpty,
    /// Conversions were lost because the FIFO overflowed
    Overrun,
}

/// Free-running ADC with a conversion FIFO
///
/// Implemented by the board support crate on top of the chip HAL, and
/// by scripted doubles in tests.
pub trait AdcFifo {
    /// Route `channel` to the converter
    ///
    /// Selecting [`AdcChannel::Temperature`] also powers the on-die sensor.
    fn select(&mut self, channel: AdcChannel);

    /// Start free-running conversion into the FIFO
    fn start(&mut self);

    /// Stop conversion
    fn stop(&mut self);

    /// Check if the FIFO currently holds no conversions
    fn is_empty(&self) -> bool;

    /// Wait for and pop the next 12-bit conversion
    fn read_blocking(&mut self) -> Result<u16, AdcError>;

    /// Discard everything left in the FIFO
    fn drain(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_mapping_roundtrip() {
        for channel in [
            AdcChannel::Adc0,
            AdcChannel::Adc1,
            AdcChannel::Adc2,
            AdcChannel::Adc3,
        ] {
            let gpio = channel.gpio().unwrap();
            assert_eq!(AdcChannel::from_gpio(gpio), Some(channel));
        }
    }

    #[test]
    fn test_temperature_has_no_gpio() {
        assert_eq!(AdcChannel::Temperature.gpio(), None);
        assert_eq!(AdcChannel::Temperature.ainsel(), 4);
        assert_eq!(AdcChannel::from_gpio(25), None);
    }

    #[test]
    fn test_full_scale() {
        assert_eq!(ADC_FULL_SCALE, 4096);
    }
}
