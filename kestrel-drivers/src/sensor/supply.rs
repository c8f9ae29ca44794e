//! System supply (VSYS) monitor
//!
//! On Pico-style boards VSYS reaches ADC3 (GPIO29) through a 3:1
//! resistor divider, so the pin sees a third of the supply voltage.

use kestrel_core::traits::{AdcChannel, AdcFifo};

use super::sampler::{Sampler, SamplerError};

/// VSYS divider ratio on Pico-style boards
pub const VSYS_DIVIDER: f32 = 3.0;

/// Supply voltage reader on the VSYS sense input
pub struct SupplyMonitor<A> {
    sampler: Sampler<A>,
    samples: u16,
    divider: f32,
}

impl<A: AdcFifo> SupplyMonitor<A> {
    /// Create a monitor averaging the sampler's configured sample count
    pub fn new(sampler: Sampler<A>) -> Self {
        let samples = sampler.config().sample_count;
        Self {
            sampler,
            samples,
            divider: VSYS_DIVIDER,
        }
    }

    /// Override the number of readings averaged per measurement
    pub fn with_samples(mut self, samples: u16) -> Self {
        self.samples = samples;
        self
    }

    /// Use a board-specific divider ratio
    pub fn with_divider(mut self, divider: f32) -> Self {
        self.divider = divider;
        self
    }

    /// Averaged voltage at the ADC pin
    pub fn read_pin_volts(&mut self) -> Result<f32, SamplerError> {
        self.sampler.sample_volts(AdcChannel::Adc3, self.samples)
    }

    /// Averaged supply voltage with the divider undone
    pub fn read_volts(&mut self) -> Result<f32, SamplerError> {
        Ok(self.read_pin_volts()? * self.divider)
    }

    /// Supply voltage in millivolts
    pub fn read_millivolts(&mut self) -> Result<u16, SamplerError> {
        let mv = self.read_volts()? * 1000.0;
        // Saturating float cast
        Ok((mv + 0.5) as u16)
    }

    /// Release the sampler
    pub fn into_inner(self) -> Sampler<A> {
        self.sampler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::sampler::ScriptedAdc;
    use kestrel_core::config::SamplerConfig;
    use kestrel_core::traits::AdcError;

    fn monitor(readings: &'static [u16]) -> SupplyMonitor<ScriptedAdc> {
        let sampler = Sampler::new(ScriptedAdc::new(&[], readings), SamplerConfig::default());
        SupplyMonitor::new(sampler).with_samples(readings.len() as u16)
    }

    #[test]
    fn test_usb_supply_reads_five_volts() {
        // 5.0 V / 3 = 1.667 V at the pin, 2068 codes at 3.3 V reference
        let mut m = monitor(&[2068, 2068, 2068, 2068]);
        let volts = m.read_volts().unwrap();
        assert!((volts - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_reads_vsys_channel() {
        let mut m = monitor(&[1241]);
        let pin = m.read_pin_volts().unwrap();
        assert!((pin - 1.0).abs() < 0.001);

        let adc = m.into_inner().into_inner();
        assert_eq!(adc.selected, Some(AdcChannel::Adc3));
        assert!(!adc.running);
    }

    #[test]
    fn test_millivolts() {
        // 1241 codes = 0.99983 V at the pin, 2999.5 mV supply
        let mut m = monitor(&[1241, 1241]);
        let mv = m.read_millivolts().unwrap();
        assert!((2999..=3000).contains(&mv));
    }

    #[test]
    fn test_custom_divider() {
        let mut m = monitor(&[1241]).with_divider(2.0);
        let volts = m.read_volts().unwrap();
        assert!((volts - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_dead_adc_is_an_error() {
        let mut m = monitor(&[]).with_samples(8);
        assert_eq!(m.read_volts(), Err(SamplerError::Adc(AdcError::FifoEmpty)));
    }
}
