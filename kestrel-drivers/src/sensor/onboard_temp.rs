//! RP2040 on-die temperature sensor
//!
//! The sensor is a biased diode on ADC input 4. Its voltage falls
//! linearly with temperature:
//!
//! ```text
//! T(°C) = 27 - (V - 0.706) / 0.001721
//! ```

use kestrel_core::traits::adc::ADC_FULL_SCALE;
use kestrel_core::traits::{AdcChannel, AdcFifo, SensorError, TemperatureSensor};

use super::sampler::Sampler;

/// Sensor voltage at 27°C
const VBE_AT_27C: f32 = 0.706;

/// Voltage slope in V/°C
const VBE_SLOPE: f32 = 0.001721;

/// Convert a raw 12-bit reading to volts
pub fn raw_to_volts(raw: f32, vref: f32) -> f32 {
    raw * vref / ADC_FULL_SCALE as f32
}

/// Convert sensor voltage to °C
pub fn volts_to_celsius(volts: f32) -> f32 {
    27.0 - (volts - VBE_AT_27C) / VBE_SLOPE
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Round to the nearest 0.1 unit as fixed point
fn to_x10(value: f32) -> Result<i16, SensorError> {
    let scaled = value * 10.0;
    if scaled.is_nan() || scaled >= i16::MAX as f32 || scaled <= i16::MIN as f32 {
        return Err(SensorError::OutOfRange);
    }
    // f32::round is not available without std
    let rounded = if scaled >= 0.0 { scaled + 0.5 } else { scaled - 0.5 };
    Ok(rounded as i16)
}

/// On-die temperature sensor read through an averaging [`Sampler`]
pub struct OnboardTempSensor<A> {
    sampler: Sampler<A>,
    samples: u16,
}

impl<A: AdcFifo> OnboardTempSensor<A> {
    /// Create a sensor averaging the sampler's configured sample count
    pub fn new(sampler: Sampler<A>) -> Self {
        let samples = sampler.config().sample_count;
        Self { sampler, samples }
    }

    /// Override the number of readings averaged per measurement
    pub fn with_samples(mut self, samples: u16) -> Self {
        self.samples = samples;
        self
    }

    /// Averaged sensor voltage
    pub fn read_volts(&mut self) -> Result<f32, SensorError> {
        let summary = self
            .sampler
            .sample(AdcChannel::Temperature, self.samples)
            .map_err(|_| SensorError::ConversionError)?;
        Ok(raw_to_volts(summary.mean, self.sampler.config().vref()))
    }

    /// Averaged temperature in °C
    pub fn read_celsius_f32(&mut self) -> Result<f32, SensorError> {
        self.read_volts().map(volts_to_celsius)
    }

    /// Release the sampler
    pub fn into_inner(self) -> Sampler<A> {
        self.sampler
    }
}

impl<A: AdcFifo> TemperatureSensor for OnboardTempSensor<A> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        to_x10(self.read_celsius_f32()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::sampler::ScriptedAdc;
    use kestrel_core::config::SamplerConfig;

    fn sensor(readings: &'static [u16]) -> OnboardTempSensor<ScriptedAdc> {
        let sampler = Sampler::new(ScriptedAdc::new(&[], readings), SamplerConfig::default());
        OnboardTempSensor::new(sampler).with_samples(readings.len() as u16)
    }

    #[test]
    fn test_volts_to_celsius_reference_point() {
        assert!((volts_to_celsius(0.706) - 27.0).abs() < 0.001);
        // Colder means higher voltage
        assert!(volts_to_celsius(0.75) < 27.0);
    }

    #[test]
    fn test_fahrenheit_conversions() {
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 0.001);
        assert!((fahrenheit_to_celsius(32.0)).abs() < 0.001);
        assert!((fahrenheit_to_celsius(celsius_to_fahrenheit(-40.0)) + 40.0).abs() < 0.001);
    }

    #[test]
    fn test_raw_to_volts() {
        assert!((raw_to_volts(4096.0, 3.3) - 3.3).abs() < 0.0001);
        assert_eq!(raw_to_volts(0.0, 3.3), 0.0);
    }

    #[test]
    fn test_read_room_temperature() {
        // 876 * 3.3 / 4096 = 0.7058 V, about 27.1°C
        let mut s = sensor(&[876, 876, 876, 876]);
        assert_eq!(s.read_celsius_x10(), Ok(271));
    }

    #[test]
    fn test_reads_temperature_channel() {
        let mut s = sensor(&[876]);
        s.read_celsius_x10().unwrap();
        let adc = s.into_inner().into_inner();
        assert_eq!(adc.selected, Some(AdcChannel::Temperature));
    }

    #[test]
    fn test_read_fahrenheit() {
        let mut s = sensor(&[876, 876]);
        // 27.14°C = 80.85°F
        let f = s.read_fahrenheit_x10().unwrap();
        assert!((f - 808).abs() <= 1);
    }

    #[test]
    fn test_adc_failure_is_conversion_error() {
        let mut s = sensor(&[]).with_samples(4);
        assert_eq!(s.read_celsius_x10(), Err(SensorError::ConversionError));
    }

    #[test]
    fn test_to_x10_rounding() {
        assert_eq!(to_x10(27.14), Ok(271));
        assert_eq!(to_x10(27.16), Ok(272));
        assert_eq!(to_x10(-3.26), Ok(-33));
        assert_eq!(to_x10(5000.0), Err(SensorError::OutOfRange));
    }
}
