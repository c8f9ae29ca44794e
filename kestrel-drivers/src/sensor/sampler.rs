//! Averaging ADC sampler
//!
//! Buffers raw conversions from the ADC FIFO in a [`List`] and reduces
//! them to a mean (or median).
//!
//! # Divisor
//!
//! The mean divides the sum of collected readings by the *requested*
//! sample count, not by the number actually collected. If the FIFO runs
//! dry part way through, the mean is biased low. [`SampleSummary`] reports
//! both counts so callers can detect this, and
//! [`SampleSummary::mean_of_collected`] gives the corrected value.

use kestrel_core::config::SamplerConfig;
use kestrel_core::list::List;
use kestrel_core::traits::{AdcChannel, AdcError, AdcFifo};

/// Sampler errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerError {
    /// Zero samples requested
    NoSamples,
    /// Not a single reading could be taken
    Adc(AdcError),
}

impl From<AdcError> for SamplerError {
    fn from(e: AdcError) -> Self {
        SamplerError::Adc(e)
    }
}

/// Result of one averaged measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Readings asked for
    pub requested: u16,
    /// Readings actually collected
    pub collected: u16,
    /// Sum of collected raw readings
    pub sum: u32,
    /// `sum / requested`, in raw ADC codes
    pub mean: f32,
}

impl SampleSummary {
    /// Check if every requested reading was collected
    pub fn is_complete(&self) -> bool {
        self.collected == self.requested
    }

    /// `sum / collected`, or `None` if nothing was collected
    pub fn mean_of_collected(&self) -> Option<f32> {
        if self.collected == 0 {
            return None;
        }
        Some(self.sum as f32 / self.collected as f32)
    }
}

/// ADC sampler
pub struct Sampler<A> {
    adc: A,
    config: SamplerConfig,
}

impl<A: AdcFifo> Sampler<A> {
    /// Create a new sampler
    pub fn new(adc: A, config: SamplerConfig) -> Self {
        Self { adc, config }
    }

    /// Get the sampler settings
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Get access to the ADC
    pub fn adc(&self) -> &A {
        &self.adc
    }

    /// Get mutable access to the ADC
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Release the ADC
    pub fn into_inner(self) -> A {
        self.adc
    }

    /// Collect up to `sample_count` raw readings from `channel`
    ///
    /// Starts the ADC, drops up to `warmup_discard` readings that are
    /// already queued, then reads. A read failure ends collection early;
    /// the readings gathered so far are returned unless there are none.
    /// The ADC is stopped and drained on every path.
    pub fn collect(
        &mut self,
        channel: AdcChannel,
        sample_count: u16,
    ) -> Result<List<u16>, SamplerError> {
        if sample_count == 0 {
            return Err(SamplerError::NoSamples);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Sampling {} x{}", channel, sample_count);

        self.adc.select(channel);
        self.adc.start();

        for _ in 0..self.config.warmup_discard {
            if self.adc.is_empty() {
                break;
            }
            // Early conversions read low and are thrown away
            if self.adc.read_blocking().is_err() {
                break;
            }
        }

        let mut samples = List::with_capacity(sample_count as usize);
        let mut failure = None;
        for _ in 0..sample_count {
            match self.adc.read_blocking() {
                Ok(raw) => {
                    samples.append(raw);
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        self.adc.stop();
        self.adc.drain();

        match failure {
            Some(e) if samples.is_empty() => Err(SamplerError::Adc(e)),
            Some(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "ADC ran dry after {} of {} samples",
                    samples.count(),
                    sample_count
                );
                Ok(samples)
            }
            None => Ok(samples),
        }
    }

    /// Average `sample_count` readings from `channel`
    pub fn sample(
        &mut self,
        channel: AdcChannel,
        sample_count: u16,
    ) -> Result<SampleSummary, SamplerError> {
        let samples = self.collect(channel, sample_count)?;

        let sum: u32 = samples.iter().map(|&raw| u32::from(raw)).sum();
        Ok(SampleSummary {
            requested: sample_count,
            collected: samples.count() as u16,
            sum,
            mean: sum as f32 / sample_count as f32,
        })
    }

    /// Average using the configured sample count
    pub fn sample_configured(&mut self, channel: AdcChannel) -> Result<SampleSummary, SamplerError> {
        self.sample(channel, self.config.sample_count)
    }

    /// Averaged reading converted to volts
    pub fn sample_volts(
        &mut self,
        channel: AdcChannel,
        sample_count: u16,
    ) -> Result<f32, SamplerError> {
        let summary = self.sample(channel, sample_count)?;
        Ok(summary.mean * self.config.volts_per_code())
    }

    /// Median of the collected readings (lower median for even counts)
    ///
    /// Less sensitive to single-sample spikes than the mean.
    pub fn median_raw(&mut self, channel: AdcChannel, sample_count: u16) -> Result<u16, SamplerError> {
        let mut samples = self.collect(channel, sample_count)?;
        samples.merge_sort();

        let middle = (samples.count() - 1) / 2;
        samples.get(middle).copied().ok_or(SamplerError::NoSamples)
    }
}

/// Scripted ADC FIFO for tests
///
/// `warmup` readings are already queued when the ADC starts; `readings`
/// arrive one per blocking read. Once both are used up reads fail with
/// [`AdcError::FifoEmpty`]. A stalled FIFO claims to hold data but
/// every read fails with [`AdcError::Overrun`].
#[cfg(test)]
pub(crate) struct ScriptedAdc {
    warmup: &'static [u16],
    readings: &'static [u16],
    stalled: bool,
    pub(crate) attempts: usize,
    pub(crate) selected: Option<AdcChannel>,
    pub(crate) running: bool,
    pub(crate) drained: bool,
    pub(crate) reads: usize,
}

#[cfg(test)]
impl ScriptedAdc {
    pub(crate) fn new(warmup: &'static [u16], readings: &'static [u16]) -> Self {
        Self {
            warmup,
            readings,
            stalled: false,
            attempts: 0,
            selected: None,
            running: false,
            drained: false,
            reads: 0,
        }
    }

    pub(crate) fn stalled() -> Self {
        Self {
            stalled: true,
            ..Self::new(&[], &[])
        }
    }
}

#[cfg(test)]
impl AdcFifo for ScriptedAdc {
    fn select(&mut self, channel: AdcChannel) {
        self.selected = Some(channel);
    }

    fn start(&mut self) {
        self.running = true;
        self.drained = false;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_empty(&self) -> bool {
        !self.stalled && self.warmup.is_empty()
    }

    fn read_blocking(&mut self) -> Result<u16, AdcError> {
        self.attempts += 1;
        if self.stalled {
            return Err(AdcError::Overrun);
        }
        if !self.running {
            return Err(AdcError::FifoEmpty);
        }
        let source = if self.warmup.is_empty() {
            &mut self.readings
        } else {
            &mut self.warmup
        };
        let queued: &'static [u16] = *source;
        let (&first, rest) = queued.split_first().ok_or(AdcError::FifoEmpty)?;
        *source = rest;
        self.reads += 1;
        Ok(first)
    }

    fn drain(&mut self) {
        self.warmup = &[];
        self.drained = true;
    }
}
