use crate::error::{Error, Result};
use crate::math::interpolate_sinc;
use crate::util::Interval;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

/// A scalar signal sampled at uniformly spaced times.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "SignalRecord", into = "SignalRecord")]
pub struct SampledSignal {
    /// The time of the first sample.
    start: f64,
    /// The time between consecutive samples, always positive.
    step: f64,
    /// The sample values, never empty.
    samples: Vec<f64>,
}

/// The serialised form of a [SampledSignal], validated on the way in.
#[derive(Serialize, Deserialize)]
struct SignalRecord {
    start: f64,
    step: f64,
    samples: Vec<f64>,
}

impl SampledSignal {
    /// Creates a new signal.
    ///
    /// # Parameters
    /// * `start` - The time of the first sample
    /// * `step` - The sampling period, which must be positive and finite
    /// * `samples` - The sample values, of which there must be at least one
    pub fn new(start: f64, step: f64, samples: Vec<f64>) -> Result<Self> {
        if !start.is_finite() {
            return Err(Error::InvalidStart(start));
        }
        if !(step > 0.0 && step.is_finite()) {
            return Err(Error::InvalidStep(step));
        }
        if samples.is_empty() {
            return Err(Error::EmptySignal);
        }
        Ok(Self {
            start,
            step,
            samples,
        })
    }

    /// Creates a signal by sampling `f` at `count` times starting from `start`.
    pub fn from_fn(start: f64, step: f64, count: usize, f: impl FnMut(f64) -> f64) -> Result<Self> {
        let samples = (0..count).map(|i| start + (i as f64) * step).map(f).collect();
        Self::new(start, step, samples)
    }

    /// The time of the first sample.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The time of the last sample.
    pub fn end(&self) -> f64 {
        self.index_to_time(self.len() - 1)
    }

    /// The sampling period.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The sampling rate, i.e. the reciprocal of the sampling period.
    pub fn rate(&self) -> f64 {
        1.0 / self.step
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false, as a signal holds at least one sample.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The interval spanning the first and last sample times.
    pub fn span(&self) -> Interval<f64> {
        Interval::new(self.start(), self.end())
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Gets a single sample, if `idx` is in range.
    pub fn sample(&self, idx: usize) -> Option<f64> {
        self.samples.get(idx).copied()
    }

    /// The time at which sample `idx` was taken.
    pub fn index_to_time(&self, idx: usize) -> f64 {
        self.start + (idx as f64) * self.step
    }

    /// Maps a time to a fractional, zero-based sample index.
    pub fn time_to_index(&self, t: f64) -> f64 {
        (t - self.start) / self.step
    }

    /// Interpolates the signal at time `t` with a windowed-sinc kernel.
    pub fn interpolate(&self, t: f64, half_width: usize) -> f64 {
        interpolate_sinc(&self.samples, self.time_to_index(t), half_width)
    }

    /// The smallest and largest sample values. NaN samples are ignored
    /// unless every sample is NaN.
    pub fn extrema(&self) -> Interval<f64> {
        let values = self.samples.iter().copied().filter(|y| !y.is_nan());
        match values.minmax() {
            MinMaxResult::NoElements => Interval::new(f64::NAN, f64::NAN),
            MinMaxResult::OneElement(y) => Interval::new(y, y),
            MinMaxResult::MinMax(min, max) => Interval::new(min, max),
        }
    }
}

impl TryFrom<SignalRecord> for SampledSignal {
    type Error = Error;

    fn try_from(record: SignalRecord) -> Result<Self> {
        Self::new(record.start, record.step, record.samples)
    }
}

impl From<SampledSignal> for SignalRecord {
    fn from(signal: SampledSignal) -> Self {
        Self {
            start: signal.start,
            step: signal.step,
            samples: signal.samples,
        }
    }
}
