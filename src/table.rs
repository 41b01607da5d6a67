//! Denormalized sine lookup tables.
//!
//! Provides [`SineTable`], a fixed-capacity table of sine samples scaled onto
//! the index range `[0, period - 1]`, and [`TraceEntry`], the per-sample
//! diagnostic record describing how each value was derived.

use crate::types::{GenerationParameters, TableError};
use core::f64::consts::PI;
use heapless::Vec;

/// Intermediate values computed for a single table sample.
///
/// Produced by [`SineTable::trace`]. The `Display` implementation renders the
/// familiar one-line log format with every value at two decimal places,
/// preceded by an extra line when the sample overshoots the table range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TraceEntry {
    /// Sample index within the table.
    pub index: usize,

    /// Position within the period, as a percentage.
    pub percent: f64,

    /// Angle in radians before the frequency multiplier is applied.
    pub angle: f64,

    /// Raw sine value in `[-1, 1]`.
    pub sine: f64,

    /// Sine value mapped onto `[0, period - 1]`.
    pub denormalized: f64,

    /// Half of the value range used for denormalization.
    pub half_period: f64,

    /// Set when `denormalized` rounds past `period - 1`.
    pub overshoot: bool,
}

impl TraceEntry {
    /// Computes sample `index` of the table described by `params`.
    ///
    /// The frequency is applied twice: once when mapping the index to an
    /// angle, and again as a multiplier on that angle inside the sine.
    pub fn compute(params: &GenerationParameters, index: usize) -> Self {
        let period = params.period as f64;
        let fraction = index as f64 / period;
        let period_radians = 2.0 * PI * params.frequency;
        let angle = fraction * period_radians;
        let sine = libm::sin(params.frequency * angle);

        let half_period = params.half_period();
        let denormalized = sine * half_period + half_period;

        Self {
            index,
            percent: fraction * 100.0,
            angle,
            sine,
            denormalized,
            half_period,
            overshoot: denormalized > params.max_value(),
        }
    }
}

impl core::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.overshoot {
            writeln!(
                f,
                "sample {} overshoots table range: s is {}, half period is {}",
                self.index, self.sine, self.half_period
            )?;
        }
        write!(
            f,
            "{} ({:.2}%): sin(θ:{:.2}) == {:.2}, denormalized == {:.2}",
            self.index, self.percent, self.angle, self.sine, self.denormalized
        )
    }
}

/// A denormalized sine lookup table.
///
/// Holds `period` samples, each in `[0, period - 1]` up to floating-point
/// rounding. Values are stored exactly as computed; a sample that rounds past
/// the upper bound is reported by [`SineTable::trace`] and clamped by the
/// byte conversion in [`crate::render`], never here.
///
/// # Type Parameters
/// * `N` - Maximum period this table can hold
#[derive(Debug, Clone)]
pub struct SineTable<const N: usize> {
    samples: Vec<f64, N>,
    params: GenerationParameters,
}

impl<const N: usize> SineTable<N> {
    /// Generates a table from validated parameters.
    ///
    /// # Errors
    /// * `InvalidParameter` - Zero period or non-finite frequency
    /// * `CapacityExceeded` - `period` is larger than `N`
    pub fn generate(params: GenerationParameters) -> Result<Self, TableError> {
        params.validate()?;

        let capacity_exceeded = TableError::CapacityExceeded {
            period: params.period,
            capacity: N,
        };
        if params.period > N {
            return Err(capacity_exceeded);
        }

        let mut samples = Vec::new();
        for index in 0..params.period {
            let entry = TraceEntry::compute(&params, index);

            #[cfg(feature = "defmt")]
            if entry.overshoot {
                defmt::warn!(
                    "sample {} overshoots table range: {}",
                    index,
                    entry.denormalized
                );
            }

            samples
                .push(entry.denormalized)
                .map_err(|_| capacity_exceeded)?;
        }

        Ok(Self { samples, params })
    }

    /// Returns the parameters this table was generated from.
    pub fn params(&self) -> GenerationParameters {
        self.params
    }

    /// Number of samples, equal to the period.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest in-range sample value, `period - 1`.
    pub fn max_value(&self) -> f64 {
        self.params.max_value()
    }

    /// Returns the sample at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied()
    }

    /// Returns all samples in index order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Iterates over samples in index order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Lazily recomputes the derivation of every sample.
    ///
    /// Each call starts a fresh, independent trace.
    pub fn trace(&self) -> impl Iterator<Item = TraceEntry> + use<N> {
        let params = self.params;
        (0..params.period).map(move |index| TraceEntry::compute(&params, index))
    }
}

impl<const N: usize> core::ops::Index<usize> for SineTable<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

/// Generates a sine table with `period` samples and `frequency` oscillations.
///
/// Shorthand for validating [`GenerationParameters`] and calling
/// [`SineTable::generate`].
pub fn generate<const N: usize>(period: usize, frequency: f64) -> Result<SineTable<N>, TableError> {
    SineTable::generate(GenerationParameters { period, frequency })
}
