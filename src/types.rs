//! Core types for table generation and gradient composition.

/// Inputs to sine table generation.
///
/// `period` is the number of samples in the table and `frequency` the number
/// of oscillations represented across that period. Frequency is usually a
/// positive integer but any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GenerationParameters {
    /// Number of samples in one table.
    pub period: usize,

    /// Oscillations per period.
    pub frequency: f64,
}

impl GenerationParameters {
    /// Creates validated generation parameters.
    ///
    /// # Errors
    /// * `InvalidParameter(Period)` - `period` is zero
    /// * `InvalidParameter(Frequency)` - `frequency` is NaN or infinite
    pub fn new(period: usize, frequency: f64) -> Result<Self, TableError> {
        let params = Self { period, frequency };
        params.validate()?;
        Ok(params)
    }

    /// Checks the parameters without constructing a table.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.period == 0 {
            return Err(TableError::InvalidParameter(Parameter::Period));
        }
        if !self.frequency.is_finite() {
            return Err(TableError::InvalidParameter(Parameter::Frequency));
        }
        Ok(())
    }

    /// Half of the table's value range, `(period - 1) / 2`.
    #[inline]
    pub fn half_period(&self) -> f64 {
        (self.period as f64 - 1.0) / 2.0
    }

    /// Largest in-range sample value, `period - 1`.
    #[inline]
    pub fn max_value(&self) -> f64 {
        self.period as f64 - 1.0
    }
}

/// The `(period, frequency)` pairs the color-cycle preview is built from.
pub const DEMO_PARAMETERS: [GenerationParameters; 4] = [
    GenerationParameters { period: 360, frequency: 1.0 },
    GenerationParameters { period: 256, frequency: 1.0 },
    GenerationParameters { period: 256, frequency: 2.0 },
    GenerationParameters { period: 128, frequency: 2.0 },
];

/// Phase offsets applied to the green and blue channels of a gradient.
///
/// Offsets are measured in samples relative to the red channel and may be
/// negative or fractional. The default leaves both channels in phase with
/// red, which produces a grayscale sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GradientOffsets {
    /// Green channel shift in samples.
    pub green: f64,

    /// Blue channel shift in samples.
    pub blue: f64,
}

impl GradientOffsets {
    /// Creates offsets for the green and blue channels.
    #[inline]
    pub const fn new(green: f64, blue: f64) -> Self {
        Self { green, blue }
    }

    /// Offsets a third and two thirds of a period apart (a 120° color wheel).
    #[inline]
    pub fn color_wheel(period: usize) -> Self {
        let period = period as f64;
        Self {
            green: period / 3.0,
            blue: 2.0 * period / 3.0,
        }
    }
}

/// Which input an [`TableError::InvalidParameter`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    /// Period was zero.
    Period,

    /// Frequency was not finite.
    Frequency,

    /// A gradient offset was not finite.
    Offset,

    /// The source table was empty.
    Table,
}

/// Table generation and gradient composition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// An input was outside its valid domain.
    InvalidParameter(Parameter),

    /// The period does not fit in the table's storage.
    CapacityExceeded { period: usize, capacity: usize },
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TableError::InvalidParameter(Parameter::Period) => {
                write!(f, "invalid parameter: period must be at least 1")
            }
            TableError::InvalidParameter(Parameter::Frequency) => {
                write!(f, "invalid parameter: frequency must be finite")
            }
            TableError::InvalidParameter(Parameter::Offset) => {
                write!(f, "invalid parameter: gradient offsets must be finite")
            }
            TableError::InvalidParameter(Parameter::Table) => {
                write!(f, "invalid parameter: cannot compose a gradient from an empty table")
            }
            TableError::CapacityExceeded { period, capacity } => {
                write!(
                    f,
                    "period {} exceeds table capacity of {}",
                    period, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_period_is_rejected() {
        assert_eq!(
            GenerationParameters::new(0, 1.0),
            Err(TableError::InvalidParameter(Parameter::Period))
        );
    }

    #[test]
    fn non_finite_frequency_is_rejected() {
        for frequency in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                GenerationParameters::new(16, frequency),
                Err(TableError::InvalidParameter(Parameter::Frequency))
            );
        }
    }

    #[test]
    fn fractional_and_negative_frequencies_are_accepted() {
        assert!(GenerationParameters::new(16, 0.5).is_ok());
        assert!(GenerationParameters::new(16, -3.0).is_ok());
        assert!(GenerationParameters::new(16, 0.0).is_ok());
    }

    #[test]
    fn half_period_of_single_sample_is_zero() {
        let params = GenerationParameters::new(1, 1.0).unwrap();
        assert_eq!(params.half_period(), 0.0);
        assert_eq!(params.max_value(), 0.0);
    }

    #[test]
    fn default_offsets_are_zero() {
        let offsets = GradientOffsets::default();
        assert_eq!(offsets.green, 0.0);
        assert_eq!(offsets.blue, 0.0);
    }

    #[test]
    fn color_wheel_splits_period_in_thirds() {
        let offsets = GradientOffsets::color_wheel(360);
        assert_eq!(offsets, GradientOffsets::new(120.0, 240.0));

        let offsets = GradientOffsets::color_wheel(256);
        assert!((offsets.green - 85.333).abs() < 0.001);
        assert!((offsets.blue - 170.667).abs() < 0.001);
    }

    #[test]
    fn demo_parameters_are_valid() {
        for params in DEMO_PARAMETERS {
            assert!(params.validate().is_ok());
        }
    }
}
