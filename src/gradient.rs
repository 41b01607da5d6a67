//! Phase-shifted RGB gradients over a sine table.
//!
//! A [`Gradient`] reads all three color channels from one [`SineTable`],
//! shifting the green and blue reads by [`GradientOffsets`]. It stores only
//! the borrowed table and the offsets; samples are resolved on access.

use crate::table::SineTable;
use crate::types::{GradientOffsets, Parameter, TableError};
use palette::Srgb;

/// One gradient element: the three channel values read from the table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GradientSample {
    /// Red channel, read at the element's own index.
    pub red: f64,

    /// Green channel, read at the index shifted by the green offset.
    pub green: f64,

    /// Blue channel, read at the index shifted by the blue offset.
    pub blue: f64,
}

/// Maps a real-valued table position onto `[0, len)`.
///
/// The position is rounded to the nearest integer (halves away from zero) and
/// then reduced with a Euclidean modulo, so negative positions wrap from the
/// end of the table.
///
/// # Errors
/// * `InvalidParameter(Table)` - `len` is zero
/// * `InvalidParameter(Offset)` - `position` is NaN or infinite
pub fn wrap_index(position: f64, len: usize) -> Result<usize, TableError> {
    if len == 0 {
        return Err(TableError::InvalidParameter(Parameter::Table));
    }
    if !position.is_finite() {
        return Err(TableError::InvalidParameter(Parameter::Offset));
    }
    Ok(wrap(position, len))
}

#[inline]
fn wrap(position: f64, len: usize) -> usize {
    // Reduce in f64 so positions beyond the i64 range still wrap exactly.
    let len = len as f64;
    let remainder = libm::fmod(libm::round(position), len);
    let wrapped = if remainder < 0.0 { remainder + len } else { remainder };
    wrapped as usize
}

/// A repeating color cycle derived from a single sine table.
///
/// Element `i` is `(table[i], table[i + green], table[i + blue])` with the
/// shifted positions wrapped around the table length.
///
/// # Type Parameters
/// * `'t` - Lifetime of the source table borrow
/// * `N` - Capacity of the source table
#[derive(Debug, Clone, Copy)]
pub struct Gradient<'t, const N: usize> {
    table: &'t SineTable<N>,
    offsets: GradientOffsets,
}

impl<'t, const N: usize> Gradient<'t, N> {
    /// Composes a gradient from `table` with the given channel offsets.
    ///
    /// # Errors
    /// * `InvalidParameter(Table)` - The table is empty
    /// * `InvalidParameter(Offset)` - An offset is NaN or infinite
    pub fn new(table: &'t SineTable<N>, offsets: GradientOffsets) -> Result<Self, TableError> {
        if table.is_empty() {
            return Err(TableError::InvalidParameter(Parameter::Table));
        }
        if !offsets.green.is_finite() || !offsets.blue.is_finite() {
            return Err(TableError::InvalidParameter(Parameter::Offset));
        }
        Ok(Self { table, offsets })
    }

    /// Number of elements, equal to the table length.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; composition rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the source table.
    pub fn table(&self) -> &'t SineTable<N> {
        self.table
    }

    /// Returns the channel offsets.
    pub fn offsets(&self) -> GradientOffsets {
        self.offsets
    }

    /// Table indices read for the red, green and blue channels of element `index`.
    pub fn indices(&self, index: usize) -> Option<(usize, usize, usize)> {
        let len = self.len();
        if index >= len {
            return None;
        }
        let position = index as f64;
        Some((
            index,
            wrap(position + self.offsets.green, len),
            wrap(position + self.offsets.blue, len),
        ))
    }

    /// Returns element `index`, if in range.
    pub fn get(&self, index: usize) -> Option<GradientSample> {
        let (r, g, b) = self.indices(index)?;
        Some(GradientSample {
            red: self.table[r],
            green: self.table[g],
            blue: self.table[b],
        })
    }

    /// Iterates over all elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = GradientSample> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }

    /// Returns element `index` as a color with channels normalized to 0.0-1.0.
    ///
    /// Channel values are divided by `period - 1`. A single-sample table has
    /// no range to normalize over and yields black.
    pub fn color(&self, index: usize) -> Option<Srgb> {
        let sample = self.get(index)?;
        let max = self.table.max_value();
        let normalize = |value: f64| -> f32 {
            if max <= 0.0 {
                0.0
            } else {
                (value / max).clamp(0.0, 1.0) as f32
            }
        };
        Some(Srgb::new(
            normalize(sample.red),
            normalize(sample.green),
            normalize(sample.blue),
        ))
    }

    /// Iterates over all elements as normalized colors.
    pub fn colors(&self) -> impl Iterator<Item = Srgb> + '_ {
        (0..self.len()).filter_map(|index| self.color(index))
    }
}

/// Composes a gradient from `table`.
///
/// Pass `GradientOffsets::default()` for three identical channels or
/// `GradientOffsets::color_wheel(period)` for a 120° RGB cycle.
pub fn compose<const N: usize>(
    table: &SineTable<N>,
    offsets: GradientOffsets,
) -> Result<Gradient<'_, N>, TableError> {
    Gradient::new(table, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::generate;

    #[test]
    fn wrap_index_rejects_empty_length() {
        assert_eq!(
            wrap_index(3.0, 0),
            Err(TableError::InvalidParameter(Parameter::Table))
        );
    }

    #[test]
    fn wrap_index_rejects_non_finite_position() {
        assert_eq!(
            wrap_index(f64::NAN, 4),
            Err(TableError::InvalidParameter(Parameter::Offset))
        );
    }

    #[test]
    fn wrap_index_is_euclidean() {
        assert_eq!(wrap_index(-1.0, 4), Ok(3));
        assert_eq!(wrap_index(-5.0, 4), Ok(3));
        assert_eq!(wrap_index(9.0, 4), Ok(1));
    }

    #[test]
    fn wrap_index_rounds_halves_away_from_zero() {
        assert_eq!(wrap_index(1.5, 8), Ok(2));
        assert_eq!(wrap_index(1.49, 8), Ok(1));
        assert_eq!(wrap_index(-0.5, 8), Ok(7));
    }

    #[test]
    fn wrap_index_handles_positions_beyond_integer_range() {
        // 1e19 = 2^19 · 5^19, a multiple of 256
        assert_eq!(wrap_index(1e19, 256), Ok(0));
        assert_eq!(wrap_index(-1e19, 256), Ok(0));
        assert_eq!(wrap_index(1e19 + 2048.0, 256), Ok(0));
        assert_eq!(wrap_index(f64::MAX, 3), Ok((f64::MAX % 3.0) as usize));
    }

    #[test]
    fn huge_offsets_compose_within_table() {
        let table = generate::<256>(256, 1.0).unwrap();
        let gradient = compose(&table, GradientOffsets::new(1e19, -1e19)).unwrap();
        // index + 1e19 rounds back to 1e19 at this magnitude
        assert_eq!(gradient.indices(5), Some((5, 0, 0)));
        assert!(gradient.get(5).is_some());
    }

    #[test]
    fn indices_out_of_range_are_none() {
        let table = generate::<4>(4, 1.0).unwrap();
        let gradient = compose(&table, GradientOffsets::default()).unwrap();
        assert_eq!(gradient.indices(4), None);
        assert_eq!(gradient.get(4), None);
        assert_eq!(gradient.color(4), None);
    }

    #[test]
    fn infinite_offset_is_rejected() {
        let table = generate::<4>(4, 1.0).unwrap();
        let result = compose(&table, GradientOffsets::new(0.0, f64::INFINITY));
        assert!(matches!(
            result,
            Err(TableError::InvalidParameter(Parameter::Offset))
        ));
    }
}
