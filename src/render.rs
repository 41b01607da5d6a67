//! Text renderings of tables and gradients.
//!
//! Display adapters that write straight into any `core::fmt::Write` sink,
//! so firmware tables and previews can be produced without allocation:
//!
//! - [`HexRows`]: byte-scaled samples as `0x..,` literals, 32 per row, each
//!   row ending in a macro line continuation
//! - [`TraceLog`]: one [`TraceEntry`](crate::TraceEntry) line per sample
//! - [`HtmlGradient`]: one colored block character per gradient element

use crate::gradient::Gradient;
use crate::table::SineTable;
use core::fmt;
use palette::Srgb;

/// Number of hex literals per row of [`HexRows`] output.
pub const HEX_ROW_WIDTH: usize = 32;

/// Scales `value` from `[0, max]` onto a byte.
///
/// The result is clamped to `0..=255` and truncated toward zero. A zero
/// `max` (single-sample table) maps every value to 0.
#[inline]
pub fn to_byte(value: f64, max: f64) -> u8 {
    if max.is_nan() || max <= 0.0 {
        return 0;
    }
    (value / max * 255.0).clamp(0.0, 255.0) as u8
}

/// Writes a table as rows of hex byte literals.
///
/// Every row holds [`HEX_ROW_WIDTH`] literals except the last, which holds
/// whatever remains when the period is not a multiple of the row width. The
/// short row is not padded, so the emitted array has exactly `period` entries.
#[derive(Debug, Clone, Copy)]
pub struct HexRows<'a, const N: usize> {
    table: &'a SineTable<N>,
}

impl<const N: usize> fmt::Display for HexRows<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.table.max_value();
        for row in self.table.as_slice().chunks(HEX_ROW_WIDTH) {
            for &value in row {
                write!(f, "0x{:02x},", to_byte(value, max))?;
            }
            f.write_str("    \\\n")?;
        }
        Ok(())
    }
}

/// Writes the derivation of every table sample, one line each.
#[derive(Debug, Clone, Copy)]
pub struct TraceLog<'a, const N: usize> {
    table: &'a SineTable<N>,
}

impl<const N: usize> fmt::Display for TraceLog<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.table.trace() {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Writes a gradient as a `<div>` of colored block characters.
///
/// Each block carries its raw channel values in a class name and its color
/// as a `#rrggbb` attribute built from [`to_byte`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlGradient<'g, 't, const N: usize> {
    gradient: &'g Gradient<'t, N>,
}

impl<const N: usize> fmt::Display for HtmlGradient<'_, '_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.gradient.table().max_value();
        f.write_str("<div>")?;
        for sample in self.gradient.iter() {
            let color: Srgb<u8> = Srgb::new(
                to_byte(sample.red, max),
                to_byte(sample.green, max),
                to_byte(sample.blue, max),
            );
            write!(
                f,
                "<font class=\"r-{}-g-{}-b-{}\" color=\"#{:x}\">&#9608;</font>",
                sample.red, sample.green, sample.blue, color
            )?;
        }
        f.write_str("</div>")
    }
}

impl<const N: usize> SineTable<N> {
    /// Renders the table as firmware hex rows.
    pub fn hex_rows(&self) -> HexRows<'_, N> {
        HexRows { table: self }
    }

    /// Renders the per-sample trace log.
    pub fn trace_log(&self) -> TraceLog<'_, N> {
        TraceLog { table: self }
    }

    /// Returns every sample scaled to a byte.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let max = self.max_value();
        self.iter().map(move |value| to_byte(value, max))
    }
}

impl<'t, const N: usize> Gradient<'t, N> {
    /// Renders the gradient as an HTML color strip.
    pub fn html(&self) -> HtmlGradient<'_, 't, N> {
        HtmlGradient { gradient: self }
    }
}
