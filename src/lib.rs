#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`GenerationParameters`**: The `(period, frequency)` pair a table is built from
//! - **`SineTable`**: A fixed-capacity table of sine samples denormalized onto `[0, period - 1]`
//! - **`TraceEntry`**: The intermediate values behind one table sample, for diagnostics
//! - **`GradientOffsets`**: Green and blue channel shifts, in samples, relative to red
//! - **`Gradient`**: Three phase-shifted channel reads into one borrowed `SineTable`
//! - **`HexRows`** / **`TraceLog`** / **`HtmlGradient`**: Allocation-free text renderings
//!
//! Gradient colors are exposed as `Srgb<f32>` (0.0-1.0 range), normalized by
//! `period - 1`. Firmware tables are emitted as bytes scaled onto `0..=255`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod types;
pub mod table;
pub mod gradient;
pub mod render;

pub use types::{DEMO_PARAMETERS, GenerationParameters, GradientOffsets, Parameter, TableError};
pub use table::{SineTable, TraceEntry, generate};
pub use gradient::{Gradient, GradientSample, compose, wrap_index};
pub use render::{HEX_ROW_WIDTH, HexRows, HtmlGradient, TraceLog, to_byte};
