#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use sine_gradient::{GradientOffsets, SineTable, compose, generate};

// ============================================================================
// Minimal Output Sink
// ============================================================================

/// Discards everything written to it, for measuring rendering overhead
pub struct NullSink;

impl core::fmt::Write for NullSink {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        core::hint::black_box(s);
        Ok(())
    }
}

// ============================================================================
// Test Tables
// ============================================================================

fn exercise<const N: usize>(table: &SineTable<N>) {
    use core::fmt::Write;

    let mut sink = NullSink;

    if let Ok(gray) = compose(table, GradientOffsets::default()) {
        for color in gray.colors() {
            core::hint::black_box(color);
        }
    }

    if let Ok(wheel) = compose(table, GradientOffsets::color_wheel(table.len())) {
        for sample in wheel.iter() {
            core::hint::black_box(sample);
        }
    }

    let _ = write!(sink, "{}", table.hex_rows());
    for byte in table.bytes() {
        core::hint::black_box(byte);
    }
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_tables() {
    // 64-sample table
    if let Ok(table) = generate::<64>(64, 1.0) {
        exercise(&table);
    }

    // 256-sample table, two cycles
    if let Ok(table) = generate::<256>(256, 2.0) {
        exercise(&table);
    }
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_tables();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
