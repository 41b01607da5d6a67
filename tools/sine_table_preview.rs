#!/usr/bin/env rust-script
//! Color-cycle preview for sine-gradient
//!
//! Generates a sine table for each `(period, frequency)` pair, composes a
//! grayscale and a color-wheel gradient from it, and prints a single HTML page
//! with the gradient strips followed by the trace log and the firmware hex
//! rows for every table.
//!
//! Usage:
//!   cargo run --bin sine_table_preview > preview.html
//!   cargo run --bin sine_table_preview -- 360:1 64:3 > preview.html
//!
//! Without arguments the default color-cycle parameters are used.

use sine_gradient::{
    DEMO_PARAMETERS, GenerationParameters, GradientOffsets, SineTable, TableError, compose,
};
use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::process::ExitCode;

/// Largest period the preview accepts.
const MAX_PERIOD: usize = 4096;

// ============================================================================
// Argument Parsing
// ============================================================================

fn parse_pair(arg: &str) -> Result<GenerationParameters, String> {
    let (period, frequency) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected PERIOD:FREQUENCY, got '{}'", arg))?;
    let period: usize = period
        .parse()
        .map_err(|e| format!("invalid period '{}': {}", period, e))?;
    let frequency: f64 = frequency
        .parse()
        .map_err(|e| format!("invalid frequency '{}': {}", frequency, e))?;
    GenerationParameters::new(period, frequency).map_err(|e| e.to_string())
}

fn parse_args() -> Result<Vec<GenerationParameters>, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(DEMO_PARAMETERS.to_vec());
    }
    args.iter().map(|arg| parse_pair(arg)).collect()
}

// ============================================================================
// Page Rendering
// ============================================================================

fn render_page(batch: &[GenerationParameters]) -> Result<String, Box<dyn Error>> {
    let tables = batch
        .iter()
        .map(|params| SineTable::<MAX_PERIOD>::generate(*params))
        .collect::<Result<Vec<_>, TableError>>()?;

    let mut colors = String::new();
    let mut log = String::new();

    for table in &tables {
        write!(log, "{}", table.trace_log())?;
    }
    log.push_str("--------------------------------------------------\n");

    for table in &tables {
        let params = table.params();
        let gray = compose(table, GradientOffsets::default())?;
        let wheel = compose(table, GradientOffsets::color_wheel(params.period))?;

        write!(colors, "{}{}", gray.html(), wheel.html())?;
        writeln!(log, "p: {}, f: {}", params.period, params.frequency)?;
        write!(log, "{}", table.hex_rows())?;
    }

    Ok(format!(
        "<html>\n<body>\n<div id=\"colors\">{}</div>\n<pre id=\"log\">{}</pre>\n</body>\n</html>\n",
        colors, log
    ))
}

fn main() -> ExitCode {
    let batch = match parse_args() {
        Ok(batch) => batch,
        Err(message) => {
            eprintln!("error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    match render_page(&batch) {
        Ok(page) => {
            print!("{}", page);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_reads_period_and_frequency() {
        let params = parse_pair("64:3").unwrap();
        assert_eq!(params, GenerationParameters::new(64, 3.0).unwrap());
    }

    #[test]
    fn parse_pair_rejects_malformed_input() {
        assert!(parse_pair("64").is_err());
        assert!(parse_pair("x:1").is_err());
        assert!(parse_pair("0:1").is_err());
    }

    #[test]
    fn page_holds_each_table_once() {
        let batch = [
            GenerationParameters::new(4, 1.0).unwrap(),
            GenerationParameters::new(64, 2.0).unwrap(),
        ];
        let page = render_page(&batch).unwrap();

        // two gradients per table
        assert_eq!(page.matches("<div>").count(), 4);
        assert_eq!(page.matches("p: 4, f: 1").count(), 1);
        assert_eq!(page.matches("p: 64, f: 2").count(), 1);
        assert!(page.contains("0 (0.00%): sin(θ:0.00) == 0.00, denormalized == 1.50"));
        assert_eq!(page.matches("0x").count(), 4 + 64);
    }

    #[test]
    fn oversized_period_is_reported() {
        let batch = [GenerationParameters::new(MAX_PERIOD + 1, 1.0).unwrap()];
        let error = render_page(&batch).unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("period {} exceeds table capacity of {}", MAX_PERIOD + 1, MAX_PERIOD)
        );
    }
}
