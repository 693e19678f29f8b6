//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Lines (default)
//!
//! ```text
//! ab
//! ba
//! ```
//!
//! ## JSON
//!
//! ```text
//! ["ab","ba"]
//! ```
//!
//! Results are printed in the order the generator returned them, never
//! re-sorted. Summaries and errors go to stderr so stdout can be piped.
//!
//! # Architecture
//!
//! `format_*` functions return strings for testability; `print_*` wrappers
//! do the writing. Format functions are pure.

use crate::config::OutputFormat;
use std::fmt::Display;
use std::io::{self, Write};

pub fn format_anagrams(
    anagrams: &[String],
    format: OutputFormat,
) -> serde_json::Result<Vec<String>> {
    match format {
        OutputFormat::Lines => Ok(anagrams.to_vec()),
        OutputFormat::Json => Ok(vec![serde_json::to_string(anagrams)?]),
    }
}

pub fn format_summary(count: usize) -> String {
    if count == 1 {
        "1 anagram".to_string()
    } else {
        format!("{count} anagrams")
    }
}

pub fn format_error(err: &impl Display) -> String {
    format!("Error: {err}")
}

/// Write results to stdout through a single locked, buffered handle.
pub fn print_anagrams(anagrams: &[String], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in format_anagrams(anagrams, format)? {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

pub fn print_summary(count: usize) {
    eprintln!("{}", format_summary(count));
}

pub fn print_error(err: &impl Display) {
    eprintln!("{}", format_error(err));
}
