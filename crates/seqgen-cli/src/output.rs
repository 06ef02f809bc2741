//! CLI output formatting and export.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigUint;
use serde::Serialize;

/// One collected term, as exported to JSON.
///
/// Term values are serialized as decimal strings since they routinely
/// exceed what JSON numbers can represent exactly.
#[derive(Serialize)]
pub struct TermRecord {
    /// Index of the term within the sequence.
    pub n: u64,
    /// Decimal representation of the term.
    pub term: String,
}

/// Format a term for display, potentially truncating.
#[must_use]
pub fn format_term(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Serialize collected terms to a JSON array.
pub fn terms_to_json(terms: &[(u64, BigUint)]) -> serde_json::Result<String> {
    let records: Vec<TermRecord> = terms
        .iter()
        .map(|(n, term)| TermRecord {
            n: *n,
            term: term.to_string(),
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

/// Write collected terms to a file, one decimal value per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_terms(path: &str, terms: &[(u64, BigUint)]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for (_, term) in terms {
        writeln!(file, "{term}")?;
    }
    Ok(())
}
