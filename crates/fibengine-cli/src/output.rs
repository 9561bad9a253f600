//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Format a decimal result for display, truncating long values unless verbose.
#[must_use]
pub fn format_result(digits: &str, verbose: bool) -> String {
    if !verbose && digits.len() > 100 {
        format!(
            "{}...{} ({} digits)",
            &digits[..50],
            &digits[digits.len() - 50..],
            digits.len()
        )
    } else {
        digits.to_string()
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

/// Write the decimal digits of a result to a file.
pub fn write_to_file(path: impl AsRef<Path>, digits: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{digits}")?;
    Ok(())
}
