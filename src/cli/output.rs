//! Terminal output formatting
//!
//! Diagnostics go to stderr with colored prefixes (respects NO_COLOR,
//! CLICOLOR, CLICOLOR_FORCE automatically). Data goes to the given writer.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::application::ApplicationError;
use crate::cli::CliResult;
use crate::infrastructure::InfraError;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print plain line (progress messages, banners)
pub fn line<W: Write>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> CliResult<()> {
    writeln!(out, "{}", msg).map_err(|e| InfraError::io("write stdout", e))?;
    Ok(())
}

/// Print value as pretty JSON (2-space indent)
pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(ApplicationError::Encode)?;
    line(out, &text)
}

/// Shortest round-trip form of `value`, switching to exponent notation from
/// 1e21 up and below 1e-6 (`1e+21`, `1.5e-7`). Zero prints as `0`.
pub fn number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    format!("{value}")
}
