//! Free-text part-list parsing.

use std::path::Path;

use crate::error::{PlanError, Result};

/// Parse a free-text part list into lengths.
///
/// Tokens are separated by commas and/or newlines; surrounding whitespace
/// is ignored and blank tokens are skipped, so trailing separators are
/// harmless. Any token that is not a number fails the whole parse: a
/// malformed list cannot proceed to validation.
///
/// An input with no tokens parses to an empty list; validation then
/// reports the empty-part-list rule.
pub fn parse_part_lengths(input: &str) -> Result<Vec<f64>> {
    let mut lengths = Vec::new();

    for token in input.split(|c| c == ',' || c == '\n') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let length: f64 = token.parse().map_err(|_| PlanError::InvalidPartsList {
            token: token.to_string(),
        })?;
        if !length.is_finite() {
            return Err(PlanError::InvalidPartsList {
                token: token.to_string(),
            });
        }
        lengths.push(length);
    }

    Ok(lengths)
}

/// Parse a part list from a file in the same free-text format.
pub fn parse_part_lengths_from_file(path: &Path) -> Result<Vec<f64>> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    parse_part_lengths(&content)
}

/// Leniently parse a scalar input field.
///
/// Returns `NaN` when the text is not a number, so the raw record reaches
/// the validator unchanged and the validator reports the field by name
/// instead of the parse aborting the whole request.
pub fn parse_number(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}
