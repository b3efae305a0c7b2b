//! Validation rules turning a raw record into a computable request.

use crate::model::{CutRequest, RawCutRequest};

/// Validate a raw request record.
///
/// Every rule is evaluated so the caller can show all problems at once;
/// the returned messages are in rule order. The per-entry part checks run
/// only once the part list itself is present, and the feasibility check
/// only once every entry is a positive number.
///
/// On success the values are frozen into a [`CutRequest`] satisfying the
/// engine's preconditions, in particular that every part plus the kerf
/// width fits a single stock unit.
pub fn validate(raw: &RawCutRequest) -> Result<CutRequest, Vec<String>> {
    let mut messages = Vec::new();

    if !raw.stock_length.is_finite() || raw.stock_length <= 0.0 {
        messages.push("Stock length must be a positive number".to_string());
    }
    if !raw.unit_price.is_finite() || raw.unit_price < 0.0 {
        messages.push("Unit price must be zero or a positive number".to_string());
    }
    if !raw.cut_price.is_finite() || raw.cut_price < 0.0 {
        messages.push("Cut price must be zero or a positive number".to_string());
    }
    if !raw.kerf_width.is_finite() || raw.kerf_width < 0.0 {
        messages.push("Kerf width must be zero or a positive number".to_string());
    }

    if raw.part_lengths.is_empty() {
        messages.push("Part list must not be empty".to_string());
    } else if raw
        .part_lengths
        .iter()
        .any(|l| !l.is_finite() || *l <= 0.0)
    {
        messages.push("Every part length must be a positive number".to_string());
    } else if raw
        .part_lengths
        .iter()
        .any(|l| l + raw.kerf_width > raw.stock_length)
    {
        messages.push(format!(
            "One or more parts exceed the stock length ({} mm) once the kerf width ({} mm) is added",
            raw.stock_length, raw.kerf_width
        ));
    }

    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(CutRequest {
        stock_length: raw.stock_length,
        unit_price: raw.unit_price,
        cut_price: raw.cut_price,
        kerf_width: raw.kerf_width,
        part_lengths: raw.part_lengths.clone(),
    })
}
