//! Share-parameter codec.
//!
//! A request encodes into a short query-style string so a calculation can
//! be shared and re-run elsewhere. Key names are fixed wire format:
//! `ml` stock length, `up` unit price, `cp` cut price, `bw` kerf width,
//! `p` comma-joined part lengths. URL assembly and clipboard handling are
//! the host application's concern; the core only produces and consumes
//! the parameter string itself.

use crate::error::{PlanError, Result};
use crate::model::{CutRequest, RawCutRequest};
use crate::parser::{parse_number, parse_part_lengths};

/// Query key for the stock length.
pub const KEY_STOCK_LENGTH: &str = "ml";
/// Query key for the unit price.
pub const KEY_UNIT_PRICE: &str = "up";
/// Query key for the cut price.
pub const KEY_CUT_PRICE: &str = "cp";
/// Query key for the kerf width.
pub const KEY_KERF_WIDTH: &str = "bw";
/// Query key for the comma-joined part lengths.
pub const KEY_PARTS: &str = "p";

/// Encode a validated request into a share-parameter string.
///
/// Key order is fixed so equal requests encode to equal strings. Values
/// are all plain numbers and commas, which need no percent escaping.
pub fn encode_share_params(request: &CutRequest) -> String {
    let parts = request
        .part_lengths
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}={}&{}={}&{}={}&{}={}&{}={}",
        KEY_STOCK_LENGTH,
        request.stock_length,
        KEY_UNIT_PRICE,
        request.unit_price,
        KEY_CUT_PRICE,
        request.cut_price,
        KEY_KERF_WIDTH,
        request.kerf_width,
        KEY_PARTS,
        parts
    )
}

/// Decode a share-parameter string into a raw request.
///
/// Tolerant where validation can recover: a leading `?` is stripped,
/// unknown keys are ignored, a missing scalar stays `NaN` and a missing
/// part list stays empty, so the validator reports those fields by name.
/// A malformed entry or part token is a parse error, the same category as
/// malformed free-text input.
pub fn decode_share_params(query: &str) -> Result<RawCutRequest> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut raw = RawCutRequest {
        stock_length: f64::NAN,
        unit_price: f64::NAN,
        cut_price: f64::NAN,
        kerf_width: f64::NAN,
        part_lengths: Vec::new(),
    };

    for entry in query.split('&') {
        if entry.is_empty() {
            continue;
        }
        let (key, value) = entry.split_once('=').ok_or_else(|| PlanError::InvalidShareParam {
            entry: entry.to_string(),
        })?;

        match key {
            KEY_STOCK_LENGTH => raw.stock_length = parse_number(value),
            KEY_UNIT_PRICE => raw.unit_price = parse_number(value),
            KEY_CUT_PRICE => raw.cut_price = parse_number(value),
            KEY_KERF_WIDTH => raw.kerf_width = parse_number(value),
            KEY_PARTS => raw.part_lengths = parse_part_lengths(value)?,
            _ => tracing::debug!(key, "ignoring unknown share parameter"),
        }
    }

    Ok(raw)
}
