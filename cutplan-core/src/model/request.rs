//! Request records: the raw input and its validated form.

use serde::{Deserialize, Serialize};

/// Unvalidated input record for a cutting-plan calculation.
///
/// Numeric fields carry whatever the input source produced: a field that
/// could not be parsed as a number is `NaN` (see
/// [`crate::parser::parse_number`]), and the part list may be empty.
/// Validation turns this into a [`CutRequest`] or a list of messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCutRequest {
    /// Length of one stock unit.
    pub stock_length: f64,
    /// Price per stock unit consumed.
    pub unit_price: f64,
    /// Price per saw cut performed.
    pub cut_price: f64,
    /// Material width lost per cut.
    pub kerf_width: f64,
    /// Requested part lengths, without kerf.
    pub part_lengths: Vec<f64>,
}

impl RawCutRequest {
    /// Create a raw request from already-parsed values.
    pub fn new(
        stock_length: f64,
        unit_price: f64,
        cut_price: f64,
        kerf_width: f64,
        part_lengths: Vec<f64>,
    ) -> Self {
        Self {
            stock_length,
            unit_price,
            cut_price,
            kerf_width,
            part_lengths,
        }
    }
}

/// Validated input for the packing and costing engine.
///
/// Produced by [`crate::validation::validate`]; fields satisfy the
/// validation contract: all numbers finite, `stock_length > 0`, prices and
/// kerf non-negative, part list non-empty with every length positive and
/// `length + kerf_width <= stock_length`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    /// Length of one stock unit.
    pub stock_length: f64,
    /// Price per stock unit consumed.
    pub unit_price: f64,
    /// Price per saw cut performed.
    pub cut_price: f64,
    /// Material width lost per cut.
    pub kerf_width: f64,
    /// Requested part lengths, without kerf.
    pub part_lengths: Vec<f64>,
}

impl CutRequest {
    /// Get each part length with the kerf width added.
    ///
    /// Freeing a part from the stock consumes one kerf of material, so the
    /// planner reserves that width per part rather than per cut edge. This
    /// slightly overestimates consumption for multi-part units; it is the
    /// established cost contract and changing it would change every plan.
    pub fn augmented_lengths(&self) -> Vec<f64> {
        self.part_lengths
            .iter()
            .map(|l| l + self.kerf_width)
            .collect()
    }

    /// Number of requested parts.
    pub fn part_count(&self) -> usize {
        self.part_lengths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_augmented_lengths() {
        let request = CutRequest {
            stock_length: 2000.0,
            unit_price: 50.0,
            cut_price: 5.0,
            kerf_width: 3.0,
            part_lengths: vec![500.0, 500.0],
        };
        assert_eq!(request.augmented_lengths(), vec![503.0, 503.0]);
    }

    #[test]
    fn test_augmented_lengths_zero_kerf() {
        let request = CutRequest {
            stock_length: 1000.0,
            kerf_width: 0.0,
            part_lengths: vec![600.0, 400.0],
            ..Default::default()
        };
        assert_eq!(request.augmented_lengths(), vec![600.0, 400.0]);
    }

    #[test]
    fn test_part_count() {
        let request = CutRequest {
            part_lengths: vec![100.0, 200.0, 300.0],
            ..Default::default()
        };
        assert_eq!(request.part_count(), 3);
    }
}
