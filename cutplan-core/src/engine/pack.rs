//! First-Fit-Decreasing bin packing over stock units.

use crate::error::{PlanError, Result};
use crate::model::PackedUnit;

/// Open stock unit tracked during packing.
struct OpenUnit {
    lengths: Vec<f64>,
    remaining: f64,
}

/// Pack augmented lengths into the fewest stock units, First-Fit-Decreasing.
///
/// Lengths are sorted descending, then each is placed into the first open
/// unit (in creation order) with enough remaining capacity; a new unit is
/// opened when none fits. FFD is deterministic and stays within a bounded
/// factor of the optimal unit count (<= 11/9 x optimal + constant).
///
/// Every length must fit one unit on its own; validation guarantees this,
/// so a length exceeding `capacity` is a contract breach and returns
/// [`PlanError::PartExceedsStock`] instead of being dropped.
pub fn pack_first_fit_decreasing(capacity: f64, lengths: &[f64]) -> Result<Vec<PackedUnit>> {
    let mut sorted = lengths.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut units: Vec<OpenUnit> = Vec::new();

    for length in sorted {
        if length > capacity {
            tracing::error!(length, capacity, "augmented part does not fit any stock unit");
            return Err(PlanError::PartExceedsStock { length, capacity });
        }

        match units.iter().position(|unit| unit.remaining >= length) {
            Some(idx) => {
                let unit = &mut units[idx];
                unit.lengths.push(length);
                unit.remaining -= length;
            }
            None => units.push(OpenUnit {
                lengths: vec![length],
                remaining: capacity - length,
            }),
        }
    }

    Ok(units
        .into_iter()
        .map(|unit| PackedUnit {
            lengths: unit.lengths,
        })
        .collect())
}
