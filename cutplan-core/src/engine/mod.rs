//! Packing and costing engine.
//!
//! Consumes a validated [`CutRequest`], packs the kerf-augmented part
//! lengths into stock units with First-Fit-Decreasing, and derives the
//! material and cutting costs from the packing.

mod cost;
mod pack;

pub use cost::{derive_costs, CostSummary};
pub use pack::pack_first_fit_decreasing;

use crate::error::Result;
use crate::model::{CutPlan, CutRequest};

/// Compute the full cutting plan for a validated request.
///
/// Deterministic: the same request always yields the same plan. The only
/// failure mode is an augmented part length exceeding the stock length,
/// which validation rules out; reaching that error means the request
/// bypassed [`crate::validation::validate`] and is reported as a fault
/// rather than silently dropping the part.
pub fn compute_cut_plan(request: CutRequest) -> Result<CutPlan> {
    let augmented = request.augmented_lengths();
    let units = pack_first_fit_decreasing(request.stock_length, &augmented)?;

    let costs = derive_costs(&units, request.unit_price, request.cut_price);

    tracing::debug!(
        units_used = units.len(),
        cut_count = costs.cut_count,
        total_cost = costs.total_cost,
        "computed cutting plan"
    );

    Ok(CutPlan {
        units_used: units.len(),
        material_cost: costs.material_cost,
        cut_count: costs.cut_count,
        cut_cost: costs.cut_cost,
        total_cost: costs.total_cost,
        units,
        request,
    })
}
