//! cutplan-core - Core library for 1D stock cutting plans.
//!
//! This library computes economical cutting plans for fixed-length stock
//! material: it validates a raw input record (stock length, prices, kerf
//! width, part lengths), packs the kerf-augmented parts into the fewest
//! stock units with First-Fit-Decreasing, and derives material and
//! cutting costs from the packing.
//!
//! # Example
//!
//! ```
//! use cutplan_core::{plan_cuts, PlanOutcome, RawCutRequest};
//!
//! let raw = RawCutRequest::new(1000.0, 100.0, 10.0, 0.0, vec![600.0, 400.0, 300.0]);
//! match plan_cuts(&raw).unwrap() {
//!     PlanOutcome::Plan(plan) => {
//!         assert_eq!(plan.units_used, 2);
//!         assert_eq!(plan.total_cost, 210.0);
//!     }
//!     PlanOutcome::Invalid(messages) => panic!("unexpected: {messages:?}"),
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod params;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use engine::compute_cut_plan;
pub use error::{ErrorCode, PlanError, Result};
pub use generator::{format_amount, generate_report};
pub use model::{CutPlan, CutRequest, PackedUnit, RawCutRequest};
pub use params::{decode_share_params, encode_share_params};
pub use parser::{parse_number, parse_part_lengths, parse_part_lengths_from_file};
pub use validation::validate;

use serde::{Deserialize, Serialize};

/// Outcome of a calculation attempt.
///
/// Validation failures are data, not errors: the caller is expected to
/// show every message at once. The `Err` arm of [`plan_cuts`] is reserved
/// for faults (see [`PlanError`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// The computed plan.
    Plan(CutPlan),
    /// All validation messages for a rejected request.
    Invalid(Vec<String>),
}

/// Validate a raw record and compute its cutting plan.
///
/// This is the main high-level entry point combining the two core
/// operations:
/// 1. [`validate`] the raw record
/// 2. [`compute_cut_plan`] on the validated request
pub fn plan_cuts(raw: &RawCutRequest) -> Result<PlanOutcome> {
    match validate(raw) {
        Ok(request) => Ok(PlanOutcome::Plan(compute_cut_plan(request)?)),
        Err(messages) => Ok(PlanOutcome::Invalid(messages)),
    }
}
