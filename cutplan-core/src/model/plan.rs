//! Plan records: one packed stock unit and the full costed plan.

use serde::{Deserialize, Serialize};

use super::CutRequest;

/// Augmented part lengths assigned to one stock unit, in placement order.
///
/// Each entry is `part length + kerf width`. Their sum never exceeds the
/// stock length of the request that produced the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackedUnit {
    /// Augmented lengths placed in this unit.
    pub lengths: Vec<f64>,
}

impl PackedUnit {
    /// Create a unit holding its first placed length.
    pub fn new(length: f64) -> Self {
        Self {
            lengths: vec![length],
        }
    }

    /// Total stock length consumed by the placed parts.
    pub fn used_length(&self) -> f64 {
        self.lengths.iter().sum()
    }

    /// Number of parts in this unit.
    pub fn part_count(&self) -> usize {
        self.lengths.len()
    }

    /// Number of separating cuts needed to free the parts.
    ///
    /// Freeing N parts from one stock length takes N-1 cuts.
    pub fn cut_count(&self) -> usize {
        self.lengths.len().saturating_sub(1)
    }

    /// Unused remainder (offcut) given the stock length.
    pub fn offcut(&self, stock_length: f64) -> f64 {
        stock_length - self.used_length()
    }

    /// Offcut as a fraction of the stock length, in 0..=1.
    pub fn offcut_ratio(&self, stock_length: f64) -> f64 {
        if stock_length > 0.0 {
            (self.offcut(stock_length) / stock_length).max(0.0)
        } else {
            0.0
        }
    }
}

/// Complete costed cutting plan for one request.
///
/// A pure value object created fresh per calculation. The originating
/// request is carried along so the caller can round-trip the inputs, e.g.
/// into a share-parameter string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Number of stock units consumed.
    pub units_used: usize,
    /// `units_used` x unit price.
    pub material_cost: f64,
    /// Total separating cuts across all units.
    pub cut_count: usize,
    /// `cut_count` x cut price.
    pub cut_cost: f64,
    /// Material cost plus cutting cost.
    pub total_cost: f64,
    /// Per-unit part allocation.
    pub units: Vec<PackedUnit>,
    /// The validated request this plan was computed from.
    pub request: CutRequest,
}
