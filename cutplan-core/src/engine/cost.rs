//! Cost derivation from a finished packing.

use serde::{Deserialize, Serialize};

use crate::model::PackedUnit;

/// Costs derived from a packing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Unit count x unit price.
    pub material_cost: f64,
    /// Total separating cuts across all units.
    pub cut_count: usize,
    /// Cut count x cut price.
    pub cut_cost: f64,
    /// Material cost plus cutting cost.
    pub total_cost: f64,
}

/// Derive material and cutting costs from packed units.
///
/// Pure function of the packing: material cost counts consumed units, and
/// each non-empty unit contributes part count minus one separating cuts.
pub fn derive_costs(units: &[PackedUnit], unit_price: f64, cut_price: f64) -> CostSummary {
    let material_cost = units.len() as f64 * unit_price;
    let cut_count: usize = units.iter().map(|unit| unit.cut_count()).sum();
    let cut_cost = cut_count as f64 * cut_price;

    CostSummary {
        material_cost,
        cut_count,
        cut_cost,
        total_cost: material_cost + cut_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit(lengths: &[f64]) -> PackedUnit {
        PackedUnit {
            lengths: lengths.to_vec(),
        }
    }

    // ==================== derive_costs tests ====================

    #[test]
    fn test_costs_empty_packing() {
        let costs = derive_costs(&[], 100.0, 10.0);
        assert_eq!(costs.material_cost, 0.0);
        assert_eq!(costs.cut_count, 0);
        assert_eq!(costs.total_cost, 0.0);
    }

    #[test]
    fn test_costs_single_part_unit_needs_no_cut() {
        let costs = derive_costs(&[unit(&[600.0])], 100.0, 10.0);
        assert_eq!(costs.material_cost, 100.0);
        assert_eq!(costs.cut_count, 0);
        assert_eq!(costs.cut_cost, 0.0);
        assert_eq!(costs.total_cost, 100.0);
    }

    #[test]
    fn test_costs_cut_count_is_parts_minus_one_per_unit() {
        let units = [unit(&[600.0, 400.0]), unit(&[300.0])];
        let costs = derive_costs(&units, 100.0, 10.0);
        assert_eq!(costs.cut_count, 1);
        assert_eq!(costs.material_cost, 200.0);
        assert_eq!(costs.cut_cost, 10.0);
        assert_eq!(costs.total_cost, 210.0);
    }

    #[test]
    fn test_costs_multiple_cuts() {
        let units = [unit(&[503.0, 503.0]), unit(&[503.0, 503.0])];
        let costs = derive_costs(&units, 50.0, 5.0);
        assert_eq!(costs.cut_count, 2);
        assert_eq!(costs.material_cost, 100.0);
        assert_eq!(costs.cut_cost, 10.0);
        assert_eq!(costs.total_cost, 110.0);
    }

    #[test]
    fn test_costs_zero_prices() {
        let units = [unit(&[600.0, 300.0])];
        let costs = derive_costs(&units, 0.0, 0.0);
        assert_eq!(costs.total_cost, 0.0);
    }
}
