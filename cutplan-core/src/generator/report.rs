//! Plain-text report generator for cutting plans.

use std::fmt::Write;

use crate::config::MIN_REPORTABLE_OFFCUT;
use crate::model::CutPlan;

/// Generate a plain-text report for a plan.
///
/// A summary block is followed by one line per stock unit listing the
/// placed lengths (kerf included), the consumed length, and the offcut
/// with its share of the stock length.
pub fn generate_report(plan: &CutPlan) -> String {
    let mut output = String::new();
    let request = &plan.request;

    writeln!(
        output,
        "Stock length: {} mm, kerf width: {} mm",
        request.stock_length, request.kerf_width
    )
    .unwrap();
    writeln!(output, "Stock units required: {}", plan.units_used).unwrap();
    writeln!(output, "Material cost: {}", format_amount(plan.material_cost)).unwrap();
    writeln!(output, "Cuts required: {}", plan.cut_count).unwrap();
    writeln!(output, "Cutting cost: {}", format_amount(plan.cut_cost)).unwrap();
    writeln!(output, "Total cost: {}", format_amount(plan.total_cost)).unwrap();
    writeln!(output).unwrap();

    for (idx, unit) in plan.units.iter().enumerate() {
        let lengths = unit
            .lengths
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let mut offcut = unit.offcut(request.stock_length);
        if offcut < MIN_REPORTABLE_OFFCUT {
            offcut = 0.0;
        }

        writeln!(
            output,
            "Unit {}: {} (used {:.1} mm, offcut {:.1} mm, {:.1}%)",
            idx + 1,
            lengths,
            unit.used_length(),
            offcut,
            unit.offcut_ratio(request.stock_length) * 100.0
        )
        .unwrap();
    }

    output
}

/// Format an amount with thousands separators.
///
/// Whole amounts print without decimals; anything else prints with two.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 0 {
        write!(out, ".{:02}", frac).unwrap();
    }
    out
}
