//! Output generation for finished cutting plans.

mod report;

pub use report::{format_amount, generate_report};
