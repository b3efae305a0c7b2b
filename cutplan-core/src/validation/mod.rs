//! Input validation for cutting-plan requests.

mod validate;

pub use validate::validate;
