//! Error types for cutting-plan computation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for planner failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Part list could not be parsed (-3)
    PartsParseError = -3,
    /// Share-parameter string could not be decoded (-4)
    ShareParamError = -4,
    /// Augmented part length exceeds stock capacity (E100)
    PartExceedsStock = 100,
}

/// Main error type for the planner.
///
/// Validation rule failures are not represented here: they are returned as
/// data (a list of messages) by [`crate::validation::validate`] so the
/// caller can display all of them at once. `PlanError` covers parse
/// failures and internal-consistency faults.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Part list is not valid: '{token}' is not a number")]
    InvalidPartsList { token: String },

    #[error("Share parameters are not valid: '{entry}' is not a key=value pair")]
    InvalidShareParam { entry: String },

    #[error(
        "Augmented part length {length} exceeds stock length {capacity}; \
         the request bypassed validation"
    )]
    PartExceedsStock { length: f64, capacity: f64 },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::InvalidPartsList { .. } => ErrorCode::PartsParseError,
            PlanError::InvalidShareParam { .. } => ErrorCode::ShareParamError,
            PlanError::PartExceedsStock { .. } => ErrorCode::PartExceedsStock,
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
