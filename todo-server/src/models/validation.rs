//! Validation error types

use std::fmt;

use super::Status;

/// Validation error for todo payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value is not one of the allowed variants
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidVariant { field, value } => {
                write!(
                    f,
                    "invalid {} value: '{}' (expected one of: {})",
                    field,
                    value,
                    Status::allowed().join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
