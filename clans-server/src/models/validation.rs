//! Validation error types

use std::fmt;

/// Validation error for clan input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing, empty, or the body could not be read at all
    Required { field: &'static str },

    /// Field is present but is not a JSON string
    NotAString { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "Clan {} is required", field),
            Self::NotAString { field } => write!(f, "Clan {} must be a string", field),
        }
    }
}

impl std::error::Error for ValidationError {}
