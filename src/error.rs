//! Error types for galaxy generation.
//!
//! Every failure is a precondition violation detected before any buffer is
//! allocated, so an `Err` always means nothing was produced or mutated.

use thiserror::Error;

/// Result type for galaxy operations.
pub type Result<T> = std::result::Result<T, GalaxyError>;

/// Errors that can occur while generating or recoloring a galaxy.
#[derive(Error, Debug)]
pub enum GalaxyError {
    /// A parameter is outside its valid domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in presets.
        name: &'static str,
        /// What is wrong with the value.
        reason: String,
    },

    /// Point metadata does not match the requested particle count.
    ///
    /// Recoloring needs the metadata of the most recent generation; when the
    /// count changes the field has to be regenerated instead.
    #[error("Point metadata holds {actual} points but parameters ask for {expected}; regenerate instead of recoloring")]
    InvalidState {
        /// Particle count from the parameters.
        expected: usize,
        /// Length of the metadata handed in.
        actual: usize,
    },

    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Failed to read a parameter preset.
    #[error("Failed to read preset: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter preset is not valid JSON for [`GalaxyParams`](crate::GalaxyParams).
    #[error("Failed to parse preset: {0}")]
    Json(#[from] serde_json::Error),
}

impl GalaxyError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GalaxyError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns true for out-of-domain parameter errors.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, GalaxyError::InvalidParameter { .. })
    }

    /// Returns true when metadata and parameters disagree.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, GalaxyError::InvalidState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = GalaxyError::invalid("galaxyRadius", "must be positive, got 0");
        assert!(err.is_invalid_parameter());
        assert_eq!(
            err.to_string(),
            "Invalid parameter `galaxyRadius`: must be positive, got 0"
        );
    }

    #[test]
    fn test_invalid_state_message() {
        let err = GalaxyError::InvalidState {
            expected: 10,
            actual: 4,
        };
        assert!(err.is_invalid_state());
        assert!(err.to_string().contains("holds 4 points"));
    }
}
