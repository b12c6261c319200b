//! Error types for the fallible setup paths.
//!
//! Expected in-game conditions (nothing to attack, no eligible station) are
//! not errors: they come back as `false` or `None`. Only configuration and
//! scenario construction can fail.

use thiserror::Error;

/// Invalid engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum search depth must be at least 1")]
    ZeroDepth,

    #[error("minimum search depth {min} exceeds maximum {max}")]
    DepthRange { min: u32, max: u32 },

    #[error("attack memory capacity must be at least 1")]
    ZeroMemory,
}

/// Invalid scenario setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("scenario has no stations")]
    Empty,

    #[error("duplicate station name: {0}")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::DepthRange { min: 5, max: 3 };
        assert_eq!(err.to_string(), "minimum search depth 5 exceeds maximum 3");

        let err = ScenarioError::DuplicateName("Alpha".to_string());
        assert_eq!(err.to_string(), "duplicate station name: Alpha");
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::ZeroMemory.to_string(),
            "attack memory capacity must be at least 1"
        );
        assert_eq!(
            ConfigError::ZeroDepth.to_string(),
            "minimum search depth must be at least 1"
        );
    }
}
