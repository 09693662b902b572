//! Error types for scene configuration and layout

use bloch_core::BlochError;
use thiserror::Error;

/// Errors that can occur while loading a configuration or laying out a scene
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// The configuration could not be parsed or has an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The drawing size is not a positive finite number
    #[error("Invalid size: {0} (must be a positive finite number)")]
    InvalidSize(f64),

    /// The configured qubit state was rejected
    #[error("State error: {0}")]
    State(#[from] BlochError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_error() {
        let err = SceneError::InvalidSize(-4.0);
        assert_eq!(
            format!("{}", err),
            "Invalid size: -4 (must be a positive finite number)"
        );
    }

    #[test]
    fn test_state_error_conversion() {
        let err: SceneError = BlochError::invalid_angle("theta", f64::NAN).into();
        assert!(matches!(err, SceneError::State(_)));
        assert!(format!("{}", err).starts_with("State error: Invalid theta angle"));
    }
}
