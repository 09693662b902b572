//! Error types for qubit state math

use thiserror::Error;

/// Errors that can occur while building or transforming a qubit state
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlochError {
    /// A state angle was NaN or infinite
    #[error("Invalid {name} angle: {value} is not a finite number")]
    InvalidAngle { name: &'static str, value: f64 },
}

impl BlochError {
    /// Create an invalid angle error
    pub fn invalid_angle(name: &'static str, value: f64) -> Self {
        Self::InvalidAngle { name, value }
    }
}
