//! Single-qubit state math for Bloch sphere rendering
//!
//! This crate provides the quantum side of a Bloch sphere view:
//! - [`angle`]: degree/radian conversion and canonical (θ, φ) normalization
//! - [`Matrix2`]: fixed-size 2×2 complex matrices
//! - [`RotationOperator`]: the Rx, Ry and Rz unitaries
//! - [`State`]: an immutable, normalized qubit state with density-matrix form
//! - [`BlochVector`]: the Cartesian view of a state on the unit sphere
//!
//! # Example
//! ```
//! use bloch_core::{State, KET_ONE, KET_ZERO};
//!
//! // A π rotation about X takes |0⟩ to |1⟩
//! let flipped = KET_ZERO.flip_x();
//! assert!(flipped.approx_eq(&KET_ONE, 1e-10));
//!
//! // Out-of-range angles are folded back onto the sphere
//! let state = State::new(4.0 * std::f64::consts::PI / 3.0, 0.0).unwrap();
//! assert!(state.theta() <= std::f64::consts::PI);
//! ```

pub mod angle;
pub mod bloch_vector;
pub mod error;
pub mod matrix;
pub mod rotation;
pub mod state;

// Re-exports for convenience
pub use bloch_vector::BlochVector;
pub use error::BlochError;
pub use matrix::Matrix2;
pub use num_complex::Complex64;
pub use rotation::{Axis, RotationOperator};
pub use state::{State, KET_MINUS, KET_MINUS_I, KET_ONE, KET_PLUS, KET_PLUS_I, KET_ZERO};

/// Type alias for results in bloch-core
pub type Result<T> = std::result::Result<T, BlochError>;
