//! Single-qubit rotation operators
//!
//! A rotation by τ about a principal axis is the exponential of the matching
//! Pauli matrix:
//!
//! R_a(τ) = cos(τ/2)·I − i·sin(τ/2)·σ_a
//!
//! which gives
//!
//! ```text
//! RX(τ) = [[cos(τ/2),    -i·sin(τ/2)],
//!          [-i·sin(τ/2),  cos(τ/2)  ]]
//!
//! RY(τ) = [[cos(τ/2), -sin(τ/2)],
//!          [sin(τ/2),  cos(τ/2)]]
//!
//! RZ(τ) = [[e^(-iτ/2), 0       ],
//!          [0,         e^(iτ/2)]]
//! ```
//!
//! These are unitary for every real τ, so R·ρ·R† keeps a density matrix
//! Hermitian with unit trace.

use crate::matrix::Matrix2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Principal axis of the Bloch sphere
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in X, Y, Z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Short gate name ("RX", "RY", "RZ")
    pub fn gate_name(&self) -> &'static str {
        match self {
            Axis::X => "RX",
            Axis::Y => "RY",
            Axis::Z => "RZ",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{}", name)
    }
}

/// Generate rotation-X matrix for a given angle
#[inline]
pub fn rotation_x(tau: f64) -> Matrix2 {
    let (sin_val, cos_val) = (tau / 2.0).sin_cos();

    Matrix2::new([
        [Complex64::new(cos_val, 0.0), Complex64::new(0.0, -sin_val)],
        [Complex64::new(0.0, -sin_val), Complex64::new(cos_val, 0.0)],
    ])
}

/// Generate rotation-Y matrix for a given angle
#[inline]
pub fn rotation_y(tau: f64) -> Matrix2 {
    let (sin_val, cos_val) = (tau / 2.0).sin_cos();

    Matrix2::new([
        [Complex64::new(cos_val, 0.0), Complex64::new(-sin_val, 0.0)],
        [Complex64::new(sin_val, 0.0), Complex64::new(cos_val, 0.0)],
    ])
}

/// Generate rotation-Z matrix for a given angle
#[inline]
pub fn rotation_z(tau: f64) -> Matrix2 {
    let (sin_val, cos_val) = (tau / 2.0).sin_cos();

    Matrix2::new([
        [Complex64::new(cos_val, -sin_val), ZERO],
        [ZERO, Complex64::new(cos_val, sin_val)],
    ])
}

/// A rotation of the Bloch sphere by an angle about one principal axis
///
/// The matrix is built once at construction from one of the three generators,
/// so every operator is unitary by construction.
///
/// # Example
/// ```
/// use bloch_core::{Axis, RotationOperator};
/// use std::f64::consts::PI;
///
/// let rz = RotationOperator::new(Axis::Z, PI / 2.0);
/// assert_eq!(rz.axis(), Axis::Z);
/// assert!(rz.matrix().is_unitary(1e-12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationOperator {
    axis: Axis,
    angle: f64,
    matrix: Matrix2,
}

impl RotationOperator {
    /// Create a rotation by `tau` radians about `axis`
    pub fn new(axis: Axis, tau: f64) -> Self {
        let matrix = match axis {
            Axis::X => rotation_x(tau),
            Axis::Y => rotation_y(tau),
            Axis::Z => rotation_z(tau),
        };
        Self {
            axis,
            angle: tau,
            matrix,
        }
    }

    /// Rotation about X
    #[inline]
    pub fn rx(tau: f64) -> Self {
        Self::new(Axis::X, tau)
    }

    /// Rotation about Y
    #[inline]
    pub fn ry(tau: f64) -> Self {
        Self::new(Axis::Y, tau)
    }

    /// Rotation about Z
    #[inline]
    pub fn rz(tau: f64) -> Self {
        Self::new(Axis::Z, tau)
    }

    /// Half-turn (τ = π) about `axis`
    #[inline]
    pub fn half_turn(axis: Axis) -> Self {
        Self::new(axis, PI)
    }

    /// Rotation axis
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Rotation angle in radians
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The 2×2 unitary
    #[inline]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// The inverse rotation (same axis, opposite angle)
    pub fn inverse(&self) -> Self {
        Self::new(self.axis, -self.angle)
    }

    /// Conjugate transpose of the unitary
    #[inline]
    pub fn adjoint(&self) -> Matrix2 {
        self.matrix.adjoint()
    }

    /// Apply the rotation to a density matrix: R·ρ·R†
    #[inline]
    pub fn apply(&self, density: &Matrix2) -> Matrix2 {
        self.matrix.conjugate(density)
    }
}

impl fmt::Display for RotationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.4})", self.axis.gate_name(), self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const I: Complex64 = Complex64::new(0.0, 1.0);
    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    #[test]
    fn test_zero_rotation_is_identity() {
        for axis in Axis::ALL {
            let op = RotationOperator::new(axis, 0.0);
            assert!(op.matrix().approx_eq(&Matrix2::identity(), 1e-15), "{}", op);
        }
    }

    #[test]
    fn test_rotation_x_pi() {
        // RX(π) = -iX
        let rx = rotation_x(PI);
        assert_relative_eq!(rx[(0, 0)].norm(), 0.0, epsilon = 1e-10);
        assert!((rx[(0, 1)] - (-I)).norm() < 1e-10);
        assert!((rx[(1, 0)] - (-I)).norm() < 1e-10);
        assert_relative_eq!(rx[(1, 1)].norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rotation_x_pi_over_3() {
        let rx = rotation_x(PI / 3.0);
        assert_relative_eq!(rx[(0, 0)].re, (PI / 6.0).cos(), epsilon = 1e-12);
        assert_relative_eq!(rx[(0, 1)].im, -0.5, epsilon = 1e-12);
        assert_relative_eq!(rx[(1, 0)].im, -0.5, epsilon = 1e-12);
        assert_relative_eq!(rx[(1, 1)].re, (PI / 6.0).cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_y_pi() {
        let ry = rotation_y(PI);
        assert_relative_eq!(ry[(0, 0)].re, 0.0, epsilon = 1e-10);
        assert_relative_eq!(ry[(0, 1)].re, -1.0, epsilon = 1e-10);
        assert_relative_eq!(ry[(1, 0)].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(ry[(1, 1)].re, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rotation_z_pi() {
        let rz = rotation_z(PI);
        assert!((rz[(0, 0)] - (-I)).norm() < 1e-10);
        assert!((rz[(1, 1)] - I).norm() < 1e-10);
        assert_eq!(rz[(0, 1)], ZERO);
        assert_eq!(rz[(1, 0)], ZERO);
    }

    #[test]
    fn test_rotation_z_pi_over_3() {
        let rz = rotation_z(PI / 3.0);
        assert_relative_eq!(rz[(0, 0)].re, (PI / 6.0).cos(), epsilon = 1e-12);
        assert_relative_eq!(rz[(0, 0)].im, -(PI / 6.0).sin(), epsilon = 1e-12);
        assert_relative_eq!(rz[(1, 1)].re, (PI / 6.0).cos(), epsilon = 1e-12);
        assert_relative_eq!(rz[(1, 1)].im, (PI / 6.0).sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_operators_are_unitary() {
        for axis in Axis::ALL {
            for step in -8..=8 {
                let op = RotationOperator::new(axis, step as f64 * 0.7);
                assert!(op.matrix().is_unitary(1e-12), "{} not unitary", op);
            }
        }
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        for axis in Axis::ALL {
            let op = RotationOperator::new(axis, 1.3);
            let product = op.matrix().multiply(op.inverse().matrix());
            assert!(product.approx_eq(&Matrix2::identity(), 1e-12));
        }
    }

    #[test]
    fn test_full_turn_is_minus_identity() {
        for axis in Axis::ALL {
            let op = RotationOperator::new(axis, 2.0 * PI);
            assert!(op.matrix().approx_eq(&Matrix2::identity().scale(-ONE), 1e-12));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RotationOperator::rz(PI)), "RZ(3.1416)");
        assert_eq!(format!("{}", Axis::Y), "y");
    }
}
