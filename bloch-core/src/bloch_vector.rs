//! Cartesian view of a qubit state on the Bloch sphere
//!
//! Any pure single-qubit state can be written as:
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! and sits at (sinθ·cosφ, sinθ·sinφ, cosθ) on the unit sphere. Comparing
//! states through this vector sidesteps the 0/2π seam of φ and the undefined
//! φ at the poles.
//!
//! # Example
//!
//! ```
//! use bloch_core::{BlochVector, Complex64};
//! use std::f64::consts::FRAC_1_SQRT_2;
//!
//! let plus = [Complex64::new(FRAC_1_SQRT_2, 0.0), Complex64::new(FRAC_1_SQRT_2, 0.0)];
//! let v = BlochVector::from_state(&plus);
//! assert!((v.x - 1.0).abs() < 1e-10 && v.z.abs() < 1e-10);
//! ```

use crate::angle::normalize_state;
use num_complex::Complex64;
use std::fmt;

/// A point on or inside the unit sphere; +z is |0⟩
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Pauli expectation values of the amplitudes [α, β]
    ///
    /// Unnormalized amplitudes give a vector off the unit sphere.
    pub fn from_state(amplitudes: &[Complex64; 2]) -> Self {
        let [alpha, beta] = *amplitudes;
        let coherence = alpha.conj() * beta;
        Self {
            x: 2.0 * coherence.re,
            y: 2.0 * coherence.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Point on the unit sphere for polar angle θ and azimuthal angle φ
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self {
            x: sin_theta * cos_phi,
            y: sin_theta * sin_phi,
            z: cos_theta,
        }
    }

    /// Spherical angles (θ, φ) of the direction of this vector, canonicalized
    ///
    /// A near-zero vector has no direction and maps to the north pole.
    pub fn to_angles(&self) -> (f64, f64) {
        let r = self.magnitude();

        if r < 1e-10 {
            return (0.0, 0.0);
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        normalize_state(theta, phi)
    }

    /// Length; 1 on the sphere surface
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Whether the vector lies on the surface within `tolerance`
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Straight-line distance to another vector
    pub fn distance(&self, other: &BlochVector) -> f64 {
        BlochVector::new(self.x - other.x, self.y - other.y, self.z - other.z).magnitude()
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
