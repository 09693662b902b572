//! Immutable single-qubit states
//!
//! A [`State`] stores a canonical (θ, φ) pair. Its density matrix is
//!
//! ```text
//! ρ = ½ [[1 + cosθ,                cosφ·sinθ − i·sinφ·sinθ],
//!        [cosφ·sinθ + i·sinφ·sinθ,  1 − cosθ               ]]
//! ```
//!
//! Rotations act on ρ (ρ' = R·ρ·R†) and the angles are read back from the
//! rotated matrix: θ from the top-left entry, φ from the phase of the
//! top-right entry. Every operation returns a new state.
//!
//! # Example
//!
//! ```
//! use bloch_core::{State, KET_MINUS, KET_PLUS};
//! use std::f64::consts::PI;
//!
//! let state = State::new(PI / 5.0, PI / 3.0)?;
//! assert!((state.theta() - PI / 5.0).abs() < 1e-12);
//!
//! // Half-turn about Z maps |+⟩ to |−⟩
//! assert!(KET_PLUS.flip_z().approx_eq(&KET_MINUS, 1e-10));
//! # Ok::<(), bloch_core::BlochError>(())
//! ```

use crate::angle::{normalize_mod_2pi, normalize_state};
use crate::bloch_vector::BlochVector;
use crate::error::BlochError;
use crate::matrix::Matrix2;
use crate::rotation::{Axis, RotationOperator};
use crate::Result;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Below this |sinθ| the state is at a pole and φ is fixed to 0
///
/// `acos` cannot resolve θ closer to 0 or π than about √(2·ε) ≈ 2.1e-8, so
/// a state rotated onto a pole reads back with sinθ of that size. The
/// threshold sits above that floor.
pub const POLE_EPSILON: f64 = 1e-7;

/// |0⟩, the north pole
pub const KET_ZERO: State = State::canonical(0.0, 0.0);

/// |1⟩, the south pole
pub const KET_ONE: State = State::canonical(PI, 0.0);

/// |+⟩ = (|0⟩ + |1⟩)/√2, on the +x axis
pub const KET_PLUS: State = State::canonical(FRAC_PI_2, 0.0);

/// |−⟩ = (|0⟩ − |1⟩)/√2, on the −x axis
pub const KET_MINUS: State = State::canonical(FRAC_PI_2, PI);

/// |+i⟩ = (|0⟩ + i|1⟩)/√2, on the +y axis
pub const KET_PLUS_I: State = State::canonical(FRAC_PI_2, FRAC_PI_2);

/// |−i⟩ = (|0⟩ − i|1⟩)/√2, on the −y axis
pub const KET_MINUS_I: State = State::canonical(FRAC_PI_2, 3.0 * FRAC_PI_2);

/// A pure single-qubit state with canonical angles
///
/// Invariant: `0 ≤ theta ≤ π` and `0 ≤ phi < 2π`. The only way in is
/// [`State::new`] (or a rotation of an existing state), both of which
/// normalize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAngles")]
pub struct State {
    theta: f64,
    phi: f64,
}

/// Unvalidated angles as they appear in serialized form
#[derive(Deserialize)]
struct RawAngles {
    theta: f64,
    phi: f64,
}

impl TryFrom<RawAngles> for State {
    type Error = BlochError;

    fn try_from(raw: RawAngles) -> Result<Self> {
        State::new(raw.theta, raw.phi)
    }
}

impl State {
    /// Create a state from any finite (θ, φ) pair
    ///
    /// # Errors
    /// Returns [`BlochError::InvalidAngle`] if either angle is NaN or infinite.
    pub fn new(theta: f64, phi: f64) -> Result<Self> {
        if !theta.is_finite() {
            return Err(BlochError::invalid_angle("theta", theta));
        }
        if !phi.is_finite() {
            return Err(BlochError::invalid_angle("phi", phi));
        }

        let (norm_theta, norm_phi) = normalize_state(theta, phi);
        if norm_theta != theta || norm_phi != phi {
            log::trace!(
                "normalized state angles ({}, {}) -> ({}, {})",
                theta,
                phi,
                norm_theta,
                norm_phi
            );
        }

        Ok(Self::canonical(norm_theta, norm_phi))
    }

    const fn canonical(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Create a state from amplitudes [α, β] where |ψ⟩ = α|0⟩ + β|1⟩
    ///
    /// The amplitudes need not be normalized; global phase is discarded.
    pub fn from_amplitudes(amplitudes: &[Complex64; 2]) -> Result<Self> {
        let (theta, phi) = BlochVector::from_state(amplitudes).to_angles();
        Self::new(theta, phi)
    }

    /// Create a state from a single-qubit density matrix
    ///
    /// # Errors
    /// Returns [`BlochError::InvalidAngle`] if the matrix holds non-finite
    /// entries.
    pub fn from_density(density: &Matrix2) -> Result<Self> {
        let (theta, phi) = Self::angles_from_density(density);
        Self::new(theta, phi)
    }

    /// Polar angle θ ∈ [0, π]
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Azimuthal angle φ ∈ [0, 2π)
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Density matrix ρ = |ψ⟩⟨ψ|
    pub fn density_matrix(&self) -> Matrix2 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let off_re = 0.5 * cos_phi * sin_theta;
        let off_im = 0.5 * sin_phi * sin_theta;

        Matrix2::new([
            [
                Complex64::new(0.5 * (1.0 + cos_theta), 0.0),
                Complex64::new(off_re, -off_im),
            ],
            [
                Complex64::new(off_re, off_im),
                Complex64::new(0.5 * (1.0 - cos_theta), 0.0),
            ],
        ])
    }

    /// Recover (θ, φ) from a density matrix
    ///
    /// θ = arccos(2·Re(ρ₀₀) − 1), with the argument clamped to [−1, 1] so
    /// rounding drift cannot produce NaN. At the poles (|sinθ| below
    /// [`POLE_EPSILON`]) the phase is unobservable and φ = 0. Otherwise
    /// 2·ρ₀₁/sinθ = e^(−iφ), so φ is the imaginary part of the conjugated
    /// logarithm, reduced into [0, 2π).
    pub fn angles_from_density(density: &Matrix2) -> (f64, f64) {
        let cos_theta = (2.0 * density[(0, 0)].re - 1.0).clamp(-1.0, 1.0);
        let theta = cos_theta.acos();
        let sin_theta = theta.sin();

        if sin_theta.abs() < POLE_EPSILON {
            return (theta, 0.0);
        }

        let phase = density[(0, 1)] * 2.0 / sin_theta;
        let phi = phase.ln().conj().im;
        (theta, normalize_mod_2pi(phi))
    }

    /// Amplitudes [cos(θ/2), e^(iφ)·sin(θ/2)]
    pub fn amplitudes(&self) -> [Complex64; 2] {
        let (sin_half, cos_half) = (self.theta / 2.0).sin_cos();
        [
            Complex64::new(cos_half, 0.0),
            Complex64::from_polar(sin_half, self.phi),
        ]
    }

    /// Position on the unit sphere
    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::from_angles(self.theta, self.phi)
    }

    /// Whether two states are the same point on the sphere within `tolerance`
    ///
    /// Compares Bloch vectors, so φ = 0 and φ = 2π − ε are close, and any φ
    /// matches at the poles.
    pub fn approx_eq(&self, other: &State, tolerance: f64) -> bool {
        self.bloch_vector().distance(&other.bloch_vector()) <= tolerance
    }

    /// Apply a rotation operator: ρ' = R·ρ·R†
    ///
    /// # Errors
    /// Returns [`BlochError::InvalidAngle`] if the operator angle is not finite.
    pub fn rotate(&self, operator: &RotationOperator) -> Result<State> {
        if !operator.angle().is_finite() {
            return Err(BlochError::invalid_angle("tau", operator.angle()));
        }
        Ok(self.apply(operator))
    }

    /// Rotate by `tau` radians about X
    pub fn rx(&self, tau: f64) -> Result<State> {
        self.rotate(&RotationOperator::rx(tau))
    }

    /// Rotate by `tau` radians about Y
    pub fn ry(&self, tau: f64) -> Result<State> {
        self.rotate(&RotationOperator::ry(tau))
    }

    /// Rotate by `tau` radians about Z
    pub fn rz(&self, tau: f64) -> Result<State> {
        self.rotate(&RotationOperator::rz(tau))
    }

    /// Half-turn about X (the X gate up to global phase)
    pub fn flip_x(&self) -> State {
        self.apply(&RotationOperator::half_turn(Axis::X))
    }

    /// Half-turn about Y (the Y gate up to global phase)
    pub fn flip_y(&self) -> State {
        self.apply(&RotationOperator::half_turn(Axis::Y))
    }

    /// Half-turn about Z (the Z gate up to global phase)
    pub fn flip_z(&self) -> State {
        self.apply(&RotationOperator::half_turn(Axis::Z))
    }

    /// Rotation with a finite angle; recovered angles are finite as well
    fn apply(&self, operator: &RotationOperator) -> State {
        let rotated = operator.apply(&self.density_matrix());
        let (theta, phi) = Self::angles_from_density(&rotated);
        let (theta, phi) = normalize_state(theta, phi);

        log::trace!(
            "{} maps ({:.6}, {:.6}) -> ({:.6}, {:.6})",
            operator,
            self.theta,
            self.phi,
            theta,
            phi
        );

        Self::canonical(theta, phi)
    }
}

impl Default for State {
    fn default() -> Self {
        KET_ZERO
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State(θ={:.4}, φ={:.4})", self.theta, self.phi)
    }
}
