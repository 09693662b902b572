//! Three-axis rotation of points on the sphere
//!
//! Points are (λ, φ) pairs in radians: longitude and latitude. The rotation
//! is applied in two stages:
//!
//! 1. yaw is added to the longitude, wrapping the result into [−π, π];
//! 2. pitch tilts the sphere about the axis through (λ = ±90°, φ = 0) and
//!    roll spins it about the viewing axis.
//!
//! This is the same convention as d3-geo's `rotate([yaw, pitch, roll])`, so
//! an orientation of (20°, 20°, 0°) shows the sphere slightly from above
//! and turned to the left.

use std::f64::consts::{PI, TAU};

/// A precomputed sphere rotation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereRotation {
    delta_lambda: f64,
    cos_pitch: f64,
    sin_pitch: f64,
    cos_roll: f64,
    sin_roll: f64,
    identity: bool,
}

impl SphereRotation {
    /// Rotation by yaw, pitch and roll, all in radians
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        let delta_lambda = yaw % TAU;
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        let (sin_roll, cos_roll) = roll.sin_cos();

        Self {
            delta_lambda,
            cos_pitch,
            sin_pitch,
            cos_roll,
            sin_roll,
            identity: delta_lambda == 0.0 && pitch == 0.0 && roll == 0.0,
        }
    }

    /// Whether this rotation leaves every point in place
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Rotate a (longitude, latitude) pair in radians
    pub fn apply(&self, lambda: f64, phi: f64) -> (f64, f64) {
        if self.identity {
            return (lambda, phi);
        }

        let lambda = wrap_longitude(lambda + self.delta_lambda);

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * self.cos_pitch + x * self.sin_pitch;

        let rotated_lambda = (y * self.cos_roll - k * self.sin_roll)
            .atan2(x * self.cos_pitch - z * self.sin_pitch);
        let rotated_phi = (k * self.cos_roll + y * self.sin_roll).clamp(-1.0, 1.0).asin();

        (rotated_lambda, rotated_phi)
    }
}

impl Default for SphereRotation {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Bring a longitude back into [−π, π] after a single shift
#[inline]
fn wrap_longitude(lambda: f64) -> f64 {
    if lambda > PI {
        lambda - TAU
    } else if lambda < -PI {
        lambda + TAU
    } else {
        lambda
    }
}
