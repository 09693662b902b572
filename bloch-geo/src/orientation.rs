//! Display orientation of the sphere
//!
//! The orientation is independent of the qubit state: it only says how the
//! whole sphere is turned on screen. Unlike state angles it is clamped to a
//! window rather than wrapped, so dragging past a limit just stops there.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Yaw, pitch and roll of the displayed sphere, in radians
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereOrientation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl SphereOrientation {
    /// Create an orientation as given, without clamping
    #[inline]
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// No rotation: the equator is horizontal and φ = π/2 points right
    pub const IDENTITY: SphereOrientation = SphereOrientation::new(0.0, 0.0, 0.0);

    /// This orientation limited to `bounds`
    pub fn clamped(&self, bounds: &OrientationBounds) -> Self {
        Self {
            yaw: clamp_angle(self.yaw, bounds.yaw),
            pitch: clamp_angle(self.pitch, bounds.pitch),
            roll: clamp_angle(self.roll, bounds.roll),
        }
    }

    /// A copy turned to a new yaw and pitch, clamped to `bounds`; roll is kept
    pub fn rotated_to(&self, yaw: f64, pitch: f64, bounds: &OrientationBounds) -> Self {
        Self::new(yaw, pitch, self.roll).clamped(bounds)
    }

    /// Whether all three angles are finite
    pub fn is_finite(&self) -> bool {
        self.yaw.is_finite() && self.pitch.is_finite() && self.roll.is_finite()
    }
}

impl Default for SphereOrientation {
    /// 20° of yaw and 20° of pitch, a view slightly from the side
    fn default() -> Self {
        Self::new(PI / 9.0, PI / 9.0, 0.0)
    }
}

/// Inclusive (min, max) limits for each orientation angle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationBounds {
    pub yaw: (f64, f64),
    pub pitch: (f64, f64),
    pub roll: (f64, f64),
}

impl OrientationBounds {
    /// No limits at all
    pub const UNBOUNDED: OrientationBounds = OrientationBounds {
        yaw: (f64::NEG_INFINITY, f64::INFINITY),
        pitch: (f64::NEG_INFINITY, f64::INFINITY),
        roll: (f64::NEG_INFINITY, f64::INFINITY),
    };
}

impl Default for OrientationBounds {
    /// yaw ∈ [−π/2, π/2], pitch ∈ [0, π/2], roll ∈ [0, π/2]
    fn default() -> Self {
        Self {
            yaw: (-FRAC_PI_2, FRAC_PI_2),
            pitch: (0.0, FRAC_PI_2),
            roll: (0.0, FRAC_PI_2),
        }
    }
}

/// Clamp into `(min, max)`; NaN falls back to the lower bound when it is finite
fn clamp_angle(value: f64, (min, max): (f64, f64)) -> f64 {
    if value.is_nan() {
        return if min.is_finite() { min } else { 0.0 };
    }
    value.max(min).min(max)
}
