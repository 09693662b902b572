//! Mouse-drag rotation of the displayed sphere
//!
//! A drag is a pure mapping from the pointer offset since the button went
//! down to a new orientation. Horizontal movement turns the yaw, vertical
//! movement the pitch; roll is left alone.

use bloch_geo::{OrientationBounds, SphereOrientation};
use std::f64::consts::PI;

/// Radians of rotation per pixel of pointer movement
pub const PIXELS_TO_RADIANS: f64 = PI / 300.0;

/// A drag in progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotation {
    origin: SphereOrientation,
    bounds: OrientationBounds,
}

impl DragRotation {
    /// Start dragging from `origin`, clamping to the default bounds
    pub fn begin(origin: SphereOrientation) -> Self {
        Self::with_bounds(origin, OrientationBounds::default())
    }

    /// Start dragging from `origin` with custom bounds
    pub fn with_bounds(origin: SphereOrientation, bounds: OrientationBounds) -> Self {
        log::trace!("drag started at {:?}", origin);
        Self { origin, bounds }
    }

    /// Orientation when the drag began
    #[inline]
    pub fn origin(&self) -> SphereOrientation {
        self.origin
    }

    /// Orientation for a pointer offset of (`dx`, `dy`) pixels from the start
    pub fn moved(&self, dx: f64, dy: f64) -> SphereOrientation {
        let yaw = self.origin.yaw - dx * PIXELS_TO_RADIANS;
        let pitch = self.origin.pitch + dy * PIXELS_TO_RADIANS;
        self.origin.rotated_to(yaw, pitch, &self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_no_movement_keeps_origin() {
        let drag = DragRotation::begin(SphereOrientation::default());
        assert_eq!(drag.moved(0.0, 0.0), SphereOrientation::default());
        assert_eq!(drag.origin(), SphereOrientation::default());
    }

    #[test]
    fn test_pixel_scale() {
        let drag = DragRotation::begin(SphereOrientation::new(0.0, 0.5, 0.25));
        let turned = drag.moved(30.0, 15.0);
        assert_abs_diff_eq!(turned.yaw, -PI / 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(turned.pitch, 0.5 + PI / 20.0, epsilon = 1e-12);
        assert_eq!(turned.roll, 0.25);
    }

    #[test]
    fn test_large_drag_is_clamped() {
        let drag = DragRotation::begin(SphereOrientation::default());
        let turned = drag.moved(-10_000.0, 10_000.0);
        assert_eq!(turned.yaw, FRAC_PI_2);
        assert_eq!(turned.pitch, FRAC_PI_2);

        let turned = drag.moved(10_000.0, -10_000.0);
        assert_eq!(turned.yaw, -FRAC_PI_2);
        assert_eq!(turned.pitch, 0.0);
    }

    #[test]
    fn test_unbounded_drag() {
        let drag = DragRotation::with_bounds(SphereOrientation::IDENTITY, OrientationBounds::UNBOUNDED);
        let turned = drag.moved(-600.0, 0.0);
        assert_abs_diff_eq!(turned.yaw, 2.0 * PI, epsilon = 1e-12);
    }
}
