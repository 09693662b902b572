//! Orthographic projection of spherical points to the screen
//!
//! A point is given as (d, θ, φ): its distance from the sphere center and
//! the state angles. It is placed on the globe at longitude 180° − φ and
//! latitude 90° − θ, the globe is turned by the [`SphereOrientation`], and
//! the result is projected orthographically with scale d:
//!
//! ```text
//! x =  d · cos(lat') · sin(lon')
//! y = −d · sin(lat')
//! ```
//!
//! The view looks at (lon', lat') = (0, 0); the center of the sphere lands
//! on the screen origin.

use crate::graticule::Graticule;
use crate::orientation::SphereOrientation;
use crate::path::{Path, Point, Subpath};
use crate::rotation::SphereRotation;
use bloch_core::angle::{latitude, longitude, normalize_state, radians};
use serde::{Deserialize, Serialize};

/// Clip angle used for paths: the whole sphere is drawn, far side included
pub const FULL_SPHERE_CLIP: f64 = 180.0;

/// Clip angle of the sphere outline: only the near-hemisphere silhouette
pub const HORIZON_CLIP: f64 = 90.0;

/// Number of samples along an angle arc
pub const ANGLE_ARC_SAMPLES: usize = 8;

/// Angular spacing of the outline samples, in degrees
const OUTLINE_STEP: f64 = 6.0;

/// Slack on the visibility test so points exactly on the clip circle stay
const CLIP_EPSILON: f64 = 1e-9;

/// A point given by its distance from the sphere center and state angles
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SphericalPoint {
    /// Distance from the center, in screen units
    pub d: f64,
    pub theta: f64,
    pub phi: f64,
}

impl SphericalPoint {
    /// The sphere center
    pub const CENTER: SphericalPoint = SphericalPoint::new(0.0, 0.0, 0.0);

    /// Create a spherical point
    #[inline]
    pub const fn new(d: f64, theta: f64, phi: f64) -> Self {
        Self { d, theta, phi }
    }
}

/// Projection for one sphere orientation
///
/// Cheap to build; make a new one whenever the orientation changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    orientation: SphereOrientation,
    rotation: SphereRotation,
    clip_angle: f64,
    clip_cos: f64,
}

/// Projection for the given yaw, pitch and roll (radians)
///
/// # Example
/// ```
/// use bloch_geo::projection;
/// use std::f64::consts::PI;
///
/// let proj = projection(PI / 9.0, PI / 9.0, 0.0);
/// let x_axis = proj.project(100.0, PI / 2.0, 0.0);
/// assert!((x_axis.x + 34.2020143).abs() < 1e-6);
/// assert!((x_axis.y - 32.1393805).abs() < 1e-6);
/// ```
pub fn projection(yaw: f64, pitch: f64, roll: f64) -> Projection {
    Projection::new(SphereOrientation::new(yaw, pitch, roll))
}

impl Projection {
    /// Projection for `orientation`, clipping paths at 180°
    pub fn new(orientation: SphereOrientation) -> Self {
        log::trace!(
            "projection for yaw={:.4} pitch={:.4} roll={:.4}",
            orientation.yaw,
            orientation.pitch,
            orientation.roll
        );

        Self {
            orientation,
            rotation: SphereRotation::new(orientation.yaw, orientation.pitch, orientation.roll),
            clip_angle: FULL_SPHERE_CLIP,
            clip_cos: radians(FULL_SPHERE_CLIP).cos(),
        }
    }

    /// Same projection, clipping paths at `degrees` from the view center
    ///
    /// 90° hides the far hemisphere; 180° (the default) hides nothing.
    pub fn with_clip_angle(mut self, degrees: f64) -> Self {
        let degrees = degrees.clamp(0.0, FULL_SPHERE_CLIP);
        self.clip_angle = degrees;
        self.clip_cos = radians(degrees).cos();
        self
    }

    /// The orientation this projection was built for
    #[inline]
    pub fn orientation(&self) -> SphereOrientation {
        self.orientation
    }

    /// Clip angle in degrees
    #[inline]
    pub fn clip_angle(&self) -> f64 {
        self.clip_angle
    }

    /// Screen position of a spherical point
    ///
    /// The angles are brought into canonical range first.
    pub fn project(&self, d: f64, theta: f64, phi: f64) -> Point {
        let (lon, lat) = geographic(theta, phi);
        self.project_geo(d, lon, lat)
    }

    /// Screen position of a [`SphericalPoint`]
    #[inline]
    pub fn project_point(&self, point: &SphericalPoint) -> Point {
        self.project(point.d, point.theta, point.phi)
    }

    /// Screen X coordinate of a spherical point
    #[inline]
    pub fn screen_x(&self, d: f64, theta: f64, phi: f64) -> f64 {
        self.project(d, theta, phi).x
    }

    /// Screen Y coordinate of a spherical point
    #[inline]
    pub fn screen_y(&self, d: f64, theta: f64, phi: f64) -> f64 {
        self.project(d, theta, phi).y
    }

    /// Screen position of a geographic (longitude, latitude) pair in degrees
    pub fn project_geo(&self, d: f64, lon: f64, lat: f64) -> Point {
        let (lambda, phi) = self.rotation.apply(radians(lon), radians(lat));
        let cos_phi = phi.cos();
        Point::new(d * cos_phi * lambda.sin(), -d * phi.sin())
    }

    /// Whether a geographic point survives the clip circle
    pub fn is_visible(&self, lon: f64, lat: f64) -> bool {
        let (lambda, phi) = self.rotation.apply(radians(lon), radians(lat));
        lambda.cos() * phi.cos() >= self.clip_cos - CLIP_EPSILON
    }

    /// Outline of the sphere at radius `d`
    ///
    /// The outline is the horizon: the 90° circle around the view center,
    /// which projects to a circle of radius `d` whatever the orientation.
    pub fn sphere_path(&self, d: f64) -> Path {
        let samples = (360.0 / OUTLINE_STEP) as usize;
        let points = (0..samples)
            .map(|i| {
                let (sin, cos) = radians(i as f64 * OUTLINE_STEP).sin_cos();
                Point::new(d * cos, d * sin)
            })
            .collect();
        Path::ring(points)
    }

    /// Latitude/longitude grid at radius `d`, parallels every `step` radians
    pub fn graticule_path(&self, d: f64, step: f64) -> Path {
        Graticule::new(step)
            .lines()
            .iter()
            .map(|line| self.geo_polyline(d, line))
            .fold(Path::new(), |mut path, part| {
                path.extend(part);
                path
            })
    }

    /// Straight screen line between two spherical points
    pub fn line_path(&self, end: SphericalPoint, start: SphericalPoint) -> Path {
        Path::polyline(vec![self.project_point(&start), self.project_point(&end)])
    }

    /// Straight screen line from the sphere center to `end`
    pub fn line_from_center(&self, end: SphericalPoint) -> Path {
        self.line_path(end, SphericalPoint::CENTER)
    }

    /// Arc at radius `d` from (start θ, start φ) to (end θ, end φ)
    ///
    /// Both ends are normalized, so any two angle pairs naming the same
    /// points give the same arc. Longitude and latitude are interpolated
    /// linearly in
    /// [`ANGLE_ARC_SAMPLES`] steps and each sample is projected. This is a
    /// visual marker for an angle, not an exact geodesic.
    pub fn angle_path(
        &self,
        d: f64,
        start_theta: f64,
        start_phi: f64,
        end_theta: f64,
        end_phi: f64,
    ) -> Path {
        let (lon0, lat0) = geographic(start_theta, start_phi);
        let (lon1, lat1) = geographic(end_theta, end_phi);
        let last = (ANGLE_ARC_SAMPLES - 1) as f64;

        let samples: Vec<(f64, f64)> = (0..ANGLE_ARC_SAMPLES)
            .map(|i| {
                let t = i as f64 / last;
                (lon0 + (lon1 - lon0) * t, lat0 + (lat1 - lat0) * t)
            })
            .collect();

        self.geo_polyline(d, &samples)
    }

    /// Project a run of geographic samples, breaking it where it is clipped
    fn geo_polyline(&self, d: f64, samples: &[(f64, f64)]) -> Path {
        let mut path = Path::new();
        let mut current = Vec::new();

        for &(lon, lat) in samples {
            if self.is_visible(lon, lat) {
                current.push(self.project_geo(d, lon, lat));
            } else if !current.is_empty() {
                path.push(Subpath::open(std::mem::take(&mut current)));
            }
        }
        path.push(Subpath::open(current));
        path
    }
}

/// (longitude, latitude) in degrees of the canonical form of (θ, φ)
fn geographic(theta: f64, phi: f64) -> (f64, f64) {
    let (theta, phi) = normalize_state(theta, phi);
    (longitude(phi), latitude(theta))
}
