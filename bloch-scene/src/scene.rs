//! Layout of every element of a Bloch sphere drawing
//!
//! A [`Scene`] is the full set of screen paths and label anchors for one
//! configuration and one qubit state. All coordinates are relative to the
//! sphere center; a renderer translates them by [`Scene::offset`], which puts
//! the center in the middle of the `size × size` drawing area.

use crate::config::BlochConfig;
use crate::error::SceneError;
use crate::Result;
use bloch_core::{Axis, State};
use bloch_geo::{Path, Point, Projection, SphereOrientation, SphericalPoint};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// Sphere radius as a fraction of half the drawing size
pub const RADIUS_RATIO: f64 = 0.75;

/// Distance of axis labels beyond the axis tips
pub const LABEL_OFFSET: f64 = 15.0;

/// Radius of the θ and φ arcs as a fraction of the sphere radius
pub const ARC_RATIO: f64 = 1.0 / 3.0;

/// Below this sinθ the state has no xy component and the φ arc is left out
pub const PHI_ARC_MIN_SIN: f64 = 1e-3;

/// A text label anchored at a screen point
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: Point,
}

/// One axis line and its label
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisLayout {
    pub axis: Axis,
    pub line: Path,
    pub label: Label,
}

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    /// Width and height of the drawing area
    pub size: f64,
    /// Translation from scene coordinates to drawing-area coordinates
    pub offset: Point,
    /// Sphere radius
    pub radius: f64,
    /// Orientation the scene was projected with, after clamping
    pub orientation: SphereOrientation,
    /// The state that was laid out
    pub state: State,
    pub sphere: Path,
    pub graticule: Path,
    /// x, y and z axes, in that order
    pub axes: Vec<AxisLayout>,
    /// From the center to the state point
    pub state_line: Path,
    /// From the center to the state's foot in the equatorial plane
    pub xy_projection: Path,
    /// From the foot in the equatorial plane up to the state point
    pub z_projection: Path,
    pub theta_arc: Path,
    /// Empty when the state sits at a pole
    pub phi_arc: Path,
}

/// State angles (θ, φ) of the positive end of an axis
pub fn axis_direction(axis: Axis) -> (f64, f64) {
    match axis {
        Axis::X => (FRAC_PI_2, 0.0),
        Axis::Y => (FRAC_PI_2, FRAC_PI_2),
        Axis::Z => (0.0, 0.0),
    }
}

impl Scene {
    /// Lay out `state` on a sphere drawn with `config`
    ///
    /// The configuration's orientation is clamped first; its stored state
    /// angles are ignored in favour of `state`.
    ///
    /// # Errors
    /// Returns the first validation error of `config`
    pub fn build(config: &BlochConfig, state: &State) -> Result<Self> {
        config.validate()?;
        let config = config.adjusted();

        let size = config.size;
        let radius = size / 2.0 * RADIUS_RATIO;
        let orientation = config.orientation();
        let proj = Projection::new(orientation);

        log::debug!(
            "building scene: size={} radius={} state={} orientation=({:.4}, {:.4}, {:.4})",
            size,
            radius,
            state,
            orientation.yaw,
            orientation.pitch,
            orientation.roll
        );

        let axis_length = config.axes.overflow * radius;
        let axes = Axis::ALL
            .iter()
            .map(|&axis| {
                let (theta, phi) = axis_direction(axis);
                AxisLayout {
                    axis,
                    line: proj.line_from_center(SphericalPoint::new(axis_length, theta, phi)),
                    label: Label {
                        text: config.axes.label(axis).to_string(),
                        position: proj.project(axis_length + LABEL_OFFSET, theta, phi),
                    },
                }
            })
            .collect();

        let (theta, phi) = (state.theta(), state.phi());
        let tip = SphericalPoint::new(radius, theta, phi);
        let foot = SphericalPoint::new(theta.sin() * radius, FRAC_PI_2, phi);
        let arc_radius = radius * ARC_RATIO;
        let phi_arc = if theta.sin() < PHI_ARC_MIN_SIN {
            Path::new()
        } else {
            proj.angle_path(arc_radius, FRAC_PI_2, 0.0, FRAC_PI_2, phi)
        };

        Ok(Self {
            size,
            offset: Point::new(size / 2.0, size / 2.0),
            radius,
            orientation,
            state: *state,
            sphere: proj.sphere_path(radius),
            graticule: proj.graticule_path(radius, config.sphere.graticules.step),
            axes,
            state_line: proj.line_from_center(tip),
            xy_projection: proj.line_from_center(foot),
            z_projection: proj.line_path(tip, foot),
            theta_arc: proj.angle_path(arc_radius, 0.0, phi, theta, phi),
            phi_arc,
        })
    }

    /// Lay out the state stored in `config`
    pub fn from_config(config: &BlochConfig) -> Result<Self> {
        let state = config.state()?;
        Self::build(config, &state)
    }

    /// Layout of one axis
    pub fn axis(&self, axis: Axis) -> Option<&AxisLayout> {
        self.axes.iter().find(|layout| layout.axis == axis)
    }

    /// Screen tip of the state line, in drawing-area coordinates
    pub fn state_tip(&self) -> Option<Point> {
        self.state_line
            .points()
            .last()
            .map(|p| Point::new(p.x + self.offset.x, p.y + self.offset.y))
    }

    /// Serialize the layout to JSON for an external renderer
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| SceneError::InvalidConfig(format!("JSON serialization failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bloch_core::{KET_ONE, KET_PLUS_I, KET_ZERO};

    fn flat_config() -> BlochConfig {
        let mut config = BlochConfig::default();
        config.sphere.rotation = SphereOrientation::IDENTITY;
        config
    }

    #[test]
    fn test_dimensions() {
        let scene = Scene::build(&BlochConfig::default(), &KET_ZERO).unwrap();
        assert_eq!(scene.size, 400.0);
        assert_eq!(scene.offset, Point::new(200.0, 200.0));
        assert_eq!(scene.radius, 150.0);
        assert_eq!(scene.axes.len(), 3);
        assert_eq!(scene.sphere.point_count(), 60);
    }

    #[test]
    fn test_axes_without_rotation() {
        let scene = Scene::build(&flat_config(), &KET_ZERO).unwrap();

        let y = scene.axis(Axis::Y).unwrap();
        assert_eq!(y.line.to_string(), "M0,0L180,0");
        assert_eq!(y.label.text, "y");
        assert_abs_diff_eq!(y.label.position.x, 195.0, epsilon = 1e-9);

        let z = scene.axis(Axis::Z).unwrap();
        assert_eq!(z.line.to_string(), "M0,0L0,-180");
        assert_abs_diff_eq!(z.label.position.y, -195.0, epsilon = 1e-9);
    }

    #[test]
    fn test_state_line_reaches_sphere() {
        let scene = Scene::build(&flat_config(), &KET_PLUS_I).unwrap();
        assert_eq!(scene.state_line.to_string(), "M0,0L150,0");
        let tip = scene.state_tip().unwrap();
        assert_abs_diff_eq!(tip.x, 350.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tip.y, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_projection_lines_meet_at_foot() {
        let state = State::new(1.0, 2.0).unwrap();
        let scene = Scene::build(&BlochConfig::default(), &state).unwrap();

        let foot = scene.xy_projection.points().last().copied().unwrap();
        let start = scene.z_projection.points().next().copied().unwrap();
        assert_abs_diff_eq!(foot.x, start.x, epsilon = 1e-9);
        assert_abs_diff_eq!(foot.y, start.y, epsilon = 1e-9);

        let tip = scene.state_line.points().last().copied().unwrap();
        let end = scene.z_projection.points().last().copied().unwrap();
        assert_abs_diff_eq!(tip.x, end.x, epsilon = 1e-9);
        assert_abs_diff_eq!(tip.y, end.y, epsilon = 1e-9);
    }

    #[test]
    fn test_pole_state_has_degenerate_projection() {
        let scene = Scene::build(&flat_config(), &KET_ONE).unwrap();
        // sin π is tiny, so the foot sits at the center
        let foot = scene.xy_projection.points().last().copied().unwrap();
        assert!(foot.distance(&Point::default()) < 1e-9);
        assert_eq!(scene.theta_arc.point_count(), 8);
        assert!(scene.phi_arc.is_empty());
        assert_eq!(scene.phi_arc.to_string(), "");
    }

    #[test]
    fn test_phi_arc_left_out_at_poles() {
        let scene = Scene::build(&BlochConfig::default(), &KET_ZERO).unwrap();
        assert!(scene.phi_arc.is_empty());

        // a state rotated onto |0⟩ carries no stray arc either
        let north = KET_PLUS_I.rx(std::f64::consts::PI / 2.0).unwrap();
        let scene = Scene::build(&BlochConfig::default(), &north).unwrap();
        assert!(scene.phi_arc.is_empty());

        let near_pole = State::new(2e-3, 1.0).unwrap();
        let scene = Scene::build(&BlochConfig::default(), &near_pole).unwrap();
        assert_eq!(scene.phi_arc.point_count(), 8);
    }

    #[test]
    fn test_orientation_is_clamped() {
        let mut config = BlochConfig::default();
        config.sphere.rotation = SphereOrientation::new(5.0, -1.0, 0.0);
        let scene = Scene::build(&config, &KET_ZERO).unwrap();
        assert_eq!(scene.orientation, SphereOrientation::new(FRAC_PI_2, 0.0, 0.0));
    }

    #[test]
    fn test_every_axis_is_laid_out() {
        let scene = Scene::build(&BlochConfig::default(), &KET_ZERO).unwrap();
        for axis in Axis::ALL {
            assert_eq!(scene.axis(axis).map(|layout| layout.axis), Some(axis));
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = BlochConfig::default();
        config.size = f64::NAN;
        assert!(matches!(
            Scene::build(&config, &KET_ZERO),
            Err(SceneError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_from_config_uses_stored_state() {
        let scene = Scene::from_config(&BlochConfig::default()).unwrap();
        assert_abs_diff_eq!(scene.state.theta(), std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        assert!(scene.to_json().unwrap().contains("\"state_line\""));
    }
}
