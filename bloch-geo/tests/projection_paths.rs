//! Projection behaviour across orientations: axis tips, visibility and the
//! paths a renderer strokes

use approx::assert_abs_diff_eq;
use bloch_core::angle::{latitude, longitude};
use bloch_core::State;
use bloch_geo::projection::HORIZON_CLIP;
use bloch_geo::{
    projection, OrientationBounds, Point, Projection, SphereOrientation, SphericalPoint,
};
use std::f64::consts::{FRAC_PI_2, PI};

const ORIENTATIONS: [(f64, f64, f64); 6] = [
    (0.0, 0.0, 0.0),
    (PI / 9.0, PI / 9.0, 0.0),
    (-FRAC_PI_2, 0.3, 0.0),
    (0.7, FRAC_PI_2, 0.2),
    (-0.4, 0.1, FRAC_PI_2),
    (1.2, 0.9, 0.6),
];

fn origin() -> Point {
    Point::default()
}

#[test]
fn test_points_stay_inside_the_disc() {
    for &(yaw, pitch, roll) in &ORIENTATIONS {
        let proj = projection(yaw, pitch, roll);
        for i in 0..12 {
            for j in 0..12 {
                let theta = i as f64 * PI / 11.0;
                let phi = j as f64 * PI / 6.0;
                let p = proj.project(75.0, theta, phi);
                assert!(p.distance(&origin()) <= 75.0 + 1e-9);
            }
        }
    }
}

#[test]
fn test_opposite_points_mirror_through_center() {
    for &(yaw, pitch, roll) in &ORIENTATIONS {
        let proj = projection(yaw, pitch, roll);
        let state = State::new(1.1, 0.6).unwrap();
        let flipped = State::new(PI - state.theta(), state.phi() + PI).unwrap();

        let a = proj.project(50.0, state.theta(), state.phi());
        let b = proj.project(50.0, flipped.theta(), flipped.phi());
        assert_abs_diff_eq!(a.x, -b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, -b.y, epsilon = 1e-9);
    }
}

#[test]
fn test_axes_stay_orthogonal_in_space() {
    // Projected axis tips are the x/y components of an orthonormal frame, so
    // their squared lengths sum to two on screen
    for &(yaw, pitch, roll) in &ORIENTATIONS {
        let proj = projection(yaw, pitch, roll);
        let tips = [
            proj.project(1.0, FRAC_PI_2, 0.0),
            proj.project(1.0, FRAC_PI_2, FRAC_PI_2),
            proj.project(1.0, 0.0, 0.0),
        ];
        let total: f64 = tips.iter().map(|p| p.x * p.x + p.y * p.y).sum();
        assert_abs_diff_eq!(total, 2.0, epsilon = 1e-9);
    }
}

#[test]
fn test_horizon_clip_hides_far_hemisphere() {
    let proj = projection(0.0, 0.0, 0.0).with_clip_angle(HORIZON_CLIP);
    // φ = π/2 is the right edge, φ = π faces the viewer, φ = 0 faces away
    assert!(proj.is_visible(longitude(PI), latitude(FRAC_PI_2)));
    assert!(proj.is_visible(longitude(FRAC_PI_2), latitude(FRAC_PI_2)));
    assert!(!proj.is_visible(longitude(0.0), latitude(FRAC_PI_2)));

    let full = projection(0.0, 0.0, 0.0);
    assert!(full.is_visible(longitude(0.0), latitude(FRAC_PI_2)));
}

#[test]
fn test_clipped_equator_is_split() {
    let proj = projection(0.3, 0.0, 0.0).with_clip_angle(HORIZON_CLIP);
    let path = proj.graticule_path(100.0, PI / 2.0);

    // four meridians pole to pole plus the equator, with every line broken
    // where it passes behind the sphere
    assert!(path.subpaths().len() > 5);
    assert!(path.subpaths().iter().all(|s| !s.is_closed()));
}

#[test]
fn test_clamped_orientation_projects_like_default() {
    let wild = SphereOrientation::new(PI / 9.0, PI / 9.0, -1.0);
    let clamped = Projection::new(wild.clamped(&OrientationBounds::default()));
    let default = Projection::new(SphereOrientation::default());

    let a = clamped.project(100.0, 0.8, 2.4);
    let b = default.project(100.0, 0.8, 2.4);
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
}

#[test]
fn test_state_decoration_paths() {
    let proj = Projection::new(SphereOrientation::default());
    let state = State::new(PI / 4.0, -PI / 4.0).unwrap();
    let (theta, phi) = (state.theta(), state.phi());
    let r = 150.0;

    let state_line = proj.line_from_center(SphericalPoint::new(r, theta, phi));
    assert_eq!(state_line.point_count(), 2);
    assert_eq!(state_line.points().next(), Some(&Point::new(0.0, -0.0)));

    let theta_arc = proj.angle_path(r / 3.0, 0.0, phi, theta, phi);
    let phi_arc = proj.angle_path(r / 3.0, FRAC_PI_2, 0.0, FRAC_PI_2, phi);
    assert_eq!(theta_arc.point_count(), 8);
    assert_eq!(phi_arc.point_count(), 8);

    // θ arc starts at the z axis tip scaled to r/3
    let start = theta_arc.points().next().copied().unwrap();
    let z_tip = proj.project(r / 3.0, 0.0, 0.0);
    assert_abs_diff_eq!(start.x, z_tip.x, epsilon = 1e-9);
    assert_abs_diff_eq!(start.y, z_tip.y, epsilon = 1e-9);
}

#[test]
fn test_svg_output_parses_as_commands() {
    let svg = projection(0.2, 0.2, 0.0).sphere_path(10.0).to_svg();
    assert!(svg.starts_with('M'));
    assert!(svg.ends_with('Z'));
    assert_eq!(svg.matches('L').count(), 59);
}
