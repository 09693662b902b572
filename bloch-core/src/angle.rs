//! Angle conversion and canonicalization
//!
//! Qubit states are described by a polar angle θ ∈ [0, π] and an azimuthal
//! angle φ ∈ [0, 2π). Callers may hand in any real pair; [`normalize_state`]
//! folds it back onto that canonical domain without moving the point on the
//! sphere.
//!
//! The geographic helpers map state angles to the (longitude, latitude) pair
//! used by the sphere projection: |0⟩ sits at latitude 90°, and φ = 0 sits at
//! longitude 180°.

use std::f64::consts::{PI, TAU};

/// Convert radians to degrees
#[inline]
pub fn degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert degrees to radians
#[inline]
pub fn radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Reduce any angle into [0, 2π)
///
/// `%` keeps the sign of the dividend, so negative remainders are shifted up
/// by 2π. A tiny negative remainder can round up to exactly 2π; that case
/// maps to 0. Angles already in range come back bit-for-bit unchanged.
///
/// # Example
/// ```
/// use bloch_core::angle::normalize_mod_2pi;
/// use std::f64::consts::PI;
///
/// assert!((normalize_mod_2pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert_eq!(normalize_mod_2pi(-1e-18), 0.0);
/// ```
#[inline]
pub fn normalize_mod_2pi(angle: f64) -> f64 {
    let rem = angle % TAU;
    if rem < 0.0 {
        let shifted = rem + TAU;
        if shifted >= TAU {
            0.0
        } else {
            shifted
        }
    } else if rem == 0.0 {
        // folds -0.0 into +0.0
        0.0
    } else {
        rem
    }
}

/// Canonicalize a (θ, φ) pair so that 0 ≤ θ ≤ π and 0 ≤ φ < 2π
///
/// A polar angle past π is reflected (θ → 2π − θ) and the point moves to the
/// opposite meridian (φ → φ + π), which leaves it at the same place on the
/// sphere. The fold runs twice so values landing exactly on a boundary after
/// the first pass are settled too.
///
/// # Example
/// ```
/// use bloch_core::angle::normalize_state;
/// use std::f64::consts::PI;
///
/// let (theta, phi) = normalize_state(4.0 * PI / 3.0, 5.0 * PI / 4.0);
/// assert!((theta - 2.0 * PI / 3.0).abs() < 1e-12);
/// assert!((phi - PI / 4.0).abs() < 1e-12);
/// ```
pub fn normalize_state(theta: f64, phi: f64) -> (f64, f64) {
    let mut theta = theta;
    let mut phi = phi;

    for _ in 0..2 {
        theta = normalize_mod_2pi(theta);
        phi = normalize_mod_2pi(phi);

        if theta > PI {
            theta = TAU - theta;
            phi += PI;
        }

        phi = normalize_mod_2pi(phi);
    }

    (theta, phi)
}

/// Geographic longitude (degrees) of an azimuthal angle φ
#[inline]
pub fn longitude(phi: f64) -> f64 {
    180.0 - degrees(phi)
}

/// Geographic latitude (degrees) of a polar angle θ
#[inline]
pub fn latitude(theta: f64) -> f64 {
    90.0 - degrees(theta)
}

/// Azimuthal angle φ (radians) of a geographic longitude in degrees
#[inline]
pub fn phi_from_longitude(lon: f64) -> f64 {
    radians(180.0 - lon)
}

/// Polar angle θ (radians) of a geographic latitude in degrees
#[inline]
pub fn theta_from_latitude(lat: f64) -> f64 {
    radians(90.0 - lat)
}
