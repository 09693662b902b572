//! Screen projection for the Bloch sphere
//!
//! This crate turns spherical points (distance from the center, θ, φ) into
//! 2D screen coordinates for a sphere the user has turned to some
//! [`SphereOrientation`], and builds the [`Path`]s a renderer strokes:
//! the sphere outline, the graticule, axis and state lines, and the arcs
//! that mark the θ and φ angles.
//!
//! Screen coordinates are centered on the sphere center with y pointing
//! down, so a renderer only has to translate them to the middle of its
//! drawing area.
//!
//! # Example
//!
//! ```
//! use bloch_geo::{projection, SphericalPoint};
//! use std::f64::consts::PI;
//!
//! let proj = projection(0.0, 0.0, 0.0);
//!
//! // The z axis tip points straight up
//! let tip = proj.project(100.0, 0.0, 0.0);
//! assert!(tip.x.abs() < 1e-9 && (tip.y + 100.0).abs() < 1e-9);
//!
//! let axis = proj.line_from_center(SphericalPoint::new(100.0, PI / 2.0, PI / 2.0));
//! assert_eq!(axis.to_string(), "M0,0L100,0");
//! ```

pub mod graticule;
pub mod orientation;
pub mod path;
pub mod projection;
pub mod rotation;

pub use graticule::Graticule;
pub use orientation::{OrientationBounds, SphereOrientation};
pub use path::{Path, Point, Subpath};
pub use projection::{projection, Projection, SphericalPoint};
pub use rotation::SphereRotation;
