//! Bloch sphere scene layout
//!
//! Ties the state math of [`bloch_core`] to the projection of [`bloch_geo`]:
//! - [`BlochConfig`]: serde-loadable display configuration
//! - [`Scene`]: every path and label anchor of one frame
//! - [`DragRotation`]: pointer drags mapped to sphere orientations
//! - [`BlochSphere`]: a configuration plus the displayed state
//!
//! Nothing here paints; a renderer takes a [`Scene`] and strokes its paths.
//!
//! # Example
//! ```
//! use bloch_scene::{BlochSphere, Scene};
//! use bloch_core::Axis;
//! use std::f64::consts::PI;
//!
//! let mut sphere = BlochSphere::new();
//! sphere.rotate_state(Axis::Y, PI / 2.0).unwrap();
//!
//! let scene: Scene = sphere.scene().unwrap();
//! assert_eq!(scene.radius, 150.0);
//! assert!(scene.state_line.to_svg().starts_with("M0,0L"));
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod scene;
pub mod sphere;

pub use config::{AxesConfig, BlochConfig, GraticuleConfig, LabelConfig, SphereConfig, StateConfig};
pub use drag::{DragRotation, PIXELS_TO_RADIANS};
pub use error::SceneError;
pub use scene::{AxisLayout, Label, Scene};
pub use sphere::BlochSphere;

/// Type alias for results in bloch-scene
pub type Result<T> = std::result::Result<T, SceneError>;
