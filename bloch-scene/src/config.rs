//! Display configuration for a Bloch sphere
//!
//! The configuration is plain serde data so it can be loaded from JSON. Every
//! field has a default, so a partial document such as `{"size": 300}` is
//! valid:
//!
//! ```json
//! {
//!   "size": 400,
//!   "style": "default",
//!   "state": { "theta": 0.785, "phi": -0.785 },
//!   "sphere": {
//!     "rotation": { "yaw": 0.349, "pitch": 0.349, "roll": 0 },
//!     "graticules": { "step": 1.571 }
//!   },
//!   "ket0": { "label": "|0⟩" },
//!   "ket1": { "label": "|1⟩" },
//!   "axes": {
//!     "overflow": 1.2,
//!     "x": { "label": "x" },
//!     "y": { "label": "y" },
//!     "z": { "label": "z" }
//!   }
//! }
//! ```

use crate::error::SceneError;
use crate::Result;
use bloch_core::angle::normalize_state;
use bloch_core::{Axis, BlochError, State};
use bloch_geo::{OrientationBounds, SphereOrientation};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Complete display configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochConfig {
    /// Width and height of the drawing area
    #[serde(default = "default_size")]
    pub size: f64,

    /// Style name handed through to the renderer
    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default)]
    pub state: StateConfig,

    #[serde(default)]
    pub sphere: SphereConfig,

    #[serde(default = "default_ket0")]
    pub ket0: LabelConfig,

    #[serde(default = "default_ket1")]
    pub ket1: LabelConfig,

    #[serde(default)]
    pub axes: AxesConfig,
}

/// Initial qubit state angles, in radians, possibly out of range
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    pub theta: f64,
    pub phi: f64,
}

/// Sphere orientation and grid density
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub rotation: SphereOrientation,
    pub graticules: GraticuleConfig,
}

/// Smallest accepted graticule step: one parallel per degree
pub const MIN_GRATICULE_STEP: f64 = PI / 180.0;

/// Graticule settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraticuleConfig {
    /// Spacing between parallels, in radians, at least [`MIN_GRATICULE_STEP`]
    pub step: f64,
}

/// A text label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub label: String,
}

impl LabelConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Axis lines and their labels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    /// Axis length as a multiple of the sphere radius
    #[serde(default = "default_overflow")]
    pub overflow: f64,

    #[serde(default = "default_x_label")]
    pub x: LabelConfig,

    #[serde(default = "default_y_label")]
    pub y: LabelConfig,

    #[serde(default = "default_z_label")]
    pub z: LabelConfig,
}

impl AxesConfig {
    /// Label configured for `axis`
    pub fn label(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x.label,
            Axis::Y => &self.y.label,
            Axis::Z => &self.z.label,
        }
    }
}

fn default_size() -> f64 {
    400.0
}

fn default_style() -> String {
    "default".to_string()
}

fn default_ket0() -> LabelConfig {
    LabelConfig::new("|0\u{27E9}")
}

fn default_ket1() -> LabelConfig {
    LabelConfig::new("|1\u{27E9}")
}

fn default_overflow() -> f64 {
    1.2
}

fn default_x_label() -> LabelConfig {
    LabelConfig::new("x")
}

fn default_y_label() -> LabelConfig {
    LabelConfig::new("y")
}

fn default_z_label() -> LabelConfig {
    LabelConfig::new("z")
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            theta: FRAC_PI_4,
            phi: -FRAC_PI_4,
        }
    }
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self { step: FRAC_PI_2 }
    }
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            overflow: default_overflow(),
            x: default_x_label(),
            y: default_y_label(),
            z: default_z_label(),
        }
    }
}

impl Default for BlochConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            style: default_style(),
            state: StateConfig::default(),
            sphere: SphereConfig::default(),
            ket0: default_ket0(),
            ket1: default_ket1(),
            axes: AxesConfig::default(),
        }
    }
}

impl BlochConfig {
    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    /// Returns [`SceneError::InvalidConfig`] for malformed JSON, or any error
    /// reported by [`BlochConfig::validate`]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BlochConfig = serde_json::from_str(json)
            .map_err(|e| SceneError::InvalidConfig(format!("JSON deserialization failed: {}", e)))?;
        config.validate()?;

        log::debug!(
            "loaded configuration: size={} state=({:.4}, {:.4})",
            config.size,
            config.state.theta,
            config.state.phi
        );
        Ok(config)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| SceneError::InvalidConfig(format!("JSON serialization failed: {}", e)))
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::InvalidConfig(format!("JSON serialization failed: {}", e)))
    }

    /// Check that every numeric field can be drawn
    ///
    /// Out-of-range angles are fine; they are folded or clamped by
    /// [`BlochConfig::adjusted`]. Non-finite ones are not.
    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(SceneError::InvalidSize(self.size));
        }
        if !self.state.theta.is_finite() {
            return Err(BlochError::invalid_angle("theta", self.state.theta).into());
        }
        if !self.state.phi.is_finite() {
            return Err(BlochError::invalid_angle("phi", self.state.phi).into());
        }
        if !self.sphere.rotation.is_finite() {
            return Err(SceneError::InvalidConfig(format!(
                "sphere rotation must be finite, got {:?}",
                self.sphere.rotation
            )));
        }
        let step = self.sphere.graticules.step;
        if !(step.is_finite() && step >= MIN_GRATICULE_STEP) {
            return Err(SceneError::InvalidConfig(format!(
                "graticule step must be at least {} rad, got {}",
                MIN_GRATICULE_STEP, step
            )));
        }
        if !(self.axes.overflow.is_finite() && self.axes.overflow > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "axis overflow must be positive, got {}",
                self.axes.overflow
            )));
        }
        Ok(())
    }

    /// A copy with canonical state angles and the orientation clamped to
    /// the default bounds
    pub fn adjusted(&self) -> Self {
        let (theta, phi) = normalize_state(self.state.theta, self.state.phi);
        let mut config = self.clone();
        config.state = StateConfig { theta, phi };
        config.sphere.rotation = self.sphere.rotation.clamped(&OrientationBounds::default());
        config
    }

    /// The configured qubit state
    pub fn state(&self) -> Result<State> {
        Ok(State::new(self.state.theta, self.state.phi)?)
    }

    /// The configured sphere orientation, as stored
    #[inline]
    pub fn orientation(&self) -> SphereOrientation {
        self.sphere.rotation
    }

    /// Turn the sphere; `None` leaves that angle as it is
    ///
    /// The result is clamped to the default bounds.
    pub fn rotate_sphere_to(&mut self, yaw: Option<f64>, pitch: Option<f64>, roll: Option<f64>) {
        let current = self.sphere.rotation;
        let target = SphereOrientation::new(
            yaw.unwrap_or(current.yaw),
            pitch.unwrap_or(current.pitch),
            roll.unwrap_or(current.roll),
        );
        self.sphere.rotation = target.clamped(&OrientationBounds::default());
    }
}
