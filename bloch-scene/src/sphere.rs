//! A Bloch sphere view: one configuration and one qubit state
//!
//! [`BlochSphere`] is what a renderer keeps between frames. Rotations act on
//! the state, drags and [`BlochSphere::rotate_sphere_to`] act on the view,
//! and [`BlochSphere::scene`] lays out the current frame.

use crate::config::BlochConfig;
use crate::drag::DragRotation;
use crate::scene::Scene;
use crate::Result;
use bloch_core::{Axis, RotationOperator, State};
use bloch_geo::SphereOrientation;

#[derive(Clone, Debug, PartialEq)]
pub struct BlochSphere {
    config: BlochConfig,
    state: State,
}

impl BlochSphere {
    /// A view of |0⟩ with the default configuration
    pub fn new() -> Self {
        Self {
            config: BlochConfig::default(),
            state: State::default(),
        }
    }

    /// A view of the state stored in `config`
    pub fn from_config(config: BlochConfig) -> Result<Self> {
        config.validate()?;
        let state = config.state()?;
        Ok(Self { config, state })
    }

    #[inline]
    pub fn config(&self) -> &BlochConfig {
        &self.config
    }

    /// Replace the configuration; the current state is kept
    pub fn set_config(&mut self, config: BlochConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Apply a rotation to the displayed state
    pub fn apply(&mut self, operator: &RotationOperator) -> Result<State> {
        self.state = self.state.rotate(operator)?;
        log::debug!("applied {} -> {}", operator, self.state);
        Ok(self.state)
    }

    /// Rotate the displayed state by `tau` radians about `axis`
    pub fn rotate_state(&mut self, axis: Axis, tau: f64) -> Result<State> {
        self.apply(&RotationOperator::new(axis, tau))
    }

    #[inline]
    pub fn orientation(&self) -> SphereOrientation {
        self.config.orientation()
    }

    /// Turn the view; `None` keeps that angle
    pub fn rotate_sphere_to(&mut self, yaw: Option<f64>, pitch: Option<f64>, roll: Option<f64>) {
        self.config.rotate_sphere_to(yaw, pitch, roll);
    }

    /// Begin a pointer drag from the current orientation
    pub fn begin_drag(&self) -> DragRotation {
        DragRotation::begin(self.orientation())
    }

    /// Move an ongoing drag to a pointer offset of (`dx`, `dy`) pixels
    pub fn drag_to(&mut self, drag: &DragRotation, dx: f64, dy: f64) {
        let target = drag.moved(dx, dy);
        self.rotate_sphere_to(Some(target.yaw), Some(target.pitch), None);
    }

    /// Layout of the current frame
    pub fn scene(&self) -> Result<Scene> {
        Scene::build(&self.config, &self.state)
    }
}

impl Default for BlochSphere {
    fn default() -> Self {
        Self::new()
    }
}
