//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and initial layout
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – optional explicit initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every key is optional; missing keys take the defaults from
//! `simulation::params`.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "leapfrog"  # or "euler"
//!   layout: "random"        # or "triangle"
//!
//! parameters:
//!   n_bodies: 3             # ignored when `bodies` is given
//!   G: 6.6743e-11           # gravitational constant
//!   radius: 25.0            # body radius and minimum force distance
//!   epsilon: 1.0e-8         # normalization floor
//!   dt: 1.0                 # leapfrog step size
//!   seed: 42                # deterministic seed for positions and colors
//!   side: 200.0             # triangle side length
//!
//! bodies:
//!   - x: [ 100.0, 300.0 ]
//!     m: 1.0e11
//!   - x: [ 500.0, 300.0 ]   # mass defaults to 1e11
//! ```

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_DT, DEFAULT_N_BODIES, DEFAULT_RADIUS, GRAVITATIONAL_CONSTANT};
use crate::simulation::vector::EPSILON;

/// Which integrator method used by the engine
/// `integrator: "euler"` or `integrator: "leapfrog"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Explicit Euler, unit step. First order, drifts
    Euler,

    #[default]
    #[serde(rename = "leapfrog")] // Kick-drift-kick leapfrog. Symplectic and time-reversible
    Leapfrog,
}

/// How initial positions are produced when no explicit `bodies` are listed
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutConfig {
    #[default]
    #[serde(rename = "random")] // n_bodies random grid points
    Random,

    #[serde(rename = "triangle")] // equilateral triangle around the window center, 3 bodies
    Triangle,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    pub layout: LayoutConfig, // Initial placement when bodies are not listed
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub n_bodies: usize, // population size
    pub G: f64,          // gravitational constant
    pub radius: f64,     // body radius, minimum separation in the force law
    pub epsilon: f64,    // normalization floor
    pub dt: f64,         // leapfrog step size
    pub seed: Option<u64>, // deterministic seed to make runs reproducable
    pub side: f64,       // triangle side length
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            n_bodies: DEFAULT_N_BODIES,
            G: GRAVITATIONAL_CONSTANT,
            radius: DEFAULT_RADIUS,
            epsilon: EPSILON,
            dt: DEFAULT_DT,
            seed: None,
            side: 200.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2],    // Initial position in screen units
    pub m: Option<f64>, // Mass of the body, 1e11 when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Integrator and layout
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Option<Vec<BodyConfig>>, // Explicit initial state, overrides the layout
}
