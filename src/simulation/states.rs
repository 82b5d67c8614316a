//! Core state types for the N-body simulation.
//!
//! - `Body`   one point mass: identity, position, velocity, mass and color
//! - `System` the fixed, ordered population plus elapsed time and tick count
//!
//! Bodies are only built through [`Body::new`] or [`System::populate`], both of
//! which reject non-positive masses, so every `System` that exists can be
//! integrated without further checks.

use rand::Rng;

use super::error::SimError;
use super::initial::random_color;
use super::vector::NVec2;

/// Mass given to bodies whose initial condition does not specify one
pub const DEFAULT_MASS: f64 = 1e11;

pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: u32, // stable identity, index at construction
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, always > 0
    pub color: Rgb, // display color
}

impl Body {
    /// Build a body at rest at `x`.
    pub fn new(id: u32, x: NVec2, m: f64, color: Rgb) -> Result<Self, SimError> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass { id, mass: m });
        }
        Ok(Self {
            id,
            x,
            v: NVec2::zeros(),
            m,
            color,
        })
    }
}

/// Caller-supplied starting point for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialBody {
    pub x: NVec2,
    pub m: Option<f64>, // `None` -> DEFAULT_MASS
}

impl InitialBody {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x: NVec2::new(x, y), m: None }
    }

    pub fn with_mass(mut self, m: f64) -> Self {
        self.m = Some(m);
        self
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed population, never grows or shrinks
    pub t: f64, // elapsed simulation time
    pub tick: u64, // number of completed integrator steps
}

impl System {
    /// Build the population once from initial conditions.
    ///
    /// Ids follow the order of `initial`, colors are drawn from `rng`. Fails
    /// on an empty list or on the first body with an invalid mass.
    pub fn populate<R: Rng + ?Sized>(initial: &[InitialBody], rng: &mut R) -> Result<Self, SimError> {
        if initial.is_empty() {
            return Err(SimError::EmptyPopulation);
        }

        let bodies = initial
            .iter()
            .enumerate()
            .map(|(i, ib)| Body::new(i as u32, ib.x, ib.m.unwrap_or(DEFAULT_MASS), random_color(rng)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bodies, t: 0.0, tick: 0 })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
