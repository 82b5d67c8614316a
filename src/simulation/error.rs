//! Errors raised while building a simulation
//!
//! Everything here is detected before the first tick. Once a `System` exists
//! the integrators are total and never fail.

use std::error::Error;
use std::fmt;

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// A body was given a mass that is zero, negative or not finite
    InvalidMass { id: u32, mass: f64 },
    /// Center of mass requested for a population whose masses sum to zero
    ZeroTotalMass,
    /// A population must contain at least one body
    EmptyPopulation,
    /// A numeric parameter is outside its valid range
    InvalidParameter { name: &'static str, value: f64 },
    /// The initial layout cannot place the requested number of bodies
    LayoutMismatch { layout: &'static str, expected: usize, requested: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { id, mass } => {
                write!(f, "body {id} has invalid mass {mass}; mass must be positive and finite")
            }
            SimError::ZeroTotalMass => write!(f, "total mass of the population is zero"),
            SimError::EmptyPopulation => write!(f, "a simulation needs at least one body"),
            SimError::InvalidParameter { name, value } => {
                write!(f, "parameter `{name}` has invalid value {value}")
            }
            SimError::LayoutMismatch { layout, expected, requested } => write!(
                f,
                "the {layout} layout places exactly {expected} bodies, but {requested} were requested"
            ),
        }
    }
}

impl Error for SimError {}
