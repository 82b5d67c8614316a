//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G`
//! - body radius, which doubles as the softening floor of the force law
//! - normalization floor `epsilon`
//! - leapfrog step size `dt`
//! - population size and optional RNG seed

use super::error::SimError;
use super::vector::EPSILON;

pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;
pub const DEFAULT_RADIUS: f64 = 25.0;
pub const DEFAULT_N_BODIES: usize = 4;
pub const DEFAULT_DT: f64 = 1.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub n_bodies: usize, // population size
    pub G: f64, // gravitational constant
    pub radius: f64, // rendered radius, also the minimum separation in the force law
    pub epsilon: f64, // minimum denominator for normalization
    pub dt: f64, // leapfrog step size
    pub seed: Option<u64>, // deterministic seed, entropy when absent
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            n_bodies: DEFAULT_N_BODIES,
            G: GRAVITATIONAL_CONSTANT,
            radius: DEFAULT_RADIUS,
            epsilon: EPSILON,
            dt: DEFAULT_DT,
            seed: None,
        }
    }
}

impl Parameters {
    /// Reject values that would put NaN or infinity into the first tick.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.G.is_finite() && self.G >= 0.0) {
            return Err(SimError::InvalidParameter { name: "G", value: self.G });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SimError::InvalidParameter { name: "radius", value: self.radius });
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SimError::InvalidParameter { name: "epsilon", value: self.epsilon });
        }
        if !self.dt.is_finite() {
            return Err(SimError::InvalidParameter { name: "dt", value: self.dt });
        }
        Ok(())
    }
}
