//! Read-only aggregate quantities of a `System`
//!
//! The center of mass is what the viewer draws every frame. Momentum and the
//! center-of-mass velocity are the conserved quantities the tests check.

use super::error::SimError;
use super::states::Body;
use super::vector::NVec2;

pub fn total_mass(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| b.m).sum()
}

/// Mass-weighted mean position, `sum(m_i * x_i) / sum(m_i)`
pub fn center_of_mass(bodies: &[Body]) -> Result<NVec2, SimError> {
    let m = positive_total_mass(bodies)?;
    let weighted = bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.m * b.x);
    Ok(weighted / m)
}

/// `sum(m_i * v_i)`
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.m * b.v)
}

/// Velocity of the center of mass, total momentum over total mass
pub fn center_of_mass_velocity(bodies: &[Body]) -> Result<NVec2, SimError> {
    let m = positive_total_mass(bodies)?;
    Ok(total_momentum(bodies) / m)
}

fn positive_total_mass(bodies: &[Body]) -> Result<f64, SimError> {
    let m = total_mass(bodies);
    if m > 0.0 {
        Ok(m)
    } else {
        Err(SimError::ZeroTotalMass)
    }
}
