//! Immutable per-tick views of the simulation
//!
//! The physics side produces a [`Snapshot`] after each tick and hands it to
//! any number of [`Observer`]s. Renderers and loggers only ever see these
//! copies, never the live `System`.

use super::diagnostics::center_of_mass;
use super::error::SimError;
use super::states::{Rgb, System};
use super::vector::{NVec2, Vec2Ext};

#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub id: u32,
    pub position: NVec2,
    pub velocity: NVec2,
    pub heading: NVec2, // unit velocity, zero for a body at rest
    pub color: Rgb,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub t: f64,
    pub bodies: Vec<BodyView>,
    pub center_of_mass: NVec2,
}

impl Snapshot {
    /// Copy out the state of `sys`. `radius` is the shared display radius and
    /// `epsilon` the floor used when normalizing velocities into headings.
    pub fn capture(sys: &System, radius: f64, epsilon: f64) -> Result<Self, SimError> {
        let center_of_mass = center_of_mass(&sys.bodies)?;
        let bodies = sys
            .bodies
            .iter()
            .map(|b| BodyView {
                id: b.id,
                position: b.x,
                velocity: b.v,
                heading: b.v.normalize_floored(epsilon),
                color: b.color,
                radius,
            })
            .collect();

        Ok(Self {
            tick: sys.tick,
            t: sys.t,
            bodies,
            center_of_mass,
        })
    }
}

/// Consumer of per-tick snapshots
pub trait Observer {
    fn observe(&mut self, snapshot: &Snapshot);
}

/// Keeps every snapshot it is shown
impl Observer for Vec<Snapshot> {
    fn observe(&mut self, snapshot: &Snapshot) {
        self.push(snapshot.clone());
    }
}

/// Adapts a closure into an observer
pub struct FnObserver<F>(pub F);

impl<F: FnMut(&Snapshot)> Observer for FnObserver<F> {
    fn observe(&mut self, snapshot: &Snapshot) {
        (self.0)(snapshot)
    }
}
