//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the [`AccelSet`] that sums several terms,
//! and direct Newtonian gravity with a distance floor.

use rayon::prelude::*;

use crate::simulation::states::{Body, System};
use crate::simulation::vector::NVec2;

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }

    /// Compute total forces at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body and
/// must only read `sys`, so every body sees the same pre-tick state
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);

    /// Force contribution, `m_i * a_i` unless the term knows better
    fn force(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        let mut acc = vec![NVec2::zeros(); out.len()];
        self.acceleration(t, sys, &mut acc);
        for ((f, a), b) in out.iter_mut().zip(acc.iter()).zip(sys.bodies.iter()) {
            *f += b.m * *a;
        }
    }
}

/// Newtonian gravity with a hard distance floor
/// Separations below `radius` are treated as exactly `radius`, so two bodies
/// sitting on top of each other produce a finite pull instead of a singularity
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub radius: f64, // minimum separation
}

impl NewtonianGravity {
    /// Squared separation of `subject` and `source`, floored at radius^2,
    /// together with the displacement from subject to source
    fn floored_separation(&self, subject: &Body, source: &Body) -> (NVec2, f64) {
        let r = source.x - subject.x;
        let d2 = (r.x * r.x + r.y * r.y).max(self.radius * self.radius);
        (r, d2)
    }

    /// |F| = G * m_a * m_b / d^2 with the floored d^2
    pub fn force_magnitude(&self, subject: &Body, source: &Body) -> f64 {
        let (_, d2) = self.floored_separation(subject, source);
        self.G * subject.m * source.m / d2
    }

    /// Force on `subject` exerted by `source`
    pub fn pair_force(&self, subject: &Body, source: &Body) -> NVec2 {
        let (r, d2) = self.floored_separation(subject, source);
        let d = d2.sqrt();
        let f = self.G * subject.m * source.m / d2;
        f * (r / d)
    }

    /// Acceleration of `subject` caused by `source`
    pub fn pair_acceleration(&self, subject: &Body, source: &Body) -> NVec2 {
        let (r, d2) = self.floored_separation(subject, source);
        let d = d2.sqrt();
        let f = self.G * subject.m * source.m / d2;
        f * (r / d) / subject.m
    }

    /// Sum of pair forces on body `i` from every other body
    pub fn net_force(&self, i: usize, sys: &System) -> NVec2 {
        let subject = &sys.bodies[i];
        sys.bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(NVec2::zeros(), |acc, (_, source)| acc + self.pair_force(subject, source))
    }

    /// Sum of pair accelerations on body `i` from every other body
    pub fn net_acceleration(&self, i: usize, sys: &System) -> NVec2 {
        let subject = &sys.bodies[i];
        sys.bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(NVec2::zeros(), |acc, (_, source)| acc + self.pair_acceleration(subject, source))
    }
}

impl Acceleration for NewtonianGravity {
    // Every ordered pair (i, j), i != j, is evaluated. Subjects are independent
    // of each other, so they are split across the rayon pool.
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, a)| *a += self.net_acceleration(i, sys));
    }

    // Sums raw forces; the caller divides by the subject mass afterwards.
    fn force(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, f)| *f += self.net_force(i, sys));
    }
}
