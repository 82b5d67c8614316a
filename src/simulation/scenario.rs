//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) plus a random source and produces a
//! runtime bundle (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - the most recent `Snapshot`
//!
//! The scenario is inserted into Bevy as a `Resource` and stepped by the
//! viewer or the headless runner; both only read its snapshots

use bevy::log::{debug, info};
use bevy::prelude::Resource;
use rand::Rng;

use crate::configuration::config::{BodyConfig, LayoutConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::initial::{equilateral_triangle_centered, random_positions};
use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::snapshot::{Observer, Snapshot};
use crate::simulation::states::{InitialBody, System};

/// Width and height of the square field initial conditions are placed in,
/// in screen units
pub const FIELD_SIZE: f64 = 720.0;

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, the
/// set of active force laws and the snapshot of the last completed tick
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    latest: Snapshot,
}

impl Scenario {
    /// Validate `cfg`, place the bodies and register Newtonian gravity.
    ///
    /// `rng` supplies random positions (for the random layout) and body colors.
    pub fn build_scenario<R: Rng + ?Sized>(cfg: ScenarioConfig, rng: &mut R) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let mut parameters = Parameters {
            n_bodies: p_cfg.n_bodies,
            G: p_cfg.G,
            radius: p_cfg.radius,
            epsilon: p_cfg.epsilon,
            dt: p_cfg.dt,
            seed: p_cfg.seed,
        };
        parameters.validate()?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            integrator: cfg.engine.integrator,
            layout: cfg.engine.layout,
        };

        // Initial conditions: explicit bodies win over the layout
        let initial: Vec<InitialBody> = match &cfg.bodies {
            Some(bodies) => bodies.iter().map(|bc: &BodyConfig| InitialBody {
                x: [bc.x[0], bc.x[1]].into(),
                m: bc.m,
            }).collect(),
            None => match engine.layout {
                LayoutConfig::Random => random_positions(parameters.n_bodies, rng),
                LayoutConfig::Triangle => {
                    if parameters.n_bodies != 3 {
                        return Err(SimError::LayoutMismatch {
                            layout: "triangle",
                            expected: 3,
                            requested: parameters.n_bodies,
                        });
                    }
                    let center = FIELD_SIZE / 2.0;
                    equilateral_triangle_centered(center, center, p_cfg.side)
                }
            },
        };
        parameters.n_bodies = initial.len();

        let system = System::populate(&initial, rng)?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            radius: parameters.radius,
        });

        let latest = Snapshot::capture(&system, parameters.radius, parameters.epsilon)?;

        info!(
            "built scenario: {} bodies, {:?} integrator, dt = {}",
            system.len(),
            engine.integrator,
            parameters.dt
        );
        for b in &system.bodies {
            debug!("body {} at ({}, {}), m = {}, color = {:?}", b.id, b.x.x, b.x.y, b.m, b.color);
        }

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            latest,
        })
    }

    /// Snapshot of the last completed tick (or of the initial state)
    pub fn snapshot(&self) -> &Snapshot {
        &self.latest
    }

    /// Run one tick of the configured integrator and capture the result
    pub fn advance(&mut self) -> Result<&Snapshot, SimError> {
        let Scenario {
            engine,
            parameters,
            system,
            forces,
            ..
        } = self;

        step(&engine.integrator, system, forces, parameters);
        self.latest = Snapshot::capture(&self.system, self.parameters.radius, self.parameters.epsilon)?;
        Ok(&self.latest)
    }

    /// Advance `ticks` times, showing every resulting snapshot to `observer`
    pub fn run<O: Observer + ?Sized>(&mut self, ticks: u64, observer: &mut O) -> Result<(), SimError> {
        for _ in 0..ticks {
            let snapshot = self.advance()?;
            observer.observe(snapshot);
        }
        Ok(())
    }
}
