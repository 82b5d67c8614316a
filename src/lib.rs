pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::vector::{NVec2, Vec2Ext, EPSILON};
pub use simulation::error::SimError;
pub use simulation::states::{Body, System, InitialBody, Rgb, DEFAULT_MASS};
pub use simulation::initial::{random_positions, random_color, equilateral_triangle_centered};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{step, euler_integrator, leapfrog_integrator, LEAPFROG_DRIFT_DIVISOR};
pub use simulation::diagnostics::{center_of_mass, center_of_mass_velocity, total_mass, total_momentum};
pub use simulation::snapshot::{Snapshot, BodyView, Observer, FnObserver};
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, LayoutConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::{vis2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::{bench_gravity, bench_integrators};
