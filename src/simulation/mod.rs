pub mod vector;
pub mod error;
pub mod states;
pub mod initial;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod diagnostics;
pub mod snapshot;
pub mod scenario;
