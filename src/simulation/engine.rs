//! High-level runtime engine settings
//!
//! Selects the integrator and the initial layout used when building and
//! running a `Scenario`

use crate::configuration::config::{IntegratorConfig, LayoutConfig};

#[derive(Debug, Clone, Copy)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or leapfrog
    pub layout: LayoutConfig, // random or triangle, unused when bodies are listed
}
