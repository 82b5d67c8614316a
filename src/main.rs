use gravsim::{IntegratorConfig, Scenario, ScenarioConfig};
use gravsim::{run_2d, run_headless};
use gravsim::{bench_gravity, bench_integrators};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum IntegratorArg {
    Euler,
    Leapfrog,
}

impl From<IntegratorArg> for IntegratorConfig {
    fn from(arg: IntegratorArg) -> Self {
        match arg {
            IntegratorArg::Euler => IntegratorConfig::Euler,
            IntegratorArg::Leapfrog => IntegratorConfig::Leapfrog,
        }
    }
}

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the scenario's integrator
    #[arg(long, value_enum)]
    integrator: Option<IntegratorArg>,

    /// Override the scenario's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window, logging progress
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 5000)]
    ticks: u64,

    /// Headless log interval in ticks
    #[arg(long, default_value_t = 500)]
    log_every: u64,

    /// Print integrator timings as CSV and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_integrators()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(integrator) = args.integrator {
        scenario_cfg.engine.integrator = integrator.into();
    }
    if let Some(seed) = args.seed {
        scenario_cfg.parameters.seed = Some(seed);
    }

    let mut rng = match scenario_cfg.parameters.seed {
        Some(seed) => ChaChaRng::seed_from_u64(seed),
        None => ChaChaRng::from_entropy(),
    };
    let scenario = Scenario::build_scenario(scenario_cfg, &mut rng).context("invalid scenario")?;

    if args.headless {
        run_headless(scenario, args.ticks, args.log_every);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
