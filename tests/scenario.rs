use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use gravsim::simulation::initial::{equilateral_triangle_centered, random_positions};
use gravsim::{FnObserver, IntegratorConfig, LayoutConfig, Scenario, ScenarioConfig, SimError, Snapshot};

fn parse(yaml: &str) -> ScenarioConfig {
    serde_yaml::from_str(yaml).unwrap()
}

fn build(yaml: &str, seed: u64) -> Result<Scenario, SimError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    Scenario::build_scenario(parse(yaml), &mut rng)
}

const TWO_BODY: &str = r#"
engine:
  integrator: "euler"
bodies:
  - x: [ 100.0, 300.0 ]
    m: 1.0e11
  - x: [ 500.0, 300.0 ]
"#;

// ==================================================================================
// Configuration
// ==================================================================================

#[test]
fn missing_keys_take_defaults() {
    let cfg = parse("{}");
    assert_eq!(cfg.engine.integrator, IntegratorConfig::Leapfrog);
    assert_eq!(cfg.engine.layout, LayoutConfig::Random);
    assert_eq!(cfg.parameters.n_bodies, 4);
    assert_relative_eq!(cfg.parameters.G, 6.6743e-11);
    assert_relative_eq!(cfg.parameters.radius, 25.0);
    assert_relative_eq!(cfg.parameters.epsilon, 1e-8);
    assert_relative_eq!(cfg.parameters.dt, 1.0);
    assert!(cfg.parameters.seed.is_none());
    assert!(cfg.bodies.is_none());
}

#[test]
fn full_document_parses() {
    let cfg = parse(
        r#"
engine:
  integrator: "euler"
  layout: "triangle"
parameters:
  n_bodies: 3
  G: 1.0
  radius: 5.0
  epsilon: 1.0e-6
  dt: 0.5
  seed: 42
  side: 150.0
"#,
    );
    assert_eq!(cfg.engine.integrator, IntegratorConfig::Euler);
    assert_eq!(cfg.engine.layout, LayoutConfig::Triangle);
    assert_eq!(cfg.parameters.n_bodies, 3);
    assert_eq!(cfg.parameters.seed, Some(42));
    assert_relative_eq!(cfg.parameters.side, 150.0);
    assert_relative_eq!(cfg.parameters.dt, 0.5);
}

#[test]
fn unknown_integrator_is_rejected() {
    let res: Result<ScenarioConfig, _> = serde_yaml::from_str("engine:\n  integrator: \"rk4\"\n");
    assert!(res.is_err());
}

#[test]
fn bundled_scenarios_parse() {
    for yaml in [
        include_str!("../scenarios/default.yaml"),
        include_str!("../scenarios/euler.yaml"),
        include_str!("../scenarios/triangle.yaml"),
        include_str!("../scenarios/two_body.yaml"),
    ] {
        let cfg = parse(yaml);
        let mut rng = ChaChaRng::seed_from_u64(0);
        assert!(Scenario::build_scenario(cfg, &mut rng).is_ok());
    }
}

// ==================================================================================
// Scenario construction
// ==================================================================================

#[test]
fn explicit_bodies_override_layout_and_count() {
    let scenario = build(TWO_BODY, 3).unwrap();
    assert_eq!(scenario.system.len(), 2);
    assert_eq!(scenario.parameters.n_bodies, 2);
    assert_eq!(scenario.system.bodies[1].m, 1e11);
    assert_eq!(scenario.engine.integrator, IntegratorConfig::Euler);
}

#[test]
fn random_layout_is_reproducible_from_seed() {
    let a = build("parameters:\n  n_bodies: 5\n", 11).unwrap();
    let b = build("parameters:\n  n_bodies: 5\n", 11).unwrap();
    assert_eq!(a.system.bodies, b.system.bodies);
}

#[test]
fn random_positions_sit_on_the_grid() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let bodies = random_positions(50, &mut rng);
    assert_eq!(bodies.len(), 50);

    for b in bodies {
        for c in [b.x.x, b.x.y] {
            assert!((100.0..=600.0).contains(&c), "coordinate {c} off the field");
            assert_eq!(c % 100.0, 0.0, "coordinate {c} off the grid");
        }
        assert!(b.m.is_none());
    }
}

#[test]
fn triangle_is_centered_and_equilateral() {
    let pts = equilateral_triangle_centered(360.0, 360.0, 200.0);
    let side = |i: usize, j: usize| (pts[i].x - pts[j].x).magnitude();

    assert_relative_eq!(side(0, 1), 200.0, max_relative = 1e-12);
    assert_relative_eq!(side(1, 2), 200.0, max_relative = 1e-12);
    assert_relative_eq!(side(2, 0), 200.0, max_relative = 1e-12);

    let scenario = build("engine:\n  layout: \"triangle\"\nparameters:\n  n_bodies: 3\n", 1).unwrap();
    let com = scenario.snapshot().center_of_mass;
    assert_relative_eq!(com.x, 360.0, epsilon = 1e-9);
    assert_relative_eq!(com.y, 360.0, epsilon = 1e-9);
}

#[test]
fn triangle_layout_needs_three_bodies() {
    let err = build("engine:\n  layout: \"triangle\"\nparameters:\n  n_bodies: 4\n", 1)
        .err()
        .unwrap();
    assert_eq!(err, SimError::LayoutMismatch { layout: "triangle", expected: 3, requested: 4 });
}

#[test]
fn invalid_parameters_fail_before_any_tick() {
    let err = build("parameters:\n  radius: 0.0\n", 1).err().unwrap();
    assert_eq!(err, SimError::InvalidParameter { name: "radius", value: 0.0 });

    let err = build("parameters:\n  epsilon: -1.0\n", 1).err().unwrap();
    assert_eq!(err, SimError::InvalidParameter { name: "epsilon", value: -1.0 });

    let err = build("parameters:\n  n_bodies: 0\n", 1).err().unwrap();
    assert_eq!(err, SimError::EmptyPopulation);
}

#[test]
fn zero_mass_body_is_rejected() {
    let err = build("bodies:\n  - x: [0.0, 0.0]\n  - x: [50.0, 0.0]\n    m: 0.0\n", 1)
        .err()
        .unwrap();
    assert_eq!(err, SimError::InvalidMass { id: 1, mass: 0.0 });
}

// ==================================================================================
// Snapshots and observers
// ==================================================================================

#[test]
fn initial_snapshot_describes_bodies_at_rest() {
    let scenario = build(TWO_BODY, 3).unwrap();
    let snap = scenario.snapshot();

    assert_eq!(snap.tick, 0);
    assert_eq!(snap.bodies.len(), 2);
    assert_relative_eq!(snap.center_of_mass.x, 300.0);
    assert_relative_eq!(snap.center_of_mass.y, 300.0);
    for b in &snap.bodies {
        assert_eq!(b.heading.magnitude(), 0.0);
        assert_relative_eq!(b.radius, 25.0);
    }
}

#[test]
fn advance_produces_one_snapshot_per_tick() {
    let mut scenario = build(TWO_BODY, 3).unwrap();
    let mut seen: Vec<Snapshot> = Vec::new();

    scenario.run(10, &mut seen).unwrap();

    let ticks: Vec<u64> = seen.iter().map(|s| s.tick).collect();
    assert_eq!(ticks, (1..=10).collect::<Vec<_>>());
    assert_eq!(scenario.snapshot(), seen.last().unwrap());

    // bodies fall toward each other, headings are unit vectors along x
    let last = seen.last().unwrap();
    assert_relative_eq!(last.bodies[0].heading.x, 1.0, max_relative = 1e-12);
    assert_relative_eq!(last.bodies[1].heading.x, -1.0, max_relative = 1e-12);
    // equal masses, symmetric pull: center of mass stays put
    assert_relative_eq!(last.center_of_mass.x, 300.0, max_relative = 1e-12);
}

#[test]
fn first_euler_tick_matches_reference_speed() {
    let mut scenario = build(TWO_BODY, 3).unwrap();
    let snap = scenario.advance().unwrap();

    assert_relative_eq!(snap.bodies[0].velocity.x, 4.1714375e-5, max_relative = 1e-12);
    assert_relative_eq!(snap.bodies[1].velocity.x, -4.1714375e-5, max_relative = 1e-12);
    assert_relative_eq!(snap.t, 1.0);
}

#[test]
fn closure_observer_sees_every_tick() {
    let mut scenario = build("parameters:\n  n_bodies: 3\n", 8).unwrap();
    let mut count = 0;
    scenario.run(25, &mut FnObserver(|_: &Snapshot| count += 1)).unwrap();
    assert_eq!(count, 25);
}
