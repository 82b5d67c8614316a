use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{euler_integrator, leapfrog_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::error::SimError;
use crate::simulation::states::{InitialBody, System};
use crate::simulation::vector::NVec2;

/// Build a deterministic population of `n` bodies spread over the field
fn make_system(n: usize) -> Result<System, SimError> {
    let initial: Vec<InitialBody> = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            InitialBody::at(360.0 + (i_f * 0.37).sin() * 300.0, 360.0 + (i_f * 0.13).cos() * 300.0)
        })
        .collect();

    // colors only
    let mut rng = ChaChaRng::seed_from_u64(42);
    System::populate(&initial, &mut rng)
}

fn gravity(params: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: params.G,
        radius: params.radius,
    })
}

/// Time one full O(N^2) acceleration evaluation for a range of N
pub fn bench_gravity() -> Result<(), SimError> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let params = Parameters::default();
    let forces = gravity(&params);

    println!("N,accel_ms");
    for n in ns {
        let sys = make_system(n)?;
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        forces.accumulate_accels(0.0, &sys, &mut out);

        let t0 = Instant::now();
        forces.accumulate_accels(0.0, &sys, &mut out);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}

/// Per-step cost of both integrators for a range of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_integrators() -> Result<(), SimError> {
    let params = Parameters::default();
    let forces = gravity(&params);

    println!("N,euler_ms,leapfrog_ms");

    for n in (100..=2000).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys_euler = make_system(n)?;
        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys_euler, &forces);
        }
        let ms_euler = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys_leap = make_system(n)?;
        let t1 = Instant::now();
        for _ in 0..steps {
            leapfrog_integrator(&mut sys_leap, &forces, &params);
        }
        let ms_leap = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_euler, ms_leap);
    }
    Ok(())
}
