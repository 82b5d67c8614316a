//! Windowless runner
//!
//! Steps the scenario on bevy's `MinimalPlugins` loop for a fixed number of
//! ticks and reports progress through the log instead of drawing.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;
use crate::simulation::snapshot::{Observer, Snapshot};

#[derive(Resource)]
struct TickLimit(u64);

/// Observer that logs a one-line summary every `every` ticks
#[derive(Resource)]
pub struct SnapshotLogger {
    pub every: u64,
}

impl Observer for SnapshotLogger {
    fn observe(&mut self, snapshot: &Snapshot) {
        if self.every == 0 || snapshot.tick % self.every != 0 {
            return;
        }
        let max_speed = snapshot
            .bodies
            .iter()
            .map(|b| b.velocity.magnitude())
            .fold(0.0, f64::max);

        info!(
            "tick {:>6}  t = {:>10.3}  com = ({:.3}, {:.3})  max |v| = {:.6}",
            snapshot.tick, snapshot.t, snapshot.center_of_mass.x, snapshot.center_of_mass.y, max_speed
        );
    }
}

pub fn run_headless(scenario: Scenario, ticks: u64, log_every: u64) {
    App::new()
        .insert_resource(scenario)
        .insert_resource(TickLimit(ticks))
        .insert_resource(SnapshotLogger { every: log_every })
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)))
        .add_plugins(LogPlugin::default())
        .add_systems(Update, headless_step_system)
        .run();
}

fn headless_step_system(
    mut scenario: ResMut<Scenario>,
    mut logger: ResMut<SnapshotLogger>,
    limit: Res<TickLimit>,
    mut exit: EventWriter<AppExit>,
) {
    if scenario.snapshot().tick >= limit.0 {
        info!("run_headless: finished {} ticks", limit.0);
        exit.send(AppExit::Success);
        return;
    }

    match scenario.advance() {
        Ok(snapshot) => logger.observe(snapshot),
        Err(e) => {
            error!("physics step failed: {e}");
            exit.send(AppExit::error());
        }
    }
}
