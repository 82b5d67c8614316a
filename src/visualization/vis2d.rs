use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::scenario::{Scenario, FIELD_SIZE};
use crate::simulation::vector::NVec2;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct CenterOfMassMarker;

const WINDOW_TITLE: &str = "Three Body Problem";
const HEADING_LENGTH: f32 = 1.5; // in body radii

pub fn run_2d(scenario: Scenario) {
    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: WindowResolution::new(FIELD_SIZE as f32, FIELD_SIZE as f32),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (quit_on_key_system, physics_step_system, sync_transforms_system, heading_gizmo_system).chain(),
        )
        .run();
}

/// Simulation coordinates have the origin in the top-left corner with y
/// pointing down; bevy's 2D camera is centered with y pointing up
fn to_screen(p: NVec2) -> Vec2 {
    let half = FIELD_SIZE / 2.0;
    Vec2::new((p.x - half) as f32, (half - p.y) as f32)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    let snapshot = scenario.snapshot();
    info!("run_2d: starting viewer with {} bodies", snapshot.bodies.len());

    commands.spawn(Camera2dBundle::default());

    for (i, body) in snapshot.bodies.iter().enumerate() {
        let [r, g, b] = body.color;
        let p = to_screen(body.position);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_xyz(p.x, p.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    // Center of mass, half a body radius, drawn above the bodies
    let com = to_screen(snapshot.center_of_mass);
    let com_radius = scenario.parameters.radius as f32 / 2.0;
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(com_radius))),
            material: materials.add(ColorMaterial::from(Color::WHITE)),
            transform: Transform::from_xyz(com.x, com.y, 1.0),
            ..Default::default()
        },
        CenterOfMassMarker,
    ));
}

fn quit_on_key_system(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) || keys.just_pressed(KeyCode::KeyQ) {
        info!("quit requested");
        exit.send(AppExit::Success);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    if let Err(e) = scenario.advance() {
        error!("physics step failed: {e}");
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<CenterOfMassMarker>>,
    mut com: Query<&mut Transform, With<CenterOfMassMarker>>,
) {
    let snapshot = scenario.snapshot();

    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = snapshot.bodies.get(*i) {
            let p = to_screen(b.position);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }

    let p = to_screen(snapshot.center_of_mass);
    for mut transform in &mut com {
        transform.translation.x = p.x;
        transform.translation.y = p.y;
    }
}

fn heading_gizmo_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for b in &scenario.snapshot().bodies {
        let start = to_screen(b.position);
        // flip y along with the position
        let dir = Vec2::new(b.heading.x as f32, -b.heading.y as f32);
        gizmos.line_2d(start, start + dir * b.radius as f32 * HEADING_LENGTH, Color::WHITE);
    }
}
