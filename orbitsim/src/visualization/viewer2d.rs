use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::params::AU;
use crate::simulation::states::{NVec2, Rgb};
use crate::simulation::system::Simulation;

#[derive(Resource)]
struct SimulationResource(Simulation);

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct DistanceLabel(pub usize);

/// Pixels per meter, 1 AU = 250 px
const SCALE: f64 = 250.0 / AU;
const LABEL_OFFSET: f32 = 20.0;

pub fn run_2d(simulation: Simulation) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", simulation.bodies().len());

    App::new()
        .insert_resource(SimulationResource(simulation))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit Simulation of Solar System".into(),
                resolution: WindowResolution::new(1920.0, 1080.0),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_trails_system).chain())
        .run();
}

// simulation meters -> screen space, camera sits on the origin
fn to_screen(x: NVec2) -> Vec2 {
    Vec2::new((x.x * SCALE) as f32, (x.y * SCALE) as f32)
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

fn setup_bodies_system(mut commands: Commands, sim: Res<SimulationResource>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in sim.0.bodies().iter().enumerate() {
        let p = to_screen(body.position());

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius() as f32))),
                material: materials.add(ColorMaterial::from(to_color(body.color()))),
                transform: Transform::from_xyz(p.x, p.y, 1.0),
                ..default()
            },
            BodyIndex(i),
        ));

        if !body.is_anchor() {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        "",
                        TextStyle {
                            font_size: 18.0,
                            color: Color::WHITE,
                            ..default()
                        },
                    ),
                    transform: Transform::from_xyz(p.x, p.y + body.radius() as f32 + LABEL_OFFSET, 2.0),
                    ..default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut sim: ResMut<SimulationResource>, mut exit: EventWriter<AppExit>) {
    if let Err(e) = sim.0.step() {
        error!("simulation failed: {e}");
        exit.send(AppExit::error());
    }
}

fn sync_transforms_system(
    sim: Res<SimulationResource>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<DistanceLabel>>,
    mut labels: Query<(&DistanceLabel, &mut Transform, &mut Text), Without<BodyIndex>>,
) {
    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = sim.0.body(*i) {
            let p = to_screen(b.position());
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }

    for (DistanceLabel(i), mut transform, mut text) in &mut labels {
        if let Some(b) = sim.0.body(*i) {
            let p = to_screen(b.position());
            transform.translation.x = p.x;
            transform.translation.y = p.y + b.radius() as f32 + LABEL_OFFSET;
            if let Some(d) = b.distance_to_anchor() {
                text.sections[0].value = format!("{:.2} km", d / 1000.0);
            }
        }
    }
}

fn draw_trails_system(sim: Res<SimulationResource>, mut gizmos: Gizmos) {
    for b in sim.0.bodies() {
        if b.trail().len() > 1 {
            gizmos.linestrip_2d(b.trail().iter().map(|p| to_screen(*p)), to_color(b.color()));
        }
    }
}
