use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::configuration::config::ViewConfig;
use crate::simulation::driver::Simulation;

#[derive(Component)]
struct BodyIndex(pub usize);

const WINDOW_WIDTH: f32 = 1600.0;
const WINDOW_HEIGHT: f32 = 900.0;
const VIEW_WIDTH: f64 = 16.0; // view units across the window (16:9)

const FOLLOW_ZOOM: f64 = 20.0; // view scale = radius * FOLLOW_ZOOM while following a body
const ZOOM_RATE: f64 = 0.002; // F1 / F2, per frame

/// Camera state; `follow == None` is the free camera
#[derive(Resource, Debug)]
struct ViewState {
    draw_scale: f64,
    view_scale: f64,
    pan: Vec2,
    follow: Option<usize>,
}

pub fn run_2d(simulation: Simulation, view: ViewConfig) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", simulation.bodies().len());

    App::new()
        .insert_resource(simulation)
        .insert_resource(ViewState {
            draw_scale: view.draw_scale,
            view_scale: view.view_scale,
            pan: Vec2::ZERO,
            follow: None,
        })
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity Simulation".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                camera_target_system,
                camera_motion_system,
                sync_transforms_system,
            )
                .chain(),
        )
        .run();
}

fn setup_bodies_system(mut commands: Commands, simulation: Res<Simulation>, view: Res<ViewState>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in simulation.bodies().iter().enumerate() {
        let radius_screen = (body.radius * view.draw_scale) as f32;
        let [r, g, b] = body.color;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_xyz(body.x.x as f32, body.x.y as f32, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    simulation.log_summary();
}

/// Runs all sub-steps for the time elapsed since the previous frame
fn physics_step_system(time: Res<Time>, mut simulation: ResMut<Simulation>) {
    simulation.tick(time.delta_seconds_f64());
}

/// Right click follows the next body, left click the previous one or frees the camera
fn camera_target_system(mouse: Res<ButtonInput<MouseButton>>, simulation: Res<Simulation>, mut view: ResMut<ViewState>) {
    let n = simulation.bodies().len();
    let before = view.follow;

    if mouse.just_pressed(MouseButton::Right) {
        view.follow = match view.follow {
            None if n > 0 => Some(0),
            Some(i) if i + 1 < n => Some(i + 1),
            other => other,
        };
    } else if mouse.just_pressed(MouseButton::Left) {
        view.follow = match view.follow {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    if view.follow != before {
        match view.follow {
            Some(i) => info!("camera following body {i}"),
            None => info!("camera free"),
        }
    }
}

fn camera_motion_system(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    simulation: Res<Simulation>,
    mut view: ResMut<ViewState>,
    mut camera: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    let Ok((mut transform, mut projection)) = camera.get_single_mut() else {
        return;
    };
    let view = &mut *view;

    let center = match view.follow.and_then(|i| simulation.bodies().get(i)) {
        Some(body) => {
            // zoom stays at the followed body's scale after the camera is freed
            view.view_scale = body.radius * FOLLOW_ZOOM;
            Vec2::new(body.x.x as f32, body.x.y as f32)
        }
        None => {
            let mut dir = Vec2::ZERO;
            if keys.pressed(KeyCode::KeyA) {
                dir.x -= 1.0;
            }
            if keys.pressed(KeyCode::KeyD) {
                dir.x += 1.0;
            }
            if keys.pressed(KeyCode::KeyW) {
                dir.y += 1.0;
            }
            if keys.pressed(KeyCode::KeyS) {
                dir.y -= 1.0;
            }
            if keys.pressed(KeyCode::F1) {
                view.view_scale += view.view_scale * ZOOM_RATE;
            }
            if keys.pressed(KeyCode::F2) {
                view.view_scale -= view.view_scale * ZOOM_RATE;
            }

            // diagonal pans are not faster
            let step = dir.normalize_or_zero() * (view.view_scale * time.delta_seconds_f64()) as f32;
            view.pan += step;
            view.pan.round()
        }
    };

    transform.translation.x = center.x;
    transform.translation.y = center.y;
    projection.scale = (VIEW_WIDTH * view.view_scale / WINDOW_WIDTH as f64) as f32;
}

fn sync_transforms_system(simulation: Res<Simulation>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = simulation.bodies().get(*i) {
            transform.translation.x = b.x.x as f32;
            transform.translation.y = b.x.y as f32;
        }
    }
}
