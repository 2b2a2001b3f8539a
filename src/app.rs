//! Application setup
//!
//! This module assembles the Bevy app: window and log configuration,
//! resource insertion, and system scheduling.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::config::{self, light, window};
use crate::resources::{OrbitCameraState, RunState, SpinState};
use crate::systems::*;

/// Create and configure the app
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: window::TITLE.into(),
                    resolution: WindowResolution::new(window::WIDTH, window::HEIGHT),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "info,wgpu=error,naga=warn".into(),
                ..default()
            }),
    );

    // Clear color 0x333333
    app.insert_resource(ClearColor(Color::srgb_u8(0x33, 0x33, 0x33)));
    app.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: light::AMBIENT_BRIGHTNESS,
        ..default()
    });

    app.init_resource::<RunState>();
    app.init_resource::<SpinState>();
    app.init_resource::<OrbitCameraState>();

    app.add_systems(Startup, setup_scene);
    // Input systems run before the rotation step so that an event arriving
    // between frames is observed no later than the next frame's body.
    app.add_systems(Update, (handle_keyboard, track_spin, rotate_cubes).chain());
    app.add_systems(Update, (orbit_camera, draw_axes));

    info!(
        "app configured: {}x{} grid, {}x{} window",
        config::GRID_ROWS,
        config::GRID_COLUMNS,
        window::WIDTH,
        window::HEIGHT
    );
    app
}
