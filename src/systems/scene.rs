//! Scene setup system
//!
//! This module handles the one-shot setup of the 3D scene: the cube grid,
//! the camera, and the lights. It also owns the axes marker drawn each frame.

use bevy::prelude::*;

use crate::components::{GridCube, OrbitCamera};
use crate::config::{self, camera, light};

/// Setup the scene: cube grid, directional light, and camera.
///
/// Every cube shares one mesh asset and one material asset; only the handles
/// are cloned per entity. Cube positions are assigned here, once, and never
/// touched again.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!(
        "setting up scene: {}x{} cube grid",
        config::GRID_ROWS,
        config::GRID_COLUMNS
    );

    let cube_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let cube_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x67, 0xB2, 0x81),
        specular_tint: Color::WHITE,
        ..default()
    });

    for row in 0..config::GRID_ROWS {
        for column in 0..config::GRID_COLUMNS {
            commands.spawn((
                Mesh3d(cube_mesh.clone()),
                MeshMaterial3d(cube_material.clone()),
                Transform::from_translation(grid_position(
                    row,
                    column,
                    config::GRID_ROWS,
                    config::GRID_COLUMNS,
                )),
                GridCube::new(row, column),
            ));
        }
    }

    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: light::DIRECTIONAL_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(light::DIRECTIONAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera::FOVY_DEGREES.to_radians(),
            near: camera::NEAR,
            far: camera::FAR,
            ..default()
        }),
        Transform::from_translation(camera::POSITION).looking_at(camera::LOOK_AT, Vec3::Y),
        OrbitCamera,
    ));

    info!("scene setup complete");
}

/// Fixed spawn position of the (row, column) cube, centered on the origin.
///
/// The offsets use truncating integer division of the dimension, and x is
/// offset by the row count while y is offset by the column count. Both quirks
/// are part of the observed layout (for a 10x10 grid, (0, 0) sits at
/// (-5, -5, 0)).
pub fn grid_position(row: u32, column: u32, rows: u32, columns: u32) -> Vec3 {
    Vec3::new(
        column as f32 - (rows / 2) as f32,
        row as f32 - (columns / 2) as f32,
        0.0,
    )
}

/// Draws the axes marker at the origin.
pub fn draw_axes(mut gizmos: Gizmos) {
    gizmos.axes(Transform::IDENTITY, config::AXES_LENGTH);
}
