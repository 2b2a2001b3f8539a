//! Camera control system
//!
//! This module implements orbit camera controls: left-button drag rotates
//! the camera around the scene center and the scroll wheel zooms.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::components::OrbitCamera;
use crate::config::camera::*;
use crate::resources::OrbitCameraState;

/// Update the camera transform from accumulated mouse input.
pub fn orbit_camera(
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut orbit: ResMut<OrbitCameraState>,
    mut cameras: Query<&mut Transform, With<OrbitCamera>>,
) {
    // Apply rotation while the left button is held
    if buttons.pressed(MouseButton::Left) && motion.delta != Vec2::ZERO {
        orbit.yaw -= motion.delta.x * ROTATION_SPEED;
        orbit.pitch -= motion.delta.y * ROTATION_SPEED;

        // Clamp pitch to prevent camera flipping
        orbit.pitch = orbit.pitch.clamp(MIN_PITCH, MAX_PITCH);
    }

    // Apply zoom from the scroll wheel
    if scroll.delta.y != 0.0 {
        orbit.distance -= scroll.delta.y * ZOOM_SPEED;
        orbit.distance = orbit.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    // Rebuild the camera transform from spherical coordinates
    for mut transform in cameras.iter_mut() {
        let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
        let y = orbit.distance * orbit.pitch.sin();
        let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();

        let position = orbit.center + Vec3::new(x, y, z);
        *transform = Transform::from_translation(position).looking_at(orbit.center, Vec3::Y);
    }
}
