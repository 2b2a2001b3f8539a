//! Animation system
//!
//! This module contains the per-frame rotation stepping for the cube grid.

use bevy::prelude::*;

use crate::components::GridCube;
use crate::config::rotation::{PITCH_STEP, YAW_STEP};
use crate::resources::SpinState;

/// Advance every cube's rotation by the per-frame steps.
///
/// Yaw advances unconditionally every frame; pitch advances only while the
/// spin flag is held. The steps are fixed per frame, not time-scaled, so the
/// spin rate follows the display refresh cadence. The transform's rotation is
/// rebuilt from the accumulated angles; its translation is never written.
pub fn rotate_cubes(spin: Res<SpinState>, mut cubes: Query<(&mut GridCube, &mut Transform)>) {
    for (mut cube, mut transform) in cubes.iter_mut() {
        cube.yaw += YAW_STEP;
        if spin.fast {
            cube.pitch += PITCH_STEP;
        }
        transform.rotation = Quat::from_rotation_y(cube.yaw) * Quat::from_rotation_x(cube.pitch);
    }
}
