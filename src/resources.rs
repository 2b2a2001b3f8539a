//! Resource definitions
//!
//! This module contains the global resources read and written by the
//! systems: the run-state machine, the spin flag, and the orbit camera state.

use bevy::prelude::*;

use crate::config::camera;

// =============================================================================
// Input State
// =============================================================================

/// Whether the frame loop keeps scheduling itself.
///
/// `Stopped` is terminal: once entered there is no transition back, and the
/// app exit request has already been written.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}

/// Whether the secondary rotation axis is active.
///
/// Mirrors the mouse-button state: true while any button is held. Written by
/// the input system and read by the animation system later in the same frame.
#[derive(Resource, Debug, Default)]
pub struct SpinState {
    pub fast: bool,
}

// =============================================================================
// Camera Control
// =============================================================================

/// Orbit camera state for spherical coordinate camera control
#[derive(Resource)]
pub struct OrbitCameraState {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians), clamped to avoid gimbal lock
    pub pitch: f32,
    /// Distance from the camera to the center point
    pub distance: f32,
    /// The point the camera orbits around
    pub center: Vec3,
}

impl Default for OrbitCameraState {
    /// Derives the starting orbit pose from the configured camera placement
    /// so the camera begins exactly where the scene setup puts it.
    fn default() -> Self {
        let offset = camera::POSITION - camera::LOOK_AT;
        let distance = offset.length();
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            center: camera::LOOK_AT,
        }
    }
}
