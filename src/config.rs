//! Configuration constants for the cube grid scene
//!
//! This module contains all configurable parameters such as grid dimensions,
//! camera placement, light levels, and rotation speeds.

use bevy::math::Vec3;
use thiserror::Error;

/// Number of cube rows in the grid
pub const GRID_ROWS: u32 = 10;

/// Number of cube columns in the grid
pub const GRID_COLUMNS: u32 = 10;

/// Length of the axes marker drawn at the origin
pub const AXES_LENGTH: f32 = 10.0;

/// Window settings
pub mod window {
    /// Window title
    pub const TITLE: &str = "cube-field";

    /// Initial window width in pixels
    pub const WIDTH: u32 = 1280;

    /// Initial window height in pixels
    pub const HEIGHT: u32 = 720;
}

/// Camera settings
pub mod camera {
    use bevy::math::Vec3;

    /// Vertical field of view in degrees
    pub const FOVY_DEGREES: f32 = 90.0;

    /// Near clip plane distance
    pub const NEAR: f32 = 0.1;

    /// Far clip plane distance
    pub const FAR: f32 = 15.0;

    /// Initial camera position
    pub const POSITION: Vec3 = Vec3::new(1.0, 1.0, 7.0);

    /// Point the camera looks at (and orbits around)
    pub const LOOK_AT: Vec3 = Vec3::ZERO;

    /// Rotation speed multiplier for mouse drag
    pub const ROTATION_SPEED: f32 = 0.005;

    /// Zoom speed multiplier for scroll wheel
    pub const ZOOM_SPEED: f32 = 0.5;

    /// Minimum camera distance from the orbit center
    pub const MIN_DISTANCE: f32 = 2.0;

    /// Maximum camera distance from the orbit center
    pub const MAX_DISTANCE: f32 = 20.0;

    /// Maximum pitch angle (radians) to prevent camera flipping
    pub const MAX_PITCH: f32 = 1.5;

    /// Minimum pitch angle (radians) to prevent camera flipping
    pub const MIN_PITCH: f32 = -1.5;
}

/// Light settings
pub mod light {
    use bevy::math::Vec3;

    /// Directional light illuminance in lux
    pub const DIRECTIONAL_ILLUMINANCE: f32 = 10_000.0;

    /// Position of the directional light, aimed at the origin
    pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// Ambient light brightness in cd/m^2
    pub const AMBIENT_BRIGHTNESS: f32 = 150.0;
}

/// Rotation stepping settings
pub mod rotation {
    /// Radians added to every cube's yaw each frame
    pub const YAW_STEP: f32 = 0.01;

    /// Radians added to every cube's pitch each frame while spinning fast
    pub const PITCH_STEP: f32 = 0.02;
}

/// Configuration errors caught before the app is built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    DegenerateGrid { rows: u32, columns: u32 },
    #[error("camera clip planes must satisfy 0 < near < far, got near={near}, far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },
    #[error("camera position {0} coincides with its orbit center")]
    DegenerateCamera(Vec3),
}

/// Validate the constant tables at startup, before any window or GPU work
pub fn validate() -> Result<(), ConfigError> {
    check(
        GRID_ROWS,
        GRID_COLUMNS,
        camera::NEAR,
        camera::FAR,
        camera::POSITION,
        camera::LOOK_AT,
    )
}

fn check(
    rows: u32,
    columns: u32,
    near: f32,
    far: f32,
    position: Vec3,
    look_at: Vec3,
) -> Result<(), ConfigError> {
    if rows == 0 || columns == 0 {
        return Err(ConfigError::DegenerateGrid { rows, columns });
    }
    if !(near > 0.0 && far > near) {
        return Err(ConfigError::InvalidClipPlanes { near, far });
    }
    if position == look_at {
        return Err(ConfigError::DegenerateCamera(position));
    }
    Ok(())
}
