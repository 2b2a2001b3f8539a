//! Component definitions
//!
//! This module contains the component markers and data structures used
//! to tag and identify entities in the ECS.

use bevy::prelude::*;

/// One cube cell of the grid.
///
/// The (row, column) pair is fixed at spawn, as is the entity's position.
/// The rotation angles are the only state mutated after setup; both are in
/// radians and grow without bound (no modular wrapping, f32 precision is
/// ample for a demo session).
#[derive(Component, Debug)]
pub struct GridCube {
    /// Grid row index
    pub row: u32,
    /// Grid column index
    pub column: u32,
    /// Rotation angle about the vertical axis
    pub yaw: f32,
    /// Rotation angle about the horizontal axis
    pub pitch: f32,
}

impl GridCube {
    pub fn new(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// Marker component for the camera driven by the orbit control system
#[derive(Component)]
pub struct OrbitCamera;
