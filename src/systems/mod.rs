//! Systems
//!
//! This module contains the systems that build the scene and drive the
//! per-frame animation and input handling.

pub mod animation;
pub mod camera;
pub mod input;
pub mod scene;

pub use animation::rotate_cubes;
pub use camera::orbit_camera;
pub use input::{handle_keyboard, track_spin};
pub use scene::{draw_axes, setup_scene};
