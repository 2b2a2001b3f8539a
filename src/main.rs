//! cube-field: a Phong-shaded grid of rotating cubes
//!
//! A 10x10 grid of cubes sharing one geometry and one Phong-style material,
//! lit by a directional and an ambient light. Every frame each cube yaws by a
//! fixed step; holding a mouse button adds a pitch step. Left-drag orbits the
//! camera, the scroll wheel zooms, and Escape stops the loop.
//!
//! # Module Structure
//!
//! - `config`: constant tables and startup validation
//! - `components`: ECS components (the grid cube, the camera marker)
//! - `resources`: run state, spin flag, orbit camera state
//! - `systems`: scene setup, animation, input, and camera control
//! - `app`: application assembly

mod app;
mod components;
mod config;
mod resources;
mod systems;

use anyhow::Context;
use bevy::app::AppExit;

fn main() -> anyhow::Result<()> {
    config::validate().context("invalid scene configuration")?;

    match app::create_app().run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with error code {code}"),
    }
}
