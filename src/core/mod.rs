//! Core domain: camera, pause sources and the gameplay run condition.

mod resources;
mod systems;

pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_pause);
    }
}
