//! Content domain: data-driven motion tuning loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{BodyDef, MotionDefaults};
pub use loader::{ContentLoadError, load_motion_defaults, parse_motion_defaults};
pub use validation::{ValidationError, validate_motion_defaults};

use bevy::prelude::*;
use std::path::Path;

/// Default location of the motion tuning file.
pub const MOTION_DEFAULTS_PATH: &str = "assets/data/motion.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionDefaults>()
            .add_systems(Startup, load_motion_content);
    }
}

fn load_motion_content(mut defaults: ResMut<MotionDefaults>) {
    let loaded = match load_motion_defaults(Path::new(MOTION_DEFAULTS_PATH)) {
        Ok(loaded) => {
            info!("Loaded motion defaults from {}", MOTION_DEFAULTS_PATH);
            loaded
        }
        Err(e) => {
            warn!("{}; using built-in motion defaults", e);
            MotionDefaults::default()
        }
    };

    for error in validate_motion_defaults(&loaded) {
        warn!("Motion content: {}", error);
    }

    *defaults = loaded;
}
