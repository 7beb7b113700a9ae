//! Data definitions for RON content files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{MotionTuning, PhysicsConstants};

/// Everything needed to build the player's motion controller.
/// Missing fields fall back to the built-in defaults.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionDefaults {
    pub tuning: MotionTuning,
    pub physics: PhysicsConstants,
    pub body: BodyDef,
}

/// Character box and spawn location.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BodyDef {
    pub width: f32,
    pub height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            width: 24.0,
            height: 48.0,
            spawn_x: 0.0,
            spawn_y: 100.0,
        }
    }
}

impl BodyDef {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.spawn_y)
    }
}
