//! Movement domain: markers and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms); the only layer the ground probes hit
    Ground,
    /// Player character
    Player,
    /// Triggers (launch pads, bumpers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Where the player returns after falling out of the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);
