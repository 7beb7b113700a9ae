//! Movement domain: player bootstrap from data-driven motion defaults.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MotionDefaults;
use crate::movement::{GameLayer, MotionController, Player, SpawnPoint};

/// Below this height the player is considered lost and respawned.
const KILL_PLANE_Y: f32 = -1000.0;

/// Spawn the player from loaded [`MotionDefaults`].
pub(crate) fn bootstrap_player_from_data(
    mut commands: Commands,
    defaults: Res<MotionDefaults>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body = defaults.body;
    let spawn = body.spawn_position();
    let controller = MotionController::new(defaults.tuning, defaults.physics, body.half_extents());

    info!(
        "Spawning player: speed={}, jump_speed={}, max_jumps={}, jump_height={:.1}, reach={:.1}",
        defaults.tuning.running_speed,
        defaults.tuning.jump_speed,
        defaults.tuning.max_jumps,
        defaults.tuning.single_jump_height(&defaults.physics),
        defaults.tuning.max_reachable_height(&defaults.physics),
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller, SpawnPoint(spawn)),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(body.width, body.height)),
            ..default()
        },
        Transform::from_xyz(spawn.x, spawn.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(body.width, body.height),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the controller
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));
}

/// Respawn players that fell out of the world, resetting controller state.
pub(crate) fn respawn_fallen_player(
    mut query: Query<(&SpawnPoint, &mut Transform, &mut MotionController), With<Player>>,
) {
    for (spawn, mut transform, mut controller) in &mut query {
        if transform.translation.y > KILL_PLANE_Y {
            continue;
        }

        transform.translation = spawn.0.extend(transform.translation.z);
        // The zeroed velocity reaches the body on the next integration step
        controller.teleport_reset();
        info!("Player fell out of the world, respawned at {:?}", spawn.0);
    }
}
