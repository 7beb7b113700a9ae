//! Movement domain: dev-only test room with launch pads and bumpers.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::{GameLayer, Ground, JumpKind, JumpedEvent, MotionController, Player};

/// Launches the player straight up through `force_jump`.
#[derive(Component, Debug)]
pub struct LaunchPad {
    pub height: f32,
}

/// Knocks the player back through `apply_impulse`.
#[derive(Component, Debug)]
pub struct Bumper {
    pub impulse: Vec2,
}

pub(crate) struct MovementDevPlugin;

impl Plugin for MovementDevPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_room).add_systems(
            Update,
            (apply_launch_pads, apply_bumpers).run_if(gameplay_active),
        );
    }
}

/// Orders a collision pair as `(trigger, other)` when either side is a trigger.
fn split_trigger_pair(
    collider1: Entity,
    collider2: Entity,
    is_trigger: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_trigger(collider1) {
        Some((collider1, collider2))
    } else if is_trigger(collider2) {
        Some((collider2, collider1))
    } else {
        None
    }
}

fn apply_launch_pads(
    mut collision_start: MessageReader<CollisionStart>,
    pads: Query<&LaunchPad>,
    mut players: Query<&mut MotionController, With<Player>>,
    mut jumped: MessageWriter<JumpedEvent>,
) {
    for event in collision_start.read() {
        let Some((pad_entity, other)) =
            split_trigger_pair(event.collider1, event.collider2, |e| pads.contains(e))
        else {
            continue;
        };
        let (Ok(pad), Ok(mut controller)) = (pads.get(pad_entity), players.get_mut(other)) else {
            continue;
        };

        controller.force_jump(pad.height);
        jumped.write(JumpedEvent {
            entity: other,
            kind: JumpKind::Forced,
        });
    }
}

fn apply_bumpers(
    mut collision_start: MessageReader<CollisionStart>,
    bumpers: Query<&Bumper>,
    mut players: Query<&mut MotionController, With<Player>>,
) {
    for event in collision_start.read() {
        let Some((bumper_entity, other)) =
            split_trigger_pair(event.collider1, event.collider2, |e| bumpers.contains(e))
        else {
            continue;
        };
        let (Ok(bumper), Ok(mut controller)) = (bumpers.get(bumper_entity), players.get_mut(other))
        else {
            continue;
        };

        controller.apply_impulse(bumper.impulse);
        debug!("Bumper impulse {:?}", bumper.impulse);
    }
}

/// Triggers only ever report contacts with the player.
fn trigger_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player])
}

/// Sensor collider that reports player contacts as `CollisionStart` messages.
fn trigger_bundle(size: Vec2) -> impl Bundle {
    (
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        trigger_layers(),
    )
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let pad_color = Color::srgb(0.3, 0.7, 0.9);
    let bumper_color = Color::srgb(0.9, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let mut spawn_ground = |size: Vec2, position: Vec2, color: Color| {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    };

    // Floor, split by a narrow gap to exercise the edge probes
    spawn_ground(Vec2::new(400.0, 40.0), Vec2::new(-205.0, -200.0), ground_color);
    spawn_ground(Vec2::new(400.0, 40.0), Vec2::new(205.0, -200.0), ground_color);

    // Platforms for coyote-time and double-jump practice
    spawn_ground(Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0), platform_color);
    spawn_ground(Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0), platform_color);
    spawn_ground(Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0), platform_color);

    // Launch pad on the left floor
    let pad_size = Vec2::new(60.0, 10.0);
    commands.spawn((
        LaunchPad { height: 1100.0 },
        Sprite {
            color: pad_color,
            custom_size: Some(pad_size),
            ..default()
        },
        Transform::from_xyz(-330.0, -175.0, 0.0),
        trigger_bundle(pad_size),
    ));

    // Bumper on the right floor, knocks the player back and up
    let bumper_size = Vec2::new(20.0, 40.0);
    commands.spawn((
        Bumper {
            impulse: Vec2::new(-600.0, 300.0),
        },
        Sprite {
            color: bumper_color,
            custom_size: Some(bumper_size),
            ..default()
        },
        Transform::from_xyz(360.0, -160.0, 0.0),
        trigger_bundle(bumper_size),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_pair_is_ordered_trigger_first() {
        let mut world = World::new();
        let pad = world.spawn(LaunchPad { height: 10.0 }).id();
        let player = world.spawn(Player).id();
        let is_pad = |e: Entity| world.get::<LaunchPad>(e).is_some();

        assert_eq!(split_trigger_pair(pad, player, is_pad), Some((pad, player)));
        assert_eq!(split_trigger_pair(player, pad, is_pad), Some((pad, player)));
    }

    #[test]
    fn test_non_trigger_pair_is_ignored() {
        let mut world = World::new();
        let ground = world.spawn(Ground).id();
        let player = world.spawn(Player).id();
        let is_pad = |e: Entity| world.get::<LaunchPad>(e).is_some();

        assert_eq!(split_trigger_pair(ground, player, is_pad), None);
    }

    #[test]
    fn test_triggers_only_face_the_player() {
        let layers = trigger_layers();
        let player =
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]);
        let ground = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

        assert!(layers.interacts_with(player));
        assert!(!layers.interacts_with(ground));
    }
}
