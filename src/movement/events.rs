//! Movement domain: messages emitted by the decision phase.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::JumpKind;

/// Event fired when a jump is granted
#[derive(Debug, Clone, Copy)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpedEvent {}

/// Event fired when a jump ends on the ground
#[derive(Debug, Clone, Copy)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

/// Event fired when the ground probes stop touching ground
#[derive(Debug, Clone, Copy)]
pub struct LeftGroundEvent {
    pub entity: Entity,
}

impl Message for LeftGroundEvent {}
