//! Movement domain: per-character motion controller and its public surface.

use bevy::prelude::*;

use crate::movement::{step_horizontal, step_vertical};
use crate::movement::jump::{JumpContext, JumpKind, JumpState};
use crate::movement::{GroundProbe, GroundSensor, InputFrame, MotionTuning, PhysicsConstants};

/// Transitions observed during one decision tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionReport {
    pub jumped: Option<JumpKind>,
    pub landed: bool,
    pub left_ground: bool,
}

/// Turns latched input into a body velocity.
///
/// Drive it with [`MotionController::decide`] once per rendered frame and
/// [`MotionController::integrate`] once per fixed physics step, in that order.
/// Only the value returned by `integrate` should be written to the body.
#[derive(Component, Debug, Clone)]
pub struct MotionController {
    tuning: MotionTuning,
    physics: PhysicsConstants,
    sensor: GroundSensor,
    input: InputFrame,
    jump: JumpState,
    velocity: Vec2,
    grounded: bool,
}

impl MotionController {
    pub fn new(tuning: MotionTuning, physics: PhysicsConstants, half_extents: Vec2) -> Self {
        Self {
            tuning,
            physics,
            sensor: GroundSensor::new(half_extents, physics.contact_offset),
            input: InputFrame::default(),
            jump: JumpState {
                can_jump: true,
                ..default()
            },
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Latch horizontal intent; values are clamped to -1, 0 or 1.
    pub fn set_direction(&mut self, direction: i8) {
        self.input.latch_direction(direction);
    }

    /// Latch the jump press edge and hold level for this tick.
    pub fn set_jump_input(&mut self, pressed: bool, held: bool) {
        self.input.latch_jump(pressed, held);
    }

    /// Jump to `height` regardless of eligibility (scripted launches, pads).
    /// Non-finite heights are not sanitized.
    pub fn force_jump(&mut self, height: f32) {
        self.jump.grant(&mut self.velocity, height);
        debug!(
            "Forced jump: height={}, jumps_used={}",
            height, self.jump.jumps_used
        );
    }

    /// Add `impulse` straight into the velocity (knockback, bumpers).
    /// Non-finite components are not sanitized.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }

    /// Clear velocity, jump flags and timers, keeping tuning and input.
    pub fn teleport_reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.grounded = false;
        self.jump = JumpState {
            can_jump: true,
            ..default()
        };
    }

    /// Decision phase: ground sensing, jump state machine and horizontal blend.
    pub fn decide(&mut self, dt: f32, position: Vec2, probe: &impl GroundProbe) -> MotionReport {
        let was_grounded = self.grounded;
        self.grounded = self.sensor.sense(position, probe);

        let ctx = JumpContext {
            tuning: &self.tuning,
            physics: &self.physics,
            grounded: self.grounded,
            jump_pressed: self.input.take_press(),
            jump_held: self.input.jump_held,
            dt,
        };
        let outcome = self.jump.step(ctx, &mut self.velocity);

        self.velocity.x = step_horizontal(
            &self.tuning,
            self.input.direction,
            self.velocity.x,
            self.grounded,
            dt,
        );

        MotionReport {
            jumped: outcome.jumped,
            landed: outcome.landed,
            left_ground: was_grounded && !self.grounded,
        }
    }

    /// Integration phase: gravity and terminal clamp. Returns the velocity to
    /// commit to the body.
    pub fn integrate(&mut self, dt: f32) -> Vec2 {
        self.velocity.y = step_vertical(
            &self.tuning,
            &self.physics,
            self.velocity.y,
            self.grounded,
            dt,
        );
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn current_velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    pub fn input(&self) -> InputFrame {
        self.input
    }

    pub fn jumps_used(&self) -> u32 {
        self.jump.jumps_used
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping
    }

    pub fn can_jump(&self) -> bool {
        self.jump.can_jump
    }

    pub fn drag_down_active(&self) -> bool {
        self.jump.drag_down_active
    }

    pub fn early_jump_pending(&self) -> bool {
        self.jump.early_jump_pending
    }

    pub fn coyote_remaining(&self) -> f32 {
        self.jump.coyote_remaining
    }

    pub fn buffer_remaining(&self) -> f32 {
        self.jump.buffer_remaining
    }
}
