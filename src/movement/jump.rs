//! Movement domain: jump budget, coyote time and jump buffering.

use bevy::prelude::*;

use crate::movement::{MotionTuning, PhysicsConstants};

/// How a jump was granted on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Pressed while eligible.
    Direct,
    /// Pressed early and replayed once eligible.
    Buffered,
    /// Granted through `force_jump`, bypassing eligibility.
    Forced,
}

/// Jump-cycle state. Timers only matter by sign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpState {
    pub jumps_used: u32,
    pub is_jumping: bool,
    pub drag_down_active: bool,
    pub can_jump: bool,
    pub early_jump_pending: bool,
    pub coyote_remaining: f32,
    pub buffer_remaining: f32,
}

/// Per-tick inputs to the jump state machine.
#[derive(Debug, Clone, Copy)]
pub struct JumpContext<'a> {
    pub tuning: &'a MotionTuning,
    pub physics: &'a PhysicsConstants,
    pub grounded: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dt: f32,
}

/// What the state machine did this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpOutcome {
    pub jumped: Option<JumpKind>,
    pub landed: bool,
}

impl JumpState {
    /// Overwrites vertical velocity with `height` and spends one jump.
    pub fn grant(&mut self, velocity: &mut Vec2, height: f32) {
        self.jumps_used += 1;
        self.is_jumping = true;
        velocity.y = height;
    }

    /// Runs one decision tick, mutating `velocity.y` for grants and drag-down.
    pub fn step(&mut self, ctx: JumpContext, velocity: &mut Vec2) -> JumpOutcome {
        let tuning = ctx.tuning;
        let mut outcome = JumpOutcome::default();

        if ctx.grounded {
            self.coyote_remaining = tuning.coyote_time;
        } else {
            self.coyote_remaining -= ctx.dt;
        }

        if self.early_jump_pending {
            self.buffer_remaining -= ctx.dt;
        } else {
            self.buffer_remaining = tuning.jump_buffer_time;
        }

        if !self.is_jumping {
            self.can_jump = self.coyote_remaining >= 0.0;
        }

        if self.is_jumping && ctx.grounded && velocity.y <= 0.0 {
            self.is_jumping = false;
            self.jumps_used = 0;
            outcome.landed = true;
            debug!("Landed: jump budget reset");
        }

        if ctx.jump_pressed {
            // Budget check runs first so the buffer never grants past max_jumps
            if self.jumps_used >= tuning.max_jumps {
                self.can_jump = false;
            }

            if self.can_jump {
                self.grant(velocity, tuning.jump_speed);
                outcome.jumped = Some(JumpKind::Direct);
                debug!(
                    "Jump: jumps_used={}/{}, coyote_remaining={:.3}",
                    self.jumps_used, tuning.max_jumps, self.coyote_remaining
                );
            } else {
                self.early_jump_pending = true;
                debug!("Jump request buffered");
            }
        }

        if self.is_jumping {
            if !ctx.jump_held && velocity.y > 0.0 && !self.drag_down_active {
                self.drag_down_active = true;
            }
            if self.drag_down_active {
                let drag = tuning.jump_cutoff * tuning.gravity_scale * ctx.physics.gravity;
                velocity.y += drag * ctx.dt;
            }
        } else {
            self.drag_down_active = false;
        }

        // The request is spent whether or not the buffer window is still open.
        // A direct jump this tick already satisfies it.
        if self.early_jump_pending && self.can_jump {
            if outcome.jumped.is_some() {
                debug!("Buffered jump absorbed by direct jump");
            } else if self.buffer_remaining >= 0.0 && self.jumps_used < tuning.max_jumps {
                self.grant(velocity, tuning.jump_speed);
                outcome.jumped = Some(JumpKind::Buffered);
                debug!(
                    "Buffered jump: jumps_used={}/{}, buffer_remaining={:.3}",
                    self.jumps_used, tuning.max_jumps, self.buffer_remaining
                );
            } else {
                debug!("Buffered jump dropped");
            }
            self.early_jump_pending = false;
        }

        outcome
    }
}
