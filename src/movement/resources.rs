//! Movement domain: tuning values and injected physics constants.

use serde::{Deserialize, Serialize};

/// Per-character locomotion tuning. Never mutated by the controller.
///
/// Horizontal rates are multiples of `running_speed` per second.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    pub running_speed: f32,
    pub ground_acceleration: f32,
    pub ground_deceleration: f32,
    pub ground_turn: f32,
    pub air_acceleration: f32,
    /// Air deceleration and air turn rate.
    pub air_control: f32,
    /// Initial vertical speed of a granted jump.
    pub jump_speed: f32,
    /// Gravity multiplier while rising or grounded.
    pub gravity_scale: f32,
    /// Gravity multiplier while airborne and descending.
    pub fall_gravity_scale: f32,
    /// Lowest vertical velocity allowed (negative).
    pub terminal_velocity: f32,
    /// Extra downward pull, in units of rising gravity, after an early release.
    pub jump_cutoff: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Jumps allowed between landings (1 = single jump, 2 = double jump, ...)
    pub max_jumps: u32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            running_speed: 320.0,
            ground_acceleration: 9.0,
            ground_deceleration: 8.0,
            ground_turn: 6.0,
            air_acceleration: 5.0,
            air_control: 3.0,
            jump_speed: 680.0,
            gravity_scale: 1.0,
            fall_gravity_scale: 1.6,
            terminal_velocity: -1200.0,
            jump_cutoff: 1.5,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            max_jumps: 1,
        }
    }
}

impl MotionTuning {
    /// Peak height of a fully held jump under rising gravity.
    /// Uses physics formula: h = v² / (2g)
    pub fn single_jump_height(&self, physics: &PhysicsConstants) -> f32 {
        let g = (physics.gravity * self.gravity_scale).abs();
        if g == 0.0 {
            return f32::INFINITY;
        }
        self.jump_speed * self.jump_speed / (2.0 * g)
    }

    /// Upper bound on height gained by chaining every jump at its apex.
    pub fn max_reachable_height(&self, physics: &PhysicsConstants) -> f32 {
        self.single_jump_height(physics) * self.max_jumps as f32
    }
}

/// Engine constants the controller reads but never owns.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConstants {
    /// Signed vertical gravity acceleration (negative pulls down).
    pub gravity: f32,
    /// Minimum contact separation; also the ground probe length.
    pub contact_offset: f32,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            gravity: -1800.0,
            contact_offset: 2.0,
        }
    }
}
