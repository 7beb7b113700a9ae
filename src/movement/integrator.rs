//! Movement domain: horizontal blending and gravity integration.

use crate::movement::{MotionTuning, PhysicsConstants};

/// Which horizontal rate applies this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Accelerate,
    Decelerate,
    Turn,
}

impl BlendMode {
    /// Reversing only counts while actually moving the other way.
    pub fn select(direction: i8, velocity_x: f32) -> Self {
        if direction == 0 {
            BlendMode::Decelerate
        } else if velocity_x != 0.0 && (direction as f32).signum() != velocity_x.signum() {
            BlendMode::Turn
        } else {
            BlendMode::Accelerate
        }
    }
}

/// Moves `current` toward `target` by at most `max_delta`, never past it.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Rate of horizontal velocity change, per second.
pub fn horizontal_rate(tuning: &MotionTuning, mode: BlendMode, grounded: bool) -> f32 {
    let multiplier = match (mode, grounded) {
        (BlendMode::Accelerate, true) => tuning.ground_acceleration,
        (BlendMode::Accelerate, false) => tuning.air_acceleration,
        (BlendMode::Decelerate, true) => tuning.ground_deceleration,
        (BlendMode::Decelerate, false) => tuning.air_control,
        (BlendMode::Turn, true) => tuning.ground_turn * 2.0,
        (BlendMode::Turn, false) => tuning.air_control * 2.0,
    };
    multiplier * tuning.running_speed
}

/// Blends horizontal velocity toward `direction * running_speed`.
pub fn step_horizontal(
    tuning: &MotionTuning,
    direction: i8,
    velocity_x: f32,
    grounded: bool,
    dt: f32,
) -> f32 {
    let target = direction as f32 * tuning.running_speed;
    let mode = BlendMode::select(direction, velocity_x);
    let max_delta = horizontal_rate(tuning, mode, grounded) * dt;
    move_towards(velocity_x, target, max_delta)
}

/// Applies gravity, the grounded snap and the terminal-velocity floor.
pub fn step_vertical(
    tuning: &MotionTuning,
    physics: &PhysicsConstants,
    velocity_y: f32,
    grounded: bool,
    dt: f32,
) -> f32 {
    let scale = if !grounded && velocity_y < 0.0 {
        tuning.fall_gravity_scale
    } else {
        tuning.gravity_scale
    };

    let mut vy = velocity_y + physics.gravity * scale * dt;
    if grounded && vy < 0.0 {
        vy = 0.0;
    }
    // NaN passes through untouched
    if vy < tuning.terminal_velocity {
        vy = tuning.terminal_velocity;
    }
    vy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> MotionTuning {
        MotionTuning {
            running_speed: 5.0,
            ground_acceleration: 4.0,
            ground_deceleration: 2.0,
            ground_turn: 3.0,
            air_acceleration: 1.0,
            air_control: 0.5,
            ..MotionTuning::default()
        }
    }

    #[test]
    fn test_move_towards_never_overshoots() {
        assert_eq!(move_towards(0.0, 5.0, 2.0), 2.0);
        assert_eq!(move_towards(4.0, 5.0, 2.0), 5.0);
        assert_eq!(move_towards(-1.0, -5.0, 2.0), -3.0);
        assert_eq!(move_towards(0.5, 0.0, 2.0), 0.0);
    }

    #[test]
    fn test_blend_mode_selection() {
        assert_eq!(BlendMode::select(0, 3.0), BlendMode::Decelerate);
        assert_eq!(BlendMode::select(1, 3.0), BlendMode::Accelerate);
        assert_eq!(BlendMode::select(-1, 3.0), BlendMode::Turn);
        assert_eq!(BlendMode::select(1, -3.0), BlendMode::Turn);
        // Starting from rest is acceleration in either direction
        assert_eq!(BlendMode::select(1, 0.0), BlendMode::Accelerate);
        assert_eq!(BlendMode::select(-1, 0.0), BlendMode::Accelerate);
    }

    #[test]
    fn test_ground_and_air_rates_differ() {
        let t = tuning();
        assert_eq!(horizontal_rate(&t, BlendMode::Accelerate, true), 20.0);
        assert_eq!(horizontal_rate(&t, BlendMode::Accelerate, false), 5.0);
        assert_eq!(horizontal_rate(&t, BlendMode::Decelerate, true), 10.0);
        assert_eq!(horizontal_rate(&t, BlendMode::Decelerate, false), 2.5);
        assert_eq!(horizontal_rate(&t, BlendMode::Turn, true), 30.0);
        assert_eq!(horizontal_rate(&t, BlendMode::Turn, false), 5.0);
    }

    #[test]
    fn test_ground_acceleration_step_is_clamped_toward_target() {
        let t = tuning();
        // 20 units/s * 0.1s = 2
        assert_eq!(step_horizontal(&t, 1, 0.0, true, 0.1), 2.0);
        assert_eq!(step_horizontal(&t, 1, 4.0, true, 0.1), 5.0);
    }

    #[test]
    fn test_turning_uses_turn_rate() {
        let t = tuning();
        // Turn: 30 units/s * 0.1s = 3
        assert_eq!(step_horizontal(&t, -1, 5.0, true, 0.1), 2.0);
    }

    #[test]
    fn test_gravity_rise_and_fall_scales() {
        let t = MotionTuning {
            gravity_scale: 1.0,
            fall_gravity_scale: 2.0,
            terminal_velocity: -1000.0,
            ..MotionTuning::default()
        };
        let p = PhysicsConstants {
            gravity: -10.0,
            contact_offset: 0.1,
        };

        assert_eq!(step_vertical(&t, &p, 5.0, false, 0.5), 0.0);
        assert_eq!(step_vertical(&t, &p, -1.0, false, 0.5), -11.0);
    }

    #[test]
    fn test_grounded_snaps_to_zero() {
        let t = MotionTuning::default();
        let p = PhysicsConstants::default();
        assert_eq!(step_vertical(&t, &p, 0.0, true, 1.0 / 60.0), 0.0);
        // Upward motion while grounded is left alone
        assert!(step_vertical(&t, &p, 600.0, true, 1.0 / 60.0) > 0.0);
    }

    #[test]
    fn test_terminal_velocity_floor() {
        let t = MotionTuning {
            terminal_velocity: -50.0,
            ..MotionTuning::default()
        };
        let p = PhysicsConstants::default();
        assert_eq!(step_vertical(&t, &p, -49.0, false, 1.0), -50.0);
        // No upper clamp
        assert_eq!(step_vertical(&t, &p, 10_000.0, false, 0.0), 10_000.0);
    }

    #[test]
    fn test_terminal_floor_keeps_nan() {
        let t = MotionTuning::default();
        let p = PhysicsConstants::default();
        assert!(step_vertical(&t, &p, f32::NAN, false, 1.0 / 60.0).is_nan());
        assert!(step_vertical(&t, &p, f32::NAN, true, 1.0 / 60.0).is_nan());
    }
}
