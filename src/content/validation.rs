//! Sanity checks for loaded motion tuning.
//!
//! The controller never validates its tuning; bad values only degrade how the
//! character moves. These checks surface them at load time instead.

use super::data::MotionDefaults;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but should be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a field against a predicate
macro_rules! check_field {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $expected:expr) => {
        let value = $value as f32;
        if !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                value,
                expected: $expected,
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

fn negative(v: f32) -> bool {
    v < 0.0
}

/// Validate motion defaults.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_motion_defaults(defaults: &MotionDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let t = &defaults.tuning;

    check_field!(errors, "tuning.running_speed", t.running_speed, positive, "> 0");
    check_field!(
        errors,
        "tuning.ground_acceleration",
        t.ground_acceleration,
        positive,
        "> 0"
    );
    check_field!(
        errors,
        "tuning.ground_deceleration",
        t.ground_deceleration,
        positive,
        "> 0"
    );
    check_field!(errors, "tuning.ground_turn", t.ground_turn, positive, "> 0");
    check_field!(
        errors,
        "tuning.air_acceleration",
        t.air_acceleration,
        positive,
        "> 0"
    );
    check_field!(errors, "tuning.air_control", t.air_control, positive, "> 0");
    check_field!(errors, "tuning.jump_speed", t.jump_speed, positive, "> 0");
    check_field!(
        errors,
        "tuning.gravity_scale",
        t.gravity_scale,
        non_negative,
        ">= 0"
    );
    check_field!(
        errors,
        "tuning.fall_gravity_scale",
        t.fall_gravity_scale,
        non_negative,
        ">= 0"
    );
    check_field!(
        errors,
        "tuning.terminal_velocity",
        t.terminal_velocity,
        negative,
        "< 0"
    );
    check_field!(errors, "tuning.jump_cutoff", t.jump_cutoff, non_negative, ">= 0");
    check_field!(errors, "tuning.coyote_time", t.coyote_time, non_negative, ">= 0");
    check_field!(
        errors,
        "tuning.jump_buffer_time",
        t.jump_buffer_time,
        non_negative,
        ">= 0"
    );
    check_field!(errors, "tuning.max_jumps", t.max_jumps, positive, ">= 1");

    check_field!(errors, "physics.gravity", defaults.physics.gravity, negative, "< 0");
    check_field!(
        errors,
        "physics.contact_offset",
        defaults.physics.contact_offset,
        positive,
        "> 0"
    );

    check_field!(errors, "body.width", defaults.body.width, positive, "> 0");
    check_field!(errors, "body.height", defaults.body.height, positive, "> 0");
    // Side probes must stay inside the box
    check_field!(
        errors,
        "body.width",
        defaults.body.width * 0.5 - defaults.physics.contact_offset,
        non_negative,
        "wider than twice physics.contact_offset"
    );

    errors
}
