//! Content domain: tests for motion defaults parsing and validation.

use std::path::Path;

use super::{
    MotionDefaults, load_motion_defaults, parse_motion_defaults, validate_motion_defaults,
};

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_motion_file_parses_and_validates() {
    let contents = include_str!("../../assets/data/motion.ron");
    let defaults = parse_motion_defaults(contents, "motion.ron").unwrap();

    assert!(validate_motion_defaults(&defaults).is_empty());
    assert!(defaults.tuning.max_jumps >= 1);
    assert!(defaults.physics.gravity < 0.0);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let contents = "(tuning: (running_speed: 200.0, max_jumps: 2))";
    let defaults = parse_motion_defaults(contents, "partial.ron").unwrap();
    let builtin = MotionDefaults::default();

    assert_eq!(defaults.tuning.running_speed, 200.0);
    assert_eq!(defaults.tuning.max_jumps, 2);
    assert_eq!(defaults.tuning.jump_speed, builtin.tuning.jump_speed);
    assert_eq!(defaults.physics, builtin.physics);
    assert_eq!(defaults.body, builtin.body);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_motion_defaults("(tuning: (running_speed: \"fast\"))", "bad.ron").unwrap_err();

    assert_eq!(err.file, "bad.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load bad.ron"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_motion_defaults(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_defaults_are_valid() {
    assert!(validate_motion_defaults(&MotionDefaults::default()).is_empty());
}

#[test]
fn test_validation_flags_malformed_fields() {
    let mut defaults = MotionDefaults::default();
    defaults.tuning.ground_acceleration = 0.0;
    defaults.tuning.max_jumps = 0;
    defaults.tuning.terminal_velocity = 10.0;
    defaults.physics.gravity = 9.8;

    let fields: Vec<_> = validate_motion_defaults(&defaults)
        .into_iter()
        .map(|e| e.field)
        .collect();

    assert_eq!(
        fields,
        vec![
            "tuning.ground_acceleration",
            "tuning.terminal_velocity",
            "tuning.max_jumps",
            "physics.gravity",
        ]
    );
}

#[test]
fn test_validation_rejects_nan() {
    let mut defaults = MotionDefaults::default();
    defaults.tuning.running_speed = f32::NAN;

    let errors = validate_motion_defaults(&defaults);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "tuning.running_speed");
}

#[test]
fn test_validation_catches_box_narrower_than_probes() {
    let mut defaults = MotionDefaults::default();
    defaults.body.width = 2.0;
    defaults.physics.contact_offset = 2.0;

    let errors = validate_motion_defaults(&defaults);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "body.width");
    assert_eq!(errors[0].value, -1.0);
}
