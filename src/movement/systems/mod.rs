//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::sample_keyboard_input;
pub(crate) use movement::{decide_motion, integrate_motion};
