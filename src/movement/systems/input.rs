//! Movement domain: keyboard sampling into the motion controller latch.

use bevy::prelude::*;

use crate::movement::{MotionController, Player};

pub(crate) fn sample_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MotionController, With<Player>>,
) {
    // Horizontal axis
    let mut direction = 0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        direction -= 1;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        direction += 1;
    }

    let jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);

    for mut controller in &mut query {
        controller.set_direction(direction);
        controller.set_jump_input(jump_pressed, jump_held);
    }
}
