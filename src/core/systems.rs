//! Core domain: camera setup and pause input.

use bevy::prelude::*;

use crate::core::resources::GameplayPaused;

/// Pause source owned by the keyboard toggle.
const MANUAL_PAUSE: &str = "manual";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) || keyboard.just_pressed(KeyCode::KeyP) {
        paused.toggle(MANUAL_PAUSE);
        info!("Gameplay paused: {}", paused.is_paused());
    }
}
