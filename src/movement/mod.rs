//! Movement domain: input-to-velocity locomotion for platforming characters.
//!
//! The controller core ([`MotionController`], [`JumpState`], the integrator
//! functions and [`GroundSensor`]) is engine-agnostic apart from bevy math
//! types. The plugin wires it to keyboard input, avian2d ray casts and
//! rigid-body velocity.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod input;
mod integrator;
mod jump;
mod resources;
mod sensor;
mod systems;


pub use components::{GameLayer, Ground, Player, SpawnPoint};
pub use controller::{MotionController, MotionReport};
pub use events::{JumpedEvent, LandedEvent, LeftGroundEvent};
pub use input::InputFrame;
pub use integrator::{BlendMode, horizontal_rate, move_towards, step_horizontal, step_vertical};
pub use jump::{JumpContext, JumpKind, JumpOutcome, JumpState};
pub use resources::{MotionTuning, PhysicsConstants};
pub use sensor::{AvianGroundProbe, GroundProbe, GroundSensor};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::{bootstrap_player_from_data, respawn_fallen_player};
use crate::movement::systems::{decide_motion, integrate_motion, sample_keyboard_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<LeftGroundEvent>()
            .add_systems(PostStartup, bootstrap_player_from_data)
            .add_systems(
                Update,
                (sample_keyboard_input, decide_motion, respawn_fallen_player)
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(FixedUpdate, integrate_motion.run_if(gameplay_active));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(dev::MovementDevPlugin);
    }
}
