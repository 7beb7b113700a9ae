//! Deterministic locomotion for 2D platforming characters: asymmetric
//! acceleration, rise/fall gravity, multi-jump budgets, coyote time, jump
//! buffering and variable jump height.

pub mod content;
pub mod core;
pub mod movement;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::content::{ContentPlugin, MotionDefaults};
    pub use crate::core::{CorePlugin, GameplayPaused};
    pub use crate::movement::{
        GroundProbe, JumpKind, JumpedEvent, LandedEvent, LeftGroundEvent, MotionController,
        MotionReport, MotionTuning, MovementPlugin, PhysicsConstants, Player,
    };
}
