//! Movement domain: decision and integration phases for every controller.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    AvianGroundProbe, JumpedEvent, LandedEvent, LeftGroundEvent, MotionController,
};

/// Variable-rate phase: ground probes, jump state machine, horizontal blend.
pub(crate) fn decide_motion(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &mut MotionController)>,
    mut jumped: MessageWriter<JumpedEvent>,
    mut landed: MessageWriter<LandedEvent>,
    mut left_ground: MessageWriter<LeftGroundEvent>,
) {
    let dt = time.delta_secs();
    let probe = AvianGroundProbe::new(&spatial_query);

    for (entity, transform, mut controller) in &mut query {
        let report = controller.decide(dt, transform.translation.truncate(), &probe);

        if let Some(kind) = report.jumped {
            jumped.write(JumpedEvent { entity, kind });
        }
        if report.landed {
            landed.write(LandedEvent { entity });
        }
        if report.left_ground {
            left_ground.write(LeftGroundEvent { entity });
        }
    }
}

/// Fixed-rate phase: gravity, then the single write of the body velocity.
pub(crate) fn integrate_motion(
    time: Res<Time>,
    mut query: Query<(&mut MotionController, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();

    for (mut controller, mut velocity) in &mut query {
        velocity.0 = controller.integrate(dt);
    }
}
