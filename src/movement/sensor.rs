//! Movement domain: three-ray ground sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Physics probe capability used by the ground sensor.
pub trait GroundProbe {
    /// Returns true if a ray from `origin` along `direction` hits ground
    /// within `max_distance`.
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec2, Dir2, f32) -> bool,
{
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        self(origin, direction, max_distance)
    }
}

/// Casts rays through avian's spatial query, hitting only the ground layer.
pub struct AvianGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianGroundProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground),
        }
    }
}

impl GroundProbe for AvianGroundProbe<'_, '_, '_> {
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .is_some()
    }
}

/// Probe geometry for a box-shaped character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    pub half_extents: Vec2,
    pub contact_offset: f32,
}

impl GroundSensor {
    pub fn new(half_extents: Vec2, contact_offset: f32) -> Self {
        Self {
            half_extents,
            contact_offset,
        }
    }

    /// Left, middle and right probe origins just below the feet.
    pub fn probe_origins(&self, position: Vec2) -> [Vec2; 3] {
        let dx = self.half_extents.x - self.contact_offset;
        let feet = position - Vec2::new(0.0, self.half_extents.y + self.contact_offset);
        [feet - Vec2::new(dx, 0.0), feet, feet + Vec2::new(dx, 0.0)]
    }

    /// Grounded if any of the three probes touches ground. The side probes
    /// catch platform edges and gaps the middle one misses.
    pub fn sense(&self, position: Vec2, probe: &impl GroundProbe) -> bool {
        self.probe_origins(position)
            .into_iter()
            .any(|origin| probe.probe(origin, Dir2::NEG_Y, self.contact_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_probe_origins_sit_under_the_box() {
        let sensor = GroundSensor::new(Vec2::new(12.0, 24.0), 2.0);
        let [left, mid, right] = sensor.probe_origins(Vec2::new(100.0, 50.0));

        assert_eq!(mid, Vec2::new(100.0, 24.0));
        assert_eq!(left, Vec2::new(90.0, 24.0));
        assert_eq!(right, Vec2::new(110.0, 24.0));
    }

    #[test]
    fn test_probes_cast_down_by_contact_offset() {
        let sensor = GroundSensor::new(Vec2::new(12.0, 24.0), 2.0);
        let casts = RefCell::new(Vec::new());
        let probe = |origin: Vec2, dir: Dir2, dist: f32| {
            casts.borrow_mut().push((origin, dir, dist));
            false
        };

        assert!(!sensor.sense(Vec2::ZERO, &probe));
        let casts = casts.into_inner();
        assert_eq!(casts.len(), 3);
        for (_, dir, dist) in casts {
            assert_eq!(dir, Dir2::NEG_Y);
            assert_eq!(dist, 2.0);
        }
    }

    #[test]
    fn test_any_single_probe_grounds() {
        let sensor = GroundSensor::new(Vec2::new(12.0, 24.0), 2.0);

        // Only the right foot is over a ledge
        let right_only = |origin: Vec2, _: Dir2, _: f32| origin.x > 5.0;
        assert!(sensor.sense(Vec2::ZERO, &right_only));

        // Straddling a gap: both edges hit, middle misses
        let edges_only = |origin: Vec2, _: Dir2, _: f32| origin.x.abs() > 5.0;
        assert!(sensor.sense(Vec2::ZERO, &edges_only));

        let nothing = |_: Vec2, _: Dir2, _: f32| false;
        assert!(!sensor.sense(Vec2::ZERO, &nothing));
    }
}
