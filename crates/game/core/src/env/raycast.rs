use crate::state::{ObjectId, Vec3};

/// Line segment query handed to the host's physics layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayQuery<'a> {
    pub start: Vec3,
    pub end: Vec3,
    /// Object casting the ray; never reported as a hit.
    pub owner: ObjectId,
    /// Additional objects the ray passes through.
    pub ignored: &'a [ObjectId],
}

impl RayQuery<'_> {
    /// Returns true if `object` must not block this ray.
    pub fn ignores(&self, object: ObjectId) -> bool {
        object == self.owner || self.ignored.contains(&object)
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Nearest blocking hit reported by a [`RayCastOracle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub object: ObjectId,
    /// Distance from the query start to the impact point.
    pub distance: f32,
}

impl RayHit {
    pub const fn new(object: ObjectId, distance: f32) -> Self {
        Self { object, distance }
    }
}

/// Opaque "cast a ray, get nearest blocking object" service.
///
/// Implementations must skip every object for which [`RayQuery::ignores`]
/// returns true and report the nearest remaining hit along the segment.
pub trait RayCastOracle: Send + Sync {
    fn cast_ray(&self, query: &RayQuery<'_>) -> Option<RayHit>;
}
