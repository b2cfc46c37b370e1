use crate::state::{ObjectId, Transform, Vec3};

/// Position and orientation source for search owners.
///
/// Hosts answer for the objects they simulate; an owner the host does not know
/// about yields `None` and the dependent ray cast is skipped.
pub trait SpatialOracle: Send + Sync {
    /// World transform of `owner`, if it is currently placed in the world.
    fn transform(&self, owner: ObjectId) -> Option<Transform>;

    /// Forward vector of a camera attached to `owner`.
    ///
    /// When present it takes precedence over the owner's own forward vector.
    fn camera_forward(&self, _owner: ObjectId) -> Option<Vec3> {
        None
    }

    /// Direction a search ray from `owner` should travel.
    ///
    /// Need not be unit length. The tracker normalises it before applying its
    /// start offset and cast length, so a forward of `(0, 5, 0)` casts the same
    /// ray as `(0, 1, 0)`. A zero vector means no cast.
    fn search_direction(&self, owner: ObjectId) -> Option<Vec3> {
        self.camera_forward(owner)
            .or_else(|| self.transform(owner).map(|t| t.forward))
    }
}
