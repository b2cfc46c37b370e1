#![allow(dead_code)]

use std::collections::HashMap;

use hunt_core::{ObjectId, RayCastOracle, RayHit, RayQuery, SpatialOracle, Transform, Vec3};

/// Scripted world: spheres for objects, one transform per owner, optional
/// camera per owner.
#[derive(Default)]
pub struct MockWorld {
    pub spheres: Vec<(ObjectId, Vec3, f32)>,
    pub transforms: HashMap<ObjectId, Transform>,
    pub cameras: HashMap<ObjectId, Vec3>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, owner: ObjectId, transform: Transform) -> Self {
        self.transforms.insert(owner, transform);
        self
    }

    pub fn with_sphere(mut self, object: ObjectId, center: Vec3, radius: f32) -> Self {
        self.spheres.push((object, center, radius));
        self
    }

    pub fn face(&mut self, owner: ObjectId, forward: Vec3) {
        if let Some(transform) = self.transforms.get_mut(&owner) {
            transform.forward = forward;
        }
    }
}

impl SpatialOracle for MockWorld {
    fn transform(&self, owner: ObjectId) -> Option<Transform> {
        self.transforms.get(&owner).copied()
    }

    fn camera_forward(&self, owner: ObjectId) -> Option<Vec3> {
        self.cameras.get(&owner).copied()
    }
}

impl RayCastOracle for MockWorld {
    fn cast_ray(&self, query: &RayQuery<'_>) -> Option<RayHit> {
        let length = query.length();
        let direction = (query.end - query.start).normalized()?;

        self.spheres
            .iter()
            .filter(|(object, _, _)| !query.ignores(*object))
            .filter_map(|&(object, center, radius)| {
                let to_center = center - query.start;
                let along = to_center.dot(direction);
                let miss_sq = to_center.length_squared() - along * along;
                if miss_sq > radius * radius {
                    return None;
                }
                let half_chord = (radius * radius - miss_sq).sqrt();
                let near = along - half_chord;
                let entry = if near >= 0.0 { near } else { along + half_chord };
                (entry >= 0.0 && entry <= length).then_some(RayHit::new(object, entry))
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// Unit vectors for the cardinal directions the tests face.
pub const EAST: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const NORTH: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const WEST: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
