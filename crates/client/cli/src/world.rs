//! Sphere world standing in for a host engine's physics and transforms.

use std::collections::HashMap;

use hunt_content::Scenario;
use hunt_core::{ObjectId, RayCastOracle, RayHit, RayQuery, SpatialOracle, Transform, Vec3};

#[derive(Clone, Debug)]
struct Sphere {
    object: ObjectId,
    center: Vec3,
    radius: f32,
}

/// Objects are spheres; the player is a point with a facing direction that
/// turns around the vertical axis.
#[derive(Clone, Debug)]
pub struct SphereWorld {
    player: ObjectId,
    player_transform: Transform,
    spheres: Vec<Sphere>,
    names: HashMap<ObjectId, String>,
}

impl SphereWorld {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let spheres = scenario
            .objects
            .iter()
            .map(|spec| Sphere {
                object: spec.object,
                center: spec.position,
                radius: spec.radius,
            })
            .collect();
        let names = scenario
            .objects
            .iter()
            .filter(|spec| !spec.name.is_empty())
            .map(|spec| (spec.object, spec.name.clone()))
            .collect();

        Self {
            player: scenario.player.object,
            player_transform: scenario.player.transform(),
            spheres,
            names,
        }
    }

    pub fn player(&self) -> ObjectId {
        self.player
    }

    pub fn player_forward(&self) -> Vec3 {
        self.player_transform.forward
    }

    /// Rotates the player's facing by `radians` around +Z.
    pub fn turn_player(&mut self, radians: f32) {
        let Vec3 { x, y, z } = self.player_transform.forward;
        let (sin, cos) = radians.sin_cos();
        self.player_transform.forward = Vec3::new(x * cos - y * sin, x * sin + y * cos, z);
    }

    pub fn name(&self, object: ObjectId) -> String {
        self.names
            .get(&object)
            .cloned()
            .unwrap_or_else(|| object.to_string())
    }

    fn entry_distance(sphere: &Sphere, start: Vec3, direction: Vec3, length: f32) -> Option<f32> {
        let to_center = sphere.center - start;
        let along = to_center.dot(direction);
        let miss_sq = to_center.length_squared() - along * along;
        let radius_sq = sphere.radius * sphere.radius;
        if miss_sq > radius_sq {
            return None;
        }
        let half_chord = (radius_sq - miss_sq).sqrt();
        let near = along - half_chord;
        // Starting inside a sphere hits it on the way out.
        let entry = if near >= 0.0 { near } else { along + half_chord };
        (0.0..=length).contains(&entry).then_some(entry)
    }
}

impl SpatialOracle for SphereWorld {
    fn transform(&self, owner: ObjectId) -> Option<Transform> {
        (owner == self.player).then_some(self.player_transform)
    }
}

impl RayCastOracle for SphereWorld {
    fn cast_ray(&self, query: &RayQuery<'_>) -> Option<RayHit> {
        let length = query.length();
        let direction = (query.end - query.start).normalized()?;

        self.spheres
            .iter()
            .filter(|sphere| !query.ignores(sphere.object))
            .filter_map(|sphere| {
                Self::entry_distance(sphere, query.start, direction, length)
                    .map(|distance| RayHit::new(sphere.object, distance))
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
