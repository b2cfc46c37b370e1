//! Per-player search state: found set, ignore list, elapsed time and the
//! search ray.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::TrackerConfig;
use crate::env::{HuntEnv, RayHit, RayQuery, RngOracle, compute_seed};
use crate::events::{Listeners, SearchEvent};
use crate::registry::ManagerRegistry;
use crate::state::{CandidateTarget, ObjectId, TrackerId};

/// Classification of an object against the registered managers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FindResult {
    /// Active target this tracker already found.
    Found,
    /// Active target still waiting to be found.
    NotFound,
    /// Not an active target of any registered manager.
    NotAValidTarget,
    /// Every active target has been found; object checks are skipped.
    AllFound,
    /// No managers are registered.
    Unknown,
}

/// How the host advanced the clock this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickKind {
    #[default]
    Running,
    /// The game is paused; elapsed time does not advance.
    Paused,
}

/// Tracks one player's progress through the hunt.
#[derive(Debug)]
pub struct SearchTracker {
    id: TrackerId,
    owner: ObjectId,
    start_offset: f32,
    cast_length: f32,
    found: HashSet<ObjectId>,
    found_order: Vec<ObjectId>,
    ignored: Vec<ObjectId>,
    elapsed: f32,
    finished: bool,
    listeners: Listeners,
}

impl SearchTracker {
    pub fn new(id: TrackerId, owner: ObjectId, config: TrackerConfig) -> Self {
        let mut tracker = Self {
            id,
            owner,
            start_offset: config.start_offset,
            cast_length: config.cast_length,
            found: HashSet::new(),
            found_order: Vec::new(),
            ignored: Vec::with_capacity(config.ignored_objects.len()),
            elapsed: 0.0,
            finished: false,
            listeners: Listeners::new(),
        };
        for object in config.ignored_objects {
            tracker.add_ignored_object(object);
        }
        tracker
    }

    pub fn id(&self) -> TrackerId {
        self.id
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn start_offset(&self) -> f32 {
        self.start_offset
    }

    pub fn cast_length(&self) -> f32 {
        self.cast_length
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    // ===== ignore list =====

    pub fn ignored_objects(&self) -> &[ObjectId] {
        &self.ignored
    }

    /// Appends `object` unless it is already ignored.
    pub fn add_ignored_object(&mut self, object: ObjectId) {
        if !self.ignored.contains(&object) {
            self.ignored.push(object);
        }
    }

    pub fn remove_ignored_object(&mut self, object: ObjectId) {
        self.ignored.retain(|&ignored| ignored != object);
    }

    /// Removes the entry at `index`; out-of-range indices are ignored.
    pub fn remove_ignored_object_at(&mut self, index: usize) {
        if index < self.ignored.len() {
            self.ignored.remove(index);
        }
    }

    // ===== progress =====

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Found objects in discovery order.
    pub fn found_objects(&self) -> &[ObjectId] {
        &self.found_order
    }

    pub fn has_found(&self, object: ObjectId) -> bool {
        self.found.contains(&object)
    }

    /// Seconds spent searching. Frozen once the hunt is complete.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// True when every active target across the registry has been found.
    ///
    /// Trivially true with no managers or no active targets.
    pub fn is_complete(&self, registry: &ManagerRegistry) -> bool {
        self.found.len() >= registry.total_target_count()
    }

    /// Fraction of active targets found, in `[0, 1]`. Zero when there are none.
    pub fn progress(&self, registry: &ManagerRegistry) -> f32 {
        let total = registry.total_target_count();
        if total == 0 {
            return 0.0;
        }
        (self.found.len() as f32 / total as f32).min(1.0)
    }

    pub fn classify(&self, object: ObjectId, registry: &ManagerRegistry) -> FindResult {
        if registry.is_empty() {
            return FindResult::Unknown;
        }
        if self.is_complete(registry) {
            return FindResult::AllFound;
        }
        if !registry.contains_target(object) {
            return FindResult::NotAValidTarget;
        }
        if self.found.contains(&object) {
            FindResult::Found
        } else {
            FindResult::NotFound
        }
    }

    // ===== frame update =====

    /// Advances elapsed time by `delta` seconds while the hunt is running.
    ///
    /// A hunt with no active targets is trivially complete and does not
    /// count. Once real targets have all been found, time never accumulates
    /// again. Negative deltas count as zero.
    pub fn tick(&mut self, registry: &ManagerRegistry, delta: f32, kind: TickKind) {
        if self.finished || kind == TickKind::Paused {
            return;
        }
        if self.is_complete(registry) {
            if registry.total_target_count() > 0 {
                self.finished = true;
            }
            return;
        }
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }
    }

    // ===== searching =====

    /// Casts the search ray from the owner along the camera (or owner)
    /// forward vector.
    ///
    /// The direction is normalised first, so `start_offset` and `cast_length`
    /// are world distances whatever the length of the host's vector.
    ///
    /// Returns `None` when the host cannot place the owner, has no ray-cast
    /// service, or nothing blocks the ray.
    pub fn cast_search_ray(&self, env: &HuntEnv<'_>) -> Option<RayHit> {
        let (spatial, ray_cast) = match (env.spatial(), env.ray_cast()) {
            (Ok(spatial), Ok(ray_cast)) => (spatial, ray_cast),
            (Err(err), _) | (_, Err(err)) => {
                debug!(
                    target: "hunt::tracker",
                    tracker = %self.id,
                    error = %err,
                    "Skipping search ray"
                );
                return None;
            }
        };

        let transform = spatial.transform(self.owner)?;
        let forward = spatial.search_direction(self.owner)?.normalized()?;
        let start = transform.position + forward * self.start_offset;
        let end = start + forward * self.cast_length;

        let query = RayQuery {
            start,
            end,
            owner: self.owner,
            ignored: &self.ignored,
        };
        ray_cast.cast_ray(&query)
    }

    /// Casts a search ray and records the hit if it is an unfound target.
    ///
    /// Returns the newly found object. Does nothing once the hunt is complete.
    pub fn find_searched_object(
        &mut self,
        registry: &ManagerRegistry,
        env: &HuntEnv<'_>,
    ) -> Option<ObjectId> {
        if self.is_complete(registry) {
            return None;
        }

        let hit = self.cast_search_ray(env)?;
        match self.classify(hit.object, registry) {
            FindResult::NotFound => {
                self.mark_found(hit.object, registry);
                Some(hit.object)
            }
            other => {
                debug!(
                    target: "hunt::tracker",
                    tracker = %self.id,
                    object = %hit.object,
                    result = %other,
                    "Search ray hit ignored"
                );
                None
            }
        }
    }

    fn mark_found(&mut self, object: ObjectId, registry: &ManagerRegistry) {
        self.found.insert(object);
        self.found_order.push(object);
        info!(
            target: "hunt::tracker",
            tracker = %self.id,
            object = %object,
            found = self.found.len(),
            total = registry.total_target_count(),
            "Target found"
        );
        self.listeners.publish(&SearchEvent::TargetFound {
            tracker: self.id,
            object,
        });

        if self.is_complete(registry) {
            self.finished = true;
            info!(
                target: "hunt::tracker",
                tracker = %self.id,
                elapsed = self.elapsed,
                "All targets found"
            );
            self.listeners.publish(&SearchEvent::SessionComplete {
                tracker: self.id,
                elapsed: self.elapsed,
            });
        }
    }

    /// Picks an active target this tracker has not found yet, for hints.
    ///
    /// Managers are visited in a random order without repeats; the first one
    /// with an unfound target supplies it. Managers without active targets
    /// count as exhausted. Returns `None` when nothing is left to find.
    pub fn pick_random_unfound_target(
        &self,
        registry: &ManagerRegistry,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Option<CandidateTarget> {
        if registry.total_target_count() == 0 {
            return None;
        }

        let mut untried = registry.managers();
        let mut draw = 0u32;
        while !untried.is_empty() {
            let pick = rng.index(compute_seed(seed, 0, self.id.0, draw), untried.len());
            draw += 1;
            let manager = untried.swap_remove(pick);

            let unfound = manager
                .active_targets()
                .find(|target| self.classify(target.object, registry) == FindResult::NotFound);
            if let Some(target) = unfound {
                return Some(target.clone());
            }
        }
        None
    }
}
