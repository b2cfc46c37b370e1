//! Target managers: candidate pools and per-session random target selection.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ManagerConfig;
use crate::env::{RngOracle, compute_seed};
use crate::error::{ErrorSeverity, HuntError};
use crate::registry::ManagerRegistry;
use crate::state::{CandidateTarget, ManagerId, ObjectId};

/// Rejected manager configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ManagerConfigError {
    /// The same object appears twice in one candidate pool.
    #[error("{manager}: object {object} appears more than once in the candidate pool")]
    DuplicateCandidate {
        manager: ManagerId,
        object: ObjectId,
    },
}

impl HuntError for ManagerConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateCandidate { .. } => "MANAGER_DUPLICATE_CANDIDATE",
        }
    }
}

/// Owns a candidate pool and the subset picked as this session's targets.
///
/// The active set maps each chosen object to its slot in the pool, so the
/// hint text is always the pool's own entry.
#[derive(Clone, Debug)]
pub struct TargetManager {
    id: ManagerId,
    desired_count: i32,
    candidates: Vec<CandidateTarget>,
    active: BTreeMap<ObjectId, usize>,
}

impl TargetManager {
    /// Builds a manager from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerConfigError::DuplicateCandidate`] if two candidates
    /// share an object id.
    pub fn new(id: ManagerId, config: ManagerConfig) -> Result<Self, ManagerConfigError> {
        let mut seen = HashSet::with_capacity(config.candidates.len());
        for candidate in &config.candidates {
            if !seen.insert(candidate.object) {
                return Err(ManagerConfigError::DuplicateCandidate {
                    manager: id,
                    object: candidate.object,
                });
            }
        }

        Ok(Self {
            id,
            desired_count: config.desired_count,
            candidates: config.candidates,
            active: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> ManagerId {
        self.id
    }

    pub fn desired_count(&self) -> i32 {
        self.desired_count
    }

    pub fn candidates(&self) -> &[CandidateTarget] {
        &self.candidates
    }

    /// Number of targets this manager contributes once generated:
    /// `desired_count` clamped to `[0, candidates.len()]`.
    pub fn active_target_count(&self) -> usize {
        if self.desired_count <= 0 {
            return 0;
        }
        (self.desired_count as usize).min(self.candidates.len())
    }

    /// Fills the active set up to [`Self::active_target_count`] with distinct
    /// candidates chosen uniformly at random.
    ///
    /// Uses a partial Fisher–Yates shuffle over the candidates not yet
    /// chosen, so every k-subset is equally likely and the number of draws is
    /// bounded by k. Calling it again once the set is full does nothing.
    pub fn generate_active_targets(&mut self, rng: &dyn RngOracle, seed: u64) {
        let wanted = self.active_target_count();
        if self.active.len() >= wanted {
            return;
        }

        let mut remaining: Vec<usize> = (0..self.candidates.len())
            .filter(|&slot| !self.active.contains_key(&self.candidates[slot].object))
            .collect();

        let mut draw = 0u32;
        while self.active.len() < wanted {
            let pick = rng.index(compute_seed(seed, 0, self.id.0, draw), remaining.len());
            draw += 1;
            let slot = remaining.swap_remove(pick);
            self.active.insert(self.candidates[slot].object, slot);
        }

        debug!(
            target: "hunt::manager",
            manager = %self.id,
            pool = self.candidates.len(),
            active = self.active.len(),
            "Generated active targets"
        );
    }

    /// Generates targets, then registers the manager.
    ///
    /// Generation completes before the handle becomes visible to the
    /// registry, so no tracker can observe a half-initialised manager. The
    /// returned `Arc` is the manager's lifetime: once it is dropped, the
    /// registry no longer reports it.
    pub fn activate(
        mut self,
        registry: &mut ManagerRegistry,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Arc<Self> {
        self.generate_active_targets(rng, seed);
        let manager = Arc::new(self);
        registry.register(&manager);

        info!(
            target: "hunt::manager",
            manager = %manager.id,
            targets = manager.active.len(),
            "Manager activated"
        );
        manager
    }

    /// Removes the manager from `registry`. Returns false if it was not there.
    pub fn deactivate(self: &Arc<Self>, registry: &mut ManagerRegistry) -> bool {
        registry.deregister(self)
    }

    /// Number of targets actually chosen so far.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn is_active_target(&self, object: ObjectId) -> bool {
        self.active.contains_key(&object)
    }

    /// Active targets in object-id order.
    pub fn active_targets(&self) -> impl Iterator<Item = &CandidateTarget> + '_ {
        self.active.values().map(|&slot| &self.candidates[slot])
    }

    pub fn active_target(&self, object: ObjectId) -> Option<&CandidateTarget> {
        self.active.get(&object).map(|&slot| &self.candidates[slot])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn pool(len: u32) -> Vec<CandidateTarget> {
        (0..len)
            .map(|i| CandidateTarget::new(ObjectId(100 + i), format!("clue {i}")))
            .collect()
    }

    fn manager(desired: i32, pool_len: u32) -> TargetManager {
        TargetManager::new(ManagerId(1), ManagerConfig::new(desired, pool(pool_len))).unwrap()
    }

    #[test]
    fn active_count_is_clamped() {
        assert_eq!(manager(3, 5).active_target_count(), 3);
        assert_eq!(manager(9, 5).active_target_count(), 5);
        assert_eq!(manager(0, 5).active_target_count(), 0);
        assert_eq!(manager(-4, 5).active_target_count(), 0);
        assert_eq!(manager(3, 0).active_target_count(), 0);
    }

    #[test]
    fn generation_picks_distinct_pool_members() {
        let rng = PcgRng;
        for seed in 0..64 {
            let mut manager = manager(3, 5);
            manager.generate_active_targets(&rng, seed);

            assert_eq!(manager.active_len(), 3);
            let objects: HashSet<_> = manager.active_targets().map(|t| t.object).collect();
            assert_eq!(objects.len(), 3);
            for target in manager.active_targets() {
                assert!(manager.candidates().contains(target));
            }
        }
    }

    #[test]
    fn different_seeds_pick_different_subsets() {
        let rng = PcgRng;
        let subsets: HashSet<Vec<ObjectId>> = (0..32)
            .map(|seed| {
                let mut manager = manager(3, 5);
                manager.generate_active_targets(&rng, seed);
                manager.active_targets().map(|t| t.object).collect()
            })
            .collect();
        assert!(subsets.len() > 1);
    }

    #[test]
    fn every_subset_is_equally_likely() {
        const RUNS: u64 = 5000;
        let rng = PcgRng;
        let mut counts = std::collections::HashMap::new();
        for seed in 0..RUNS {
            let mut manager = manager(3, 5);
            manager.generate_active_targets(&rng, seed);
            let subset: Vec<ObjectId> = manager.active_targets().map(|c| c.object).collect();
            *counts.entry(subset).or_insert(0u64) += 1;
        }

        // C(5, 3) subsets, each expected 1/10 of the time.
        assert_eq!(counts.len(), 10);
        for (subset, count) in &counts {
            let frequency = *count as f64 / RUNS as f64;
            assert!(
                (frequency - 0.1).abs() < 0.03,
                "{subset:?} drawn with frequency {frequency}"
            );
        }
    }

    #[test]
    fn same_seed_is_reproducible() {
        let rng = PcgRng;
        let mut a = manager(2, 6);
        let mut b = manager(2, 6);
        a.generate_active_targets(&rng, 11);
        b.generate_active_targets(&rng, 11);
        assert!(a.active_targets().eq(b.active_targets()));
    }

    #[test]
    fn non_positive_or_empty_pool_generates_nothing() {
        let rng = PcgRng;
        for (desired, len) in [(0, 4), (-1, 4), (3, 0)] {
            let mut manager = manager(desired, len);
            manager.generate_active_targets(&rng, 5);
            assert_eq!(manager.active_len(), 0);
        }
    }

    #[test]
    fn regeneration_does_not_grow_past_count() {
        let rng = PcgRng;
        let mut manager = manager(2, 5);
        manager.generate_active_targets(&rng, 1);
        let first: Vec<_> = manager.active_targets().cloned().collect();
        manager.generate_active_targets(&rng, 2);
        assert_eq!(manager.active_len(), 2);
        assert!(manager.active_targets().eq(first.iter()));
    }

    #[test]
    fn full_pool_selects_everything() {
        let rng = PcgRng;
        let mut manager = manager(5, 5);
        manager.generate_active_targets(&rng, 3);
        for candidate in manager.candidates() {
            assert!(manager.is_active_target(candidate.object));
        }
    }

    #[test]
    fn duplicate_candidates_are_rejected() {
        let config = ManagerConfig::new(
            1,
            vec![
                CandidateTarget::new(ObjectId(1), "a"),
                CandidateTarget::new(ObjectId(1), "b"),
            ],
        );
        let err = TargetManager::new(ManagerId(7), config).unwrap_err();
        assert_eq!(
            err,
            ManagerConfigError::DuplicateCandidate {
                manager: ManagerId(7),
                object: ObjectId(1),
            }
        );
        assert_eq!(err.error_code(), "MANAGER_DUPLICATE_CANDIDATE");
    }

    #[test]
    fn hint_text_comes_from_pool_entry() {
        let rng = PcgRng;
        let mut manager = manager(5, 5);
        manager.generate_active_targets(&rng, 0);
        let target = manager.active_target(ObjectId(102)).unwrap();
        assert_eq!(target.hint, "clue 2");
        assert!(manager.active_target(ObjectId(5)).is_none());
    }
}
