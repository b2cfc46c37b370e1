//! Session orchestration: owns the managers and one player tracker and wires
//! them to a single registry.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{HuntConfig, ManagerConfig};
use crate::env::{HuntEnv, RngOracle, compute_seed};
use crate::manager::{ManagerConfigError, TargetManager};
use crate::registry::ManagerRegistry;
use crate::state::{CandidateTarget, ManagerId, ObjectId, TrackerId};
use crate::tracker::{FindResult, SearchTracker, TickKind};

/// Snapshot of a session's progress, for HUDs and logs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub found: usize,
    pub total: usize,
    pub elapsed: f32,
    pub complete: bool,
}

/// A running hunt.
///
/// Every random draw is addressed by `(seed, nonce)`, and the nonce advances
/// once per activation or hint request, so replaying the same calls with the
/// same seed reproduces the same targets and hints.
#[derive(Debug)]
pub struct HuntSession {
    seed: u64,
    nonce: u64,
    registry: ManagerRegistry,
    managers: Vec<Arc<TargetManager>>,
    tracker: SearchTracker,
}

impl HuntSession {
    /// Creates an empty session whose tracker searches on behalf of `owner`.
    pub fn new(config: &HuntConfig, owner: ObjectId) -> Self {
        Self {
            seed: config.seed.unwrap_or_default(),
            nonce: 0,
            registry: ManagerRegistry::new(),
            managers: Vec::new(),
            tracker: SearchTracker::new(TrackerId::PLAYER, owner, config.tracker.clone()),
        }
    }

    /// Creates a session and activates one manager per configuration.
    /// Managers get ids in configuration order, starting at 0.
    ///
    /// # Errors
    ///
    /// Returns the first manager configuration that fails validation; no
    /// session is created in that case.
    pub fn start(
        config: &HuntConfig,
        owner: ObjectId,
        managers: Vec<ManagerConfig>,
        rng: &dyn RngOracle,
    ) -> Result<Self, ManagerConfigError> {
        let managers = managers
            .into_iter()
            .enumerate()
            .map(|(index, config)| TargetManager::new(ManagerId(index as u32), config))
            .collect::<Result<Vec<_>, _>>()?;

        let mut session = Self::new(config, owner);
        for manager in managers {
            session.spawn_manager(manager, rng);
        }

        info!(
            target: "hunt::session",
            seed = session.seed,
            managers = session.managers.len(),
            targets = session.registry.total_target_count(),
            "Session started"
        );
        Ok(session)
    }

    fn next_seed(&mut self, owner: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, owner, 0);
        self.nonce += 1;
        seed
    }

    /// Activates `manager` and keeps it alive for the rest of the session.
    pub fn spawn_manager(
        &mut self,
        manager: TargetManager,
        rng: &dyn RngOracle,
    ) -> Arc<TargetManager> {
        let seed = self.next_seed(manager.id().0);
        let manager = manager.activate(&mut self.registry, rng, seed);
        self.managers.push(Arc::clone(&manager));
        manager
    }

    /// Deregisters and drops the manager with `id`. Returns false if unknown.
    pub fn despawn_manager(&mut self, id: ManagerId) -> bool {
        let Some(index) = self.managers.iter().position(|m| m.id() == id) else {
            return false;
        };
        let manager = self.managers.remove(index);
        manager.deactivate(&mut self.registry);
        self.registry.prune();
        info!(target: "hunt::session", manager = %id, "Manager despawned");
        true
    }

    pub fn tick(&mut self, delta: f32) {
        self.tracker.tick(&self.registry, delta, TickKind::Running);
    }

    pub fn tick_paused(&mut self) {
        self.tracker.tick(&self.registry, 0.0, TickKind::Paused);
    }

    /// Casts the player's search ray. Returns the newly found object.
    pub fn search(&mut self, env: &HuntEnv<'_>) -> Option<ObjectId> {
        self.tracker.find_searched_object(&self.registry, env)
    }

    /// Random still-unfound target, for the hint UI.
    ///
    /// Draws from the env's rng oracle; without one there is no hint.
    pub fn hint(&mut self, env: &HuntEnv<'_>) -> Option<CandidateTarget> {
        let rng = match env.rng() {
            Ok(rng) => rng,
            Err(err) => {
                debug!(target: "hunt::session", error = %err, "Skipping hint");
                return None;
            }
        };
        let seed = self.next_seed(self.tracker.id().0);
        self.tracker
            .pick_random_unfound_target(&self.registry, rng, seed)
    }

    pub fn classify(&self, object: ObjectId) -> FindResult {
        self.tracker.classify(object, &self.registry)
    }

    pub fn progress(&self) -> f32 {
        self.tracker.progress(&self.registry)
    }

    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete(&self.registry)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            found: self.tracker.found_count(),
            total: self.registry.total_target_count(),
            elapsed: self.tracker.elapsed(),
            complete: self.is_complete(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn registry(&self) -> &ManagerRegistry {
        &self.registry
    }

    pub fn managers(&self) -> &[Arc<TargetManager>] {
        &self.managers
    }

    pub fn tracker(&self) -> &SearchTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut SearchTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn configs() -> Vec<ManagerConfig> {
        vec![
            ManagerConfig::new(
                2,
                (0..4)
                    .map(|i| CandidateTarget::new(ObjectId(10 + i), format!("kitchen {i}")))
                    .collect(),
            ),
            ManagerConfig::new(
                1,
                (0..3)
                    .map(|i| CandidateTarget::new(ObjectId(20 + i), format!("garden {i}")))
                    .collect(),
            ),
        ]
    }

    #[test]
    fn start_activates_every_manager() {
        let session =
            HuntSession::start(&HuntConfig::default(), ObjectId(1), configs(), &PcgRng).unwrap();

        assert_eq!(session.managers().len(), 2);
        assert_eq!(session.registry().len(), 2);
        assert_eq!(session.summary().total, 3);
        assert!(!session.is_complete());
    }

    #[test]
    fn same_seed_same_targets() {
        let config = HuntConfig {
            seed: Some(1234),
            ..HuntConfig::default()
        };
        let a = HuntSession::start(&config, ObjectId(1), configs(), &PcgRng).unwrap();
        let b = HuntSession::start(&config, ObjectId(1), configs(), &PcgRng).unwrap();

        for (left, right) in a.managers().iter().zip(b.managers()) {
            assert!(left.active_targets().eq(right.active_targets()));
        }
    }

    #[test]
    fn invalid_manager_aborts_start() {
        let mut configs = configs();
        configs[1]
            .candidates
            .push(CandidateTarget::new(ObjectId(20), "twin"));

        let err = HuntSession::start(&HuntConfig::default(), ObjectId(1), configs, &PcgRng)
            .unwrap_err();
        assert!(matches!(
            err,
            ManagerConfigError::DuplicateCandidate {
                manager: ManagerId(1),
                object: ObjectId(20),
            }
        ));
    }

    #[test]
    fn despawn_shrinks_total() {
        let mut session =
            HuntSession::start(&HuntConfig::default(), ObjectId(1), configs(), &PcgRng).unwrap();

        assert!(session.despawn_manager(ManagerId(0)));
        assert!(!session.despawn_manager(ManagerId(0)));
        assert_eq!(session.summary().total, 1);
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn hint_names_an_active_target() {
        let mut session =
            HuntSession::start(&HuntConfig::default(), ObjectId(1), configs(), &PcgRng).unwrap();

        let env = HuntEnv::new(None, None, Some(&PcgRng));
        let hint = session.hint(&env).unwrap();
        assert_eq!(session.classify(hint.object), FindResult::NotFound);
    }

    #[test]
    fn hint_needs_an_rng() {
        let mut session =
            HuntSession::start(&HuntConfig::default(), ObjectId(1), configs(), &PcgRng).unwrap();

        assert!(session.hint(&HuntEnv::empty()).is_none());

        // A skipped hint does not consume a draw.
        let env = HuntEnv::new(None, None, Some(&PcgRng));
        let mut fresh =
            HuntSession::start(&HuntConfig::default(), ObjectId(1), configs(), &PcgRng).unwrap();
        assert_eq!(session.hint(&env), fresh.hint(&env));
    }

    #[test]
    fn paused_frames_do_not_count() {
        let mut session =
            HuntSession::start(&HuntConfig::default(), ObjectId(1), configs(), &PcgRng).unwrap();

        session.tick(0.5);
        session.tick_paused();
        session.tick(0.25);
        assert_eq!(session.summary().elapsed, 0.75);
    }
}
