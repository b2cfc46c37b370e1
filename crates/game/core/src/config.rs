use crate::state::{CandidateTarget, ObjectId};

/// Configuration for a single target manager.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManagerConfig {
    /// How many targets this manager should pick. Values `<= 0` disable it.
    pub desired_count: i32,
    /// Objects the manager may pick from. Object ids must be unique.
    pub candidates: Vec<CandidateTarget>,
}

impl ManagerConfig {
    pub fn new(desired_count: i32, candidates: Vec<CandidateTarget>) -> Self {
        Self {
            desired_count,
            candidates,
        }
    }
}

/// Search ray geometry and initial ignore list for a tracker.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Distance along the facing direction where the ray starts.
    pub start_offset: f32,
    /// Length of the ray beyond its start point.
    pub cast_length: f32,
    pub ignored_objects: Vec<ObjectId>,
}

impl TrackerConfig {
    pub const DEFAULT_START_OFFSET: f32 = 20.0;
    pub const DEFAULT_CAST_LENGTH: f32 = 200.0;

    pub fn new() -> Self {
        Self {
            start_offset: Self::DEFAULT_START_OFFSET,
            cast_length: Self::DEFAULT_CAST_LENGTH,
            ignored_objects: Vec::new(),
        }
    }

    pub fn with_geometry(start_offset: f32, cast_length: f32) -> Self {
        Self {
            start_offset,
            cast_length,
            ignored_objects: Vec::new(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Session-wide settings.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HuntConfig {
    /// Base seed for target selection and hints. `None` leaves the choice of
    /// a replayable or entropy-backed rng to the host.
    pub seed: Option<u64>,
    pub tracker: TrackerConfig,
}
