//! Scenario description: where things are and what each manager may pick.

use std::collections::HashSet;

use hunt_core::{ManagerConfig, ObjectId, Transform, Vec3};

/// The searching player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub object: ObjectId,
    pub position: Vec3,
    #[cfg_attr(feature = "serde", serde(default = "default_forward"))]
    pub forward: Vec3,
}

#[cfg(feature = "serde")]
fn default_forward() -> Vec3 {
    Vec3::FORWARD
}

impl PlayerSpec {
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.forward)
    }
}

/// A placed object, modelled as a sphere for ray casts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectSpec {
    pub object: ObjectId,
    pub position: Vec3,
    pub radius: f32,
    /// Display name used in logs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// A complete level: player, placed objects and target managers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub player: PlayerSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub objects: Vec<ObjectSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub managers: Vec<ManagerConfig>,
}

/// Inconsistency found by [`Scenario::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioIssue {
    /// Two placed objects share an id.
    DuplicateObject(ObjectId),
    /// A manager candidate has no placement, so it can never be hit.
    UnplacedCandidate { manager: usize, object: ObjectId },
    /// The player is also listed as a candidate.
    PlayerIsCandidate { manager: usize },
}

impl std::fmt::Display for ScenarioIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateObject(object) => write!(f, "object {object} is placed twice"),
            Self::UnplacedCandidate { manager, object } => {
                write!(f, "manager {manager}: candidate {object} has no placement")
            }
            Self::PlayerIsCandidate { manager } => {
                write!(f, "manager {manager}: the player cannot be a candidate")
            }
        }
    }
}

impl Scenario {
    pub fn object(&self, object: ObjectId) -> Option<&ObjectSpec> {
        self.objects.iter().find(|spec| spec.object == object)
    }

    /// Returns every consistency problem in the scenario.
    pub fn validate(&self) -> Vec<ScenarioIssue> {
        let mut issues = Vec::new();
        let mut placed = HashSet::new();
        for spec in &self.objects {
            if !placed.insert(spec.object) {
                issues.push(ScenarioIssue::DuplicateObject(spec.object));
            }
        }

        for (index, manager) in self.managers.iter().enumerate() {
            for candidate in &manager.candidates {
                if candidate.object == self.player.object {
                    issues.push(ScenarioIssue::PlayerIsCandidate { manager: index });
                } else if !placed.contains(&candidate.object) {
                    issues.push(ScenarioIssue::UnplacedCandidate {
                        manager: index,
                        object: candidate.object,
                    });
                }
            }
        }
        issues
    }
}
