use super::ObjectId;

/// An object a manager may pick as a search target, plus the clue shown to
/// the player when they ask for a hint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateTarget {
    pub object: ObjectId,
    pub hint: String,
}

impl CandidateTarget {
    pub fn new(object: ObjectId, hint: impl Into<String>) -> Self {
        Self {
            object,
            hint: hint.into(),
        }
    }
}
