//! Plain data shared by managers, trackers and host collaborators.
//!
//! Nothing in here owns game logic; identifiers and geometry are `Copy` values
//! so they can be threaded through oracle calls without borrowing gymnastics.
mod geometry;
mod ids;
mod target;

pub use geometry::{Transform, Vec3};
pub use ids::{ManagerId, ObjectId, TrackerId};
pub use target::CandidateTarget;
