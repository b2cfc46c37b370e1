//! Scavenger-hunt rules shared by hosts and tools.
//!
//! `hunt-core` picks random search targets from each manager's candidate pool
//! and tracks a player's progress towards finding them with forward ray
//! casts. Host engines plug in placement, physics and randomness through the
//! oracle traits in [`env`]; [`session::HuntSession`] wires everything for the
//! common single-player case.
pub mod config;
pub mod env;
pub mod error;
pub mod events;
pub mod manager;
pub mod registry;
pub mod session;
pub mod state;
pub mod tracker;

pub use config::{HuntConfig, ManagerConfig, TrackerConfig};
pub use env::{
    EntropyRng, HuntEnv, OracleError, PcgRng, RayCastOracle, RayHit, RayQuery, RngOracle,
    SpatialOracle, compute_seed,
};
pub use error::{ErrorSeverity, HuntError};
pub use events::{Listeners, SearchEvent, SearchListener, Topic};
pub use manager::{ManagerConfigError, TargetManager};
pub use registry::ManagerRegistry;
pub use session::{HuntSession, SessionSummary};
pub use state::{CandidateTarget, ManagerId, ObjectId, TrackerId, Transform, Vec3};
pub use tracker::{FindResult, SearchTracker, TickKind};
