//! Data-driven hunt content and loaders.
//!
//! This crate describes what a level contains and loads it from data files:
//! - Scenarios (RON): player placement, object placement, manager pools
//! - Session configuration (TOML): seed and search-ray geometry
//!
//! Content is consumed by hosts and never appears in tracker state.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{ObjectSpec, PlayerSpec, Scenario, ScenarioIssue};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ScenarioLoader};
