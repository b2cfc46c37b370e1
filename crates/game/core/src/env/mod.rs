//! Traits describing the host collaborators.
//!
//! Oracles expose owner placement, ray casting and randomness. The [`HuntEnv`]
//! aggregate bundles them so trackers and sessions can reach everything they
//! need without hard coupling to a concrete engine.
mod error;
mod raycast;
mod rng;
mod spatial;

pub use error::OracleError;
pub use raycast::{RayCastOracle, RayHit, RayQuery};
pub use rng::{EntropyRng, PcgRng, RngOracle, compute_seed};
pub use spatial::SpatialOracle;

/// Aggregates the oracles a search tracker talks to during a frame.
#[derive(Clone, Copy)]
pub struct HuntEnv<'a> {
    spatial: Option<&'a dyn SpatialOracle>,
    ray_cast: Option<&'a dyn RayCastOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> HuntEnv<'a> {
    pub fn new(
        spatial: Option<&'a dyn SpatialOracle>,
        ray_cast: Option<&'a dyn RayCastOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            spatial,
            ray_cast,
            rng,
        }
    }

    pub fn with_all(
        spatial: &'a dyn SpatialOracle,
        ray_cast: &'a dyn RayCastOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(Some(spatial), Some(ray_cast), Some(rng))
    }

    pub fn empty() -> Self {
        Self::new(None, None, None)
    }

    /// Returns the SpatialOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SpatialNotAvailable` if no spatial oracle was provided.
    pub fn spatial(&self) -> Result<&'a dyn SpatialOracle, OracleError> {
        self.spatial.ok_or(OracleError::SpatialNotAvailable)
    }

    /// Returns the RayCastOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RayCastNotAvailable` if no ray-cast oracle was provided.
    pub fn ray_cast(&self) -> Result<&'a dyn RayCastOracle, OracleError> {
        self.ray_cast.ok_or(OracleError::RayCastNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl core::fmt::Debug for HuntEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HuntEnv")
            .field("spatial", &self.spatial.is_some())
            .field("ray_cast", &self.ray_cast.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
