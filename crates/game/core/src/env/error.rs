//! Oracle access errors.

use crate::error::{ErrorSeverity, HuntError};

/// Errors that occur when a collaborator oracle is missing from [`super::HuntEnv`].
///
/// Callers on the gameplay path turn these into "no result" outcomes; the
/// error exists so the reason can be logged and asserted in tests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// SpatialOracle is not available in the environment.
    #[error("SpatialOracle not available")]
    SpatialNotAvailable,

    /// RayCastOracle is not available in the environment.
    #[error("RayCastOracle not available")]
    RayCastNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl HuntError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // A frame without a collaborator just skips the dependent step.
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SpatialNotAvailable => "ORACLE_SPATIAL_NOT_AVAILABLE",
            RayCastNotAvailable => "ORACLE_RAYCAST_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
