//! Session configuration loader.

use std::path::Path;

use hunt_core::HuntConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for session configuration from TOML files.
///
/// ```toml
/// seed = 42
///
/// [tracker]
/// start_offset = 20.0
/// cast_length = 200.0
/// ignored_objects = [3]
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<HuntConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<HuntConfig> {
        let config: HuntConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        anyhow::ensure!(
            config.tracker.cast_length >= 0.0 && config.tracker.start_offset.is_finite(),
            "tracker geometry must be finite with a non-negative cast length"
        );
        Ok(config)
    }
}
