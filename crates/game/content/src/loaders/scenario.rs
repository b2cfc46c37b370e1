//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scenarios from RON files.
///
/// ```ron
/// (
///     player: (object: (1), position: (x: 0.0, y: 0.0, z: 0.0)),
///     objects: [
///         (object: (10), position: (x: 60.0, y: 0.0, z: 0.0), radius: 5.0, name: "teapot"),
///     ],
///     managers: [
///         (desired_count: 1, candidates: [(object: (10), hint: "Something that whistles")]),
///     ],
/// )
/// ```
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let issues = scenario.validate();
        if let Some(first) = issues.first() {
            anyhow::bail!("{} ({} issue(s) in total)", first, issues.len());
        }
        Ok(scenario)
    }
}
