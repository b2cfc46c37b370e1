//! Demo driver configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for a headless hunt run.
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
    /// Overrides the seed from `config.toml`.
    pub seed: Option<u64>,
    pub max_frames: u32,
    /// Seconds per simulated frame.
    pub frame_delta: f32,
    /// Radians the player turns per frame while sweeping.
    pub turn_rate: f32,
    /// Frames between hint requests; 0 disables hints.
    pub hint_interval: u32,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: "house".to_string(),
            seed: None,
            max_frames: 2_000,
            frame_delta: 1.0 / 60.0,
            turn_rate: 0.05,
            hint_interval: 300,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HUNT_DATA_DIR` - Content directory (default: `data`)
    /// - `HUNT_SCENARIO` - Scenario name under `scenarios/` (default: `house`)
    /// - `HUNT_SEED` - Seed override (default: from `config.toml`)
    /// - `HUNT_MAX_FRAMES` - Frame budget before giving up (default: 2000)
    /// - `HUNT_FRAME_DELTA` - Seconds per frame (default: 1/60)
    /// - `HUNT_TURN_RATE` - Radians turned per frame (default: 0.05)
    /// - `HUNT_HINT_INTERVAL` - Frames between hints, 0 to disable (default: 300)
    /// - `HUNT_LOG_DIR` - Also write logs to `hunt.log` in this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("HUNT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(scenario) = env::var("HUNT_SCENARIO") {
            config.scenario = scenario;
        }
        config.seed = read_env::<u64>("HUNT_SEED");
        if let Some(frames) = read_env::<u32>("HUNT_MAX_FRAMES") {
            config.max_frames = frames.max(1);
        }
        if let Some(delta) = read_env::<f32>("HUNT_FRAME_DELTA").filter(|d| *d > 0.0) {
            config.frame_delta = delta;
        }
        if let Some(rate) = read_env::<f32>("HUNT_TURN_RATE") {
            config.turn_rate = rate;
        }
        if let Some(interval) = read_env::<u32>("HUNT_HINT_INTERVAL") {
            config.hint_interval = interval;
        }
        config.log_dir = env::var("HUNT_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
