//! Headless scavenger-hunt driver.
mod config;
mod driver;
mod world;

use anyhow::{Context, Result};
use config::CliConfig;
use hunt_content::ContentFactory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    let factory = ContentFactory::new(&config.data_dir);
    let mut hunt = factory.load_config()?;
    if config.seed.is_some() {
        hunt.seed = config.seed;
    }
    let scenario = factory
        .load_scenario(&config.scenario)
        .with_context(|| format!("failed to load scenario '{}'", config.scenario))?;

    tracing::info!(
        scenario = %config.scenario,
        seed = ?hunt.seed,
        managers = scenario.managers.len(),
        "Starting hunt"
    );

    let summary = driver::run(&config, &hunt, &scenario)?;
    println!(
        "found {}/{} targets in {:.2}s{}",
        summary.found,
        summary.total,
        summary.elapsed,
        if summary.complete { "" } else { " (incomplete)" }
    );
    Ok(())
}

/// Logs to stderr, and additionally to `hunt.log` when a log directory is set.
///
/// The returned guard flushes the file writer when dropped.
fn setup_logging(
    config: &CliConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let Some(log_dir) = &config.log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, "hunt.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/hunt.log", log_dir.display());
    Ok(Some(guard))
}
