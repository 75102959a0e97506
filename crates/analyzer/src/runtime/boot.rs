//! Boot — logging init and config load.

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::AnalyzerConfig;
use crate::error::AnalyzerError;

/// Initialise the tracing / logging subsystem.
///
/// Log events go to stderr; stdout carries only the result block.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load and validate the configuration for this run.
pub fn boot() -> Result<AnalyzerConfig, AnalyzerError> {
    debug!("Starting access log analyzer v{}", env!("CARGO_PKG_VERSION"));

    let config = AnalyzerConfig::load()?;
    config.validate().map_err(AnalyzerError::Config)?;

    info!(
        "Loaded configuration: result_path={}, normalize_path={}, echo_stdout={}",
        config.result_path.display(),
        config.normalize_path,
        config.echo_stdout
    );
    Ok(config)
}
