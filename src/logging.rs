use crate::{
    Error, Result,
    config::{LogFormat, LogsConfig},
};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(())
}

/// Builds the filter: `RUST_LOG` wins over the configured level.
pub fn build_filter(config: &LogsConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    validate_log_level(&config.level)?;
    EnvFilter::try_new(&config.level).map_err(|e| Error::config(e.to_string()))
}

/// Installs the process-wide subscriber, writing to stdout.
///
/// Must be called once, from `main`. A second call returns an error rather
/// than replacing the installed subscriber.
pub fn init(config: &LogsConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|e| Error::internal(format!("Failed to install logger: {}", e)))
}
