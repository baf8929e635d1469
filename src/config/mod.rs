mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration for either binary.
///
/// `CONFIG_PATH` must point at an existing file when set. Without it,
/// `config.yaml` in the working directory is used if present, otherwise the
/// built-in defaults. `HOST` and `PORT` override the file afterwards.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => from_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => from_file(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_overrides(&mut config, env::var("HOST").ok(), env::var("PORT").ok())?;

    Ok(config)
}

pub async fn from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

pub fn apply_overrides(
    config: &mut Config,
    host: Option<String>,
    port: Option<String>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }

    if let Some(port) = port {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(())
}
