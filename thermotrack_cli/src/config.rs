// thermotrack_cli/src/config.rs

//! Loading of the tool's configuration. Values are layered: built-in
//! defaults, then a TOML file, then `THERMOTRACK_*` environment variables.

use crate::error::CliError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thermotrack_core::prelude::{AlignmentParams, ParserOptions, SceneOptions};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "thermotrack.toml";
pub const ENV_PREFIX: &str = "THERMOTRACK_";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub alignment: AlignmentParams,
    #[serde(default)]
    pub parser: ParserOptions,
    #[serde(default)]
    pub render: SceneOptions,
}

/// Builds the layered provider. A missing default file is skipped silently;
/// an explicit `path` must exist.
pub fn config_figment(path: Option<&Path>) -> Result<Figment, CliError> {
    let figment = Figment::from(Serialized::defaults(AppConfig::default()));
    let figment = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::MissingConfig(path.to_path_buf()));
            }
            info!("Loading configuration from: {}", path.display());
            figment.merge(Toml::file(path))
        }
        None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    };
    Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

pub fn load_config(path: Option<&Path>) -> Result<AppConfig, CliError> {
    let config: AppConfig = config_figment(path)?
        .extract()
        .map_err(|e| CliError::Config(Box::new(e)))?;
    config.alignment.validate()?;
    Ok(config)
}
