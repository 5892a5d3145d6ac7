use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::commands::OutputFormat;
use crate::error::CliError;

/// Config file looked up in the current directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "argschema.config.yaml";

/// Project configuration from argschema.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct ArgschemaConfig {
    pub schema: Option<String>,
    pub format: Option<String>,
}

impl ArgschemaConfig {
    /// Command-line schema if given, else the configured one.
    pub fn resolve_schema(&self, cli_schema: Option<String>) -> Result<String, CliError> {
        cli_schema
            .or_else(|| self.schema.clone())
            .ok_or(CliError::MissingSchema)
    }

    /// Command-line format if given, else the configured one, else human.
    pub fn resolve_format(&self, cli_format: Option<String>) -> Result<OutputFormat, CliError> {
        match cli_format.or_else(|| self.format.clone()) {
            Some(name) => name.parse(),
            None => Ok(OutputFormat::Human),
        }
    }
}

/// Load configuration from an explicit path, or from
/// [`CONFIG_FILE_NAME`] in the current directory if it exists.
pub fn load_config(explicit: Option<&Path>) -> Result<ArgschemaConfig, CliError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::MissingConfig(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(CONFIG_FILE_NAME);
            if !path.exists() {
                debug!("No config file found, using defaults");
                return Ok(ArgschemaConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    let config: ArgschemaConfig =
        serde_yaml::from_str(&content).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?;

    debug!(path:? = path, config:?; "Loaded config");
    Ok(config)
}
