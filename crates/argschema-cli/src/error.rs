use std::io;
use std::path::PathBuf;

use thiserror::Error;

use argschema_core::SchemaError;

use crate::config::CONFIG_FILE_NAME;

/// Errors surfaced by the `argschema` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid YAML config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Config file does not exist: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error("No schema given; pass --schema or set `schema` in {}", CONFIG_FILE_NAME)]
    MissingSchema,

    #[error("Unknown output format: {0} (expected human or json)")]
    UnknownFormat(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status: 2 for a malformed schema, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Schema(_) => 2,
            _ => 1,
        }
    }
}
