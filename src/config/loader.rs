// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::errors::Result;

pub const CONFIG_ENV_VAR: &str = "ECS_EXEC_PF_CONFIG";

/// Load a defaults file from a given path.
///
/// This only performs TOML deserialization; merging with CLI flags and the
/// required-input checks live in [`crate::config::validate`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), "loaded defaults file");

    Ok(config)
}

/// Load the defaults file if one was requested, either explicitly or via
/// `ECS_EXEC_PF_CONFIG`. No file requested means empty defaults.
pub fn load_optional(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit.map(Path::to_path_buf).or_else(config_path_from_env) {
        Some(path) => load_from_path(path),
        None => Ok(ConfigFile::default()),
    }
}

pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
