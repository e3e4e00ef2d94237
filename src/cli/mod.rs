//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod batch;
mod lookup;
mod table;

pub use batch::{normalize_batch, run_batch};
pub use lookup::run_lookup;
pub use table::run_table;

use crate::config::{load_config_file, load_or_default, AppConfig, ConfigFileError};
use crate::error::{Result, VocabError};
use std::path::{Path, PathBuf};

/// Load the configuration file for a command, without CLI overrides.
///
/// An explicitly requested config file must exist and parse; discovered
/// files are best-effort. Returns the config and the file it came from.
pub fn load_config(explicit_path: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    let Some(path) = explicit_path else {
        return Ok(load_or_default(None));
    };

    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()).into());
    }
    if path.is_dir() {
        return Err(VocabError::config(format!(
            "{} is a directory, expected a YAML file",
            path.display()
        )));
    }
    let config = load_config_file(path)?;
    Ok((config, Some(path.to_path_buf())))
}

/// Resolve the effective configuration for a command.
///
/// Loads the file as [`load_config`] does, then merges `cli_overrides` on top.
pub fn resolve_config(
    explicit_path: Option<&Path>,
    cli_overrides: &AppConfig,
) -> Result<AppConfig> {
    let (mut config, loaded_from) = load_config(explicit_path)?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config.merge(cli_overrides);
    Ok(config)
}
