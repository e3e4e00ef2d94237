//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-vocab.yaml",
    ".sbom-vocab.yml",
    "sbom-vocab.yaml",
    "sbom-vocab.yml",
];

/// Directories searched for a config file, in discovery order.
///
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/sbom-vocab/)
/// 4. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let candidates = [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|dir| dir.join("sbom-vocab")),
        dirs::home_dir(),
    ];

    // The same directory can qualify twice, e.g. cwd at the git root
    let mut search = Vec::new();
    for dir in candidates.into_iter().flatten() {
        if !search.contains(&dir) {
            search.push(dir);
        }
    }
    search
}

/// Discover a config file by searching standard locations.
///
/// An existing explicit path wins; otherwise [`config_search_dirs`] is
/// searched in order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override; this is how CLI
    /// flags are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if !other.output.pretty {
            self.output.pretty = false;
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.fail_on_unknown {
            self.behavior.fail_on_unknown = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# sbom-vocab Configuration File
# ==============================
#
# Place it at:
#   - .sbom-vocab.yaml in your project root
#   - ~/.config/sbom-vocab/sbom-vocab.yaml for global config
#
# CLI arguments always override file settings.

# Output configuration
output:
  # Format: auto, text, json (auto renders text)
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  # Pretty-print JSON output
  pretty: true
  # Disable colored output (NO_COLOR is also respected)
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 if any identifier has no canonical mapping
  fail_on_unknown: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
