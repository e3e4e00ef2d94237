//! Configuration module for sbom-vocab.
//!
//! - Type-safe configuration structures
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.sbom-vocab.yaml` file in your project root or `~/.config/sbom-vocab/`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   fail_on_unknown: true
//! ```

pub mod file;
mod types;

pub use types::{AppConfig, BehaviorConfig, OutputConfig};

pub use file::{
    config_search_dirs, discover_config_file, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of
/// `.sbom-vocab.yaml` files.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    let json = serde_json::to_string_pretty(&schema).map_err(crate::reports::ReportError::from)?;
    Ok(json)
}
