//! **Canonical vocabulary for SBOM graphs.**
//!
//! `sbom-vocab` translates the vocabulary of external SBOM formats into the
//! internal enumerations of an SBOM graph model:
//!
//! - SPDX relationship types (`DEPENDS_ON`, `DYNAMIC_LINK`, ...) become [`EdgeKind`]s.
//! - `CycloneDX` hash algorithms (`SHA-256`, `BLAKE2b-512`, ...) become [`HashAlgorithmKind`]s.
//!
//! Both mappings are total and pure. An identifier without a mapping is not an
//! error: it normalizes to the `Unknown` member of the target enum, and callers
//! treat that as ordinary data.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The canonical enums, [`EdgeKind`] and [`HashAlgorithmKind`].
//! - **[`normalize`]**: The external vocabularies and the normalizer functions.
//! - **[`reports`]**: Tallies of batch normalizations, rendered as text or JSON.
//! - **[`config`]**: YAML configuration with discovery and CLI merging.
//!
//! ## Getting Started
//!
//! ```
//! use sbom_vocab::{normalize_hash_algorithm, normalize_relationship, CdxHashAlgorithm};
//! use sbom_vocab::{EdgeKind, HashAlgorithmKind};
//!
//! assert_eq!(normalize_relationship("DEPENDS_ON"), EdgeKind::DependsOn);
//! assert_eq!(normalize_relationship("depends_on"), EdgeKind::Unknown);
//!
//! let alg = CdxHashAlgorithm::from("BLAKE2b-256");
//! assert_eq!(normalize_hash_algorithm(&alg), HashAlgorithmKind::Blake2b256);
//! ```
//!
//! ### Tallying a batch
//!
//! ```
//! use sbom_vocab::normalize::Vocabulary;
//! use sbom_vocab::reports::NormalizationReport;
//!
//! let report = NormalizationReport::from_inputs(
//!     Vocabulary::SpdxRelationship,
//!     ["DEPENDS_ON", "CONTAINS", "DEPENDENCY_OF"],
//! );
//! assert_eq!(report.recognized, 2);
//! assert!(report.unmapped_inputs.contains("DEPENDENCY_OF"));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `sbom-vocab` binary exposes `lookup`, `batch` and `table` subcommands
//! on top of this library.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, BehaviorConfig, OutputConfig};
pub use error::{ErrorContext, Result, VocabError};
pub use model::{EdgeKind, HashAlgorithmKind};
pub use normalize::{
    normalize_hash_algorithm, normalize_hash_algorithm_name, normalize_relationship,
    CdxHashAlgorithm, Vocabulary,
};
pub use reports::{NormalizationReport, ReportFormat, ReportGenerator};
