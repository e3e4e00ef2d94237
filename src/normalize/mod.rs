//! Normalization of external SBOM vocabulary.
//!
//! SPDX relationship types and `CycloneDX` hash algorithms are mapped onto the
//! canonical enums in [`crate::model`]. Every function here is total and pure:
//! an input without a mapping produces the `Unknown` member rather than an error.
//!
//! ```
//! use sbom_vocab::model::{EdgeKind, HashAlgorithmKind};
//! use sbom_vocab::normalize::{normalize_hash_algorithm, normalize_relationship, CdxHashAlgorithm};
//!
//! assert_eq!(normalize_relationship("DYNAMIC_LINK"), EdgeKind::DynamicLink);
//! assert_eq!(normalize_relationship("DEPENDENCY_OF"), EdgeKind::Unknown);
//! assert_eq!(
//!     normalize_hash_algorithm(&CdxHashAlgorithm::Sha256),
//!     HashAlgorithmKind::Sha256
//! );
//! ```

mod cyclonedx;
mod spdx;

pub use cyclonedx::{normalize_hash_algorithm, normalize_hash_algorithm_name, CdxHashAlgorithm};
pub use spdx::{is_unmapped_spdx_relationship, normalize_relationship, UNMAPPED_SPDX_RELATIONSHIPS};

use serde::{Deserialize, Serialize};
use std::fmt;

/// External vocabulary an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Vocabulary {
    /// SPDX relationship types (e.g. `DEPENDS_ON`)
    #[value(alias = "spdx")]
    SpdxRelationship,
    /// `CycloneDX` hash algorithms (e.g. `SHA-256`)
    #[value(alias = "cdx-hash")]
    CdxHashAlgorithm,
}

impl Vocabulary {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpdxRelationship => "SPDX relationship type",
            Self::CdxHashAlgorithm => "CycloneDX hash algorithm",
        }
    }

    /// Normalize `value` and return the canonical name of the result.
    ///
    /// The second element is `true` when the value had no mapping.
    #[must_use]
    pub fn normalize(self, value: &str) -> (String, bool) {
        match self {
            Self::SpdxRelationship => {
                let kind = normalize_relationship(value);
                (kind.to_string(), kind.is_unknown())
            }
            Self::CdxHashAlgorithm => {
                let kind = normalize_hash_algorithm_name(value);
                (kind.to_string(), kind.is_unknown())
            }
        }
    }

    /// Whether `value` is recognized by the external vocabulary but
    /// intentionally has no canonical counterpart.
    #[must_use]
    pub fn is_intentionally_unmapped(self, value: &str) -> bool {
        match self {
            Self::SpdxRelationship => is_unmapped_spdx_relationship(value),
            Self::CdxHashAlgorithm => false,
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpdxRelationship => write!(f, "spdx-relationship"),
            Self::CdxHashAlgorithm => write!(f, "cdx-hash-algorithm"),
        }
    }
}
