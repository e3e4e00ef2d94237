//! Hash algorithm kinds used to fingerprint artifacts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash algorithm types
///
/// Displays in `CycloneDX` schema spelling (`SHA-256`, `BLAKE2b-512`), so
/// [`HashAlgorithmKind::Unknown`] renders as `UNKNOWN`. This differs from
/// [`EdgeKind`](crate::model::EdgeKind), whose names are kebab-case
/// (`unknown`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithmKind {
    #[default]
    Unknown,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
}

impl HashAlgorithmKind {
    /// Every member, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Unknown,
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Blake2b256,
        Self::Blake2b384,
        Self::Blake2b512,
        Self::Blake3,
    ];

    /// Normalize a `CycloneDX` hash algorithm.
    ///
    /// See [`crate::normalize::normalize_hash_algorithm`].
    #[must_use]
    pub fn from_cdx(alg: &crate::normalize::CdxHashAlgorithm) -> Self {
        crate::normalize::normalize_hash_algorithm(alg)
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Length of a hex-encoded digest produced by this algorithm.
    ///
    /// BLAKE3 is extendable-output; its default 256-bit length is assumed.
    #[must_use]
    pub const fn digest_hex_len(self) -> Option<usize> {
        let bits = match self {
            Self::Unknown => return None,
            Self::Md5 => 128,
            Self::Sha1 => 160,
            Self::Sha256 | Self::Sha3_256 | Self::Blake2b256 | Self::Blake3 => 256,
            Self::Sha384 | Self::Sha3_384 | Self::Blake2b384 => 384,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 => 512,
        };
        Some(bits / 4)
    }
}

impl fmt::Display for HashAlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Md5 => write!(f, "MD5"),
            Self::Sha1 => write!(f, "SHA-1"),
            Self::Sha256 => write!(f, "SHA-256"),
            Self::Sha384 => write!(f, "SHA-384"),
            Self::Sha512 => write!(f, "SHA-512"),
            Self::Sha3_256 => write!(f, "SHA3-256"),
            Self::Sha3_384 => write!(f, "SHA3-384"),
            Self::Sha3_512 => write!(f, "SHA3-512"),
            Self::Blake2b256 => write!(f, "BLAKE2b-256"),
            Self::Blake2b384 => write!(f, "BLAKE2b-384"),
            Self::Blake2b512 => write!(f, "BLAKE2b-512"),
            Self::Blake3 => write!(f, "BLAKE3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(HashAlgorithmKind::default(), HashAlgorithmKind::Unknown);
    }

    #[test]
    fn test_digest_hex_len() {
        assert_eq!(HashAlgorithmKind::Md5.digest_hex_len(), Some(32));
        assert_eq!(HashAlgorithmKind::Sha1.digest_hex_len(), Some(40));
        assert_eq!(HashAlgorithmKind::Sha256.digest_hex_len(), Some(64));
        assert_eq!(HashAlgorithmKind::Blake2b512.digest_hex_len(), Some(128));
        assert_eq!(HashAlgorithmKind::Blake3.digest_hex_len(), Some(64));
        assert_eq!(HashAlgorithmKind::Unknown.digest_hex_len(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(HashAlgorithmKind::Sha3_384.to_string(), "SHA3-384");
        assert_eq!(HashAlgorithmKind::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_unknown_spelling_differs_from_edge_kind() {
        use crate::model::EdgeKind;
        assert_eq!(EdgeKind::Unknown.to_string(), "unknown");
        assert_ne!(
            HashAlgorithmKind::Unknown.to_string(),
            EdgeKind::Unknown.to_string()
        );
    }
}
