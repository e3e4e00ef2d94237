//! `CycloneDX` hash algorithm vocabulary.

use crate::model::HashAlgorithmKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash algorithm identifier as spelled by the `CycloneDX` schema.
///
/// Any spelling outside the schema's enumeration is kept verbatim in
/// [`CdxHashAlgorithm::Unrecognized`], so building one never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CdxHashAlgorithm {
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
    Unrecognized(String),
}

impl CdxHashAlgorithm {
    /// Every schema-defined algorithm, in schema order.
    pub const KNOWN: &'static [Self] = &[
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

    /// Parse a schema spelling. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "MD5" => Self::Md5,
            "SHA-1" => Self::Sha1,
            "SHA-256" => Self::Sha256,
            "SHA-384" => Self::Sha384,
            "SHA-512" => Self::Sha512,
            "SHA3-256" => Self::Sha3_256,
            "SHA3-384" => Self::Sha3_384,
            "SHA3-512" => Self::Sha3_512,
            "BLAKE2b-256" => Self::Blake2b256,
            "BLAKE2b-384" => Self::Blake2b384,
            "BLAKE2b-512" => Self::Blake2b512,
            "BLAKE3" => Self::Blake3,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The schema spelling, or the original text for unrecognized values.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Blake2b256 => "BLAKE2b-256",
            Self::Blake2b384 => "BLAKE2b-384",
            Self::Blake2b512 => "BLAKE2b-512",
            Self::Blake3 => "BLAKE3",
            Self::Unrecognized(s) => s,
        }
    }
}

impl From<&str> for CdxHashAlgorithm {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for CdxHashAlgorithm {
    fn from(value: String) -> Self {
        match Self::parse(&value) {
            Self::Unrecognized(_) => Self::Unrecognized(value),
            known => known,
        }
    }
}

impl From<CdxHashAlgorithm> for String {
    fn from(value: CdxHashAlgorithm) -> Self {
        match value {
            CdxHashAlgorithm::Unrecognized(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CdxHashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a `CycloneDX` hash algorithm into a [`HashAlgorithmKind`].
///
/// Every schema-defined algorithm maps to its own kind; unrecognized values
/// yield [`HashAlgorithmKind::Unknown`].
#[must_use]
pub fn normalize_hash_algorithm(alg: &CdxHashAlgorithm) -> HashAlgorithmKind {
    match alg {
        CdxHashAlgorithm::Md5 => HashAlgorithmKind::Md5,
        CdxHashAlgorithm::Sha1 => HashAlgorithmKind::Sha1,
        CdxHashAlgorithm::Sha256 => HashAlgorithmKind::Sha256,
        CdxHashAlgorithm::Sha384 => HashAlgorithmKind::Sha384,
        CdxHashAlgorithm::Sha512 => HashAlgorithmKind::Sha512,
        CdxHashAlgorithm::Sha3_256 => HashAlgorithmKind::Sha3_256,
        CdxHashAlgorithm::Sha3_384 => HashAlgorithmKind::Sha3_384,
        CdxHashAlgorithm::Sha3_512 => HashAlgorithmKind::Sha3_512,
        CdxHashAlgorithm::Blake2b256 => HashAlgorithmKind::Blake2b256,
        CdxHashAlgorithm::Blake2b384 => HashAlgorithmKind::Blake2b384,
        CdxHashAlgorithm::Blake2b512 => HashAlgorithmKind::Blake2b512,
        CdxHashAlgorithm::Blake3 => HashAlgorithmKind::Blake3,
        CdxHashAlgorithm::Unrecognized(_) => HashAlgorithmKind::Unknown,
    }
}

/// Parse a `CycloneDX` spelling and normalize it in one step.
#[must_use]
pub fn normalize_hash_algorithm_name(value: &str) -> HashAlgorithmKind {
    normalize_hash_algorithm(&CdxHashAlgorithm::parse(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schema_spellings() {
        assert_eq!(CdxHashAlgorithm::parse("SHA-256"), CdxHashAlgorithm::Sha256);
        assert_eq!(
            CdxHashAlgorithm::parse("BLAKE2b-384"),
            CdxHashAlgorithm::Blake2b384
        );
        assert_eq!(
            CdxHashAlgorithm::parse("SHA256"),
            CdxHashAlgorithm::Unrecognized("SHA256".to_string())
        );
        assert_eq!(
            CdxHashAlgorithm::parse("sha-256"),
            CdxHashAlgorithm::Unrecognized("sha-256".to_string())
        );
    }

    #[test]
    fn test_as_str_round_trip() {
        for alg in CdxHashAlgorithm::KNOWN {
            assert_eq!(&CdxHashAlgorithm::parse(alg.as_str()), alg);
        }
        let odd = CdxHashAlgorithm::parse("WHIRLPOOL");
        assert_eq!(odd.as_str(), "WHIRLPOOL");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize_hash_algorithm(&CdxHashAlgorithm::Sha256),
            HashAlgorithmKind::Sha256
        );
        assert_eq!(
            normalize_hash_algorithm(&CdxHashAlgorithm::Unrecognized("CRC32".into())),
            HashAlgorithmKind::Unknown
        );
        assert_eq!(normalize_hash_algorithm_name("BLAKE3"), HashAlgorithmKind::Blake3);
        assert_eq!(normalize_hash_algorithm_name(""), HashAlgorithmKind::Unknown);
    }

    #[test]
    fn test_serde_uses_schema_spelling() {
        let json = serde_json::to_string(&CdxHashAlgorithm::Sha3_512).expect("serialize");
        assert_eq!(json, "\"SHA3-512\"");

        let parsed: Vec<CdxHashAlgorithm> =
            serde_json::from_str(r#"["MD5","BLAKE2b-512","TIGER"]"#).expect("deserialize");
        assert_eq!(
            parsed,
            vec![
                CdxHashAlgorithm::Md5,
                CdxHashAlgorithm::Blake2b512,
                CdxHashAlgorithm::Unrecognized("TIGER".to_string()),
            ]
        );
    }
}
