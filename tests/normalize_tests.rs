//! Integration tests for the vocabulary normalizers.

use sbom_vocab::model::{EdgeKind, HashAlgorithmKind};
use sbom_vocab::normalize::{
    normalize_hash_algorithm, normalize_hash_algorithm_name, normalize_relationship,
    CdxHashAlgorithm, UNMAPPED_SPDX_RELATIONSHIPS,
};
use std::collections::HashSet;

/// Every mapped SPDX relationship type with its expected kind
const SPDX_TABLE: &[(&str, EdgeKind)] = &[
    ("AMENDS", EdgeKind::Amends),
    ("ANCESTOR_OF", EdgeKind::Ancestor),
    ("BUILD_DEPENDENCY_OF", EdgeKind::BuildDependency),
    ("BUILD_TOOL_OF", EdgeKind::BuildTool),
    ("CONTAINS", EdgeKind::Contains),
    ("COPY_OF", EdgeKind::Copy),
    ("DATA_FILE_OF", EdgeKind::DataFile),
    ("DEPENDENCY_MANIFEST_OF", EdgeKind::DependencyManifest),
    ("DEPENDS_ON", EdgeKind::DependsOn),
    ("DESCENDANT_OF", EdgeKind::Descendant),
    ("DESCRIBES", EdgeKind::Describes),
    ("DEV_DEPENDENCY_OF", EdgeKind::DevDependency),
    ("DEV_TOOL_OF", EdgeKind::DevTool),
    ("DISTRIBUTION_ARTIFACT", EdgeKind::DistributionArtifact),
    ("DOCUMENTATION_OF", EdgeKind::Documentation),
    ("DYNAMIC_LINK", EdgeKind::DynamicLink),
    ("EXAMPLE_OF", EdgeKind::Example),
    ("EXPANDED_FROM_ARCHIVE", EdgeKind::ExpandedFromArchive),
    ("FILE_ADDED", EdgeKind::FileAdded),
    ("FILE_DELETED", EdgeKind::FileDeleted),
    ("FILE_MODIFIED", EdgeKind::FileModified),
    ("GENERATES", EdgeKind::Generates),
    ("METAFILE_OF", EdgeKind::Metafile),
    ("OPTIONAL_COMPONENT_OF", EdgeKind::OptionalComponent),
    ("OPTIONAL_DEPENDENCY_OF", EdgeKind::OptionalDependency),
    ("OTHER", EdgeKind::Other),
    ("PACKAGE_OF", EdgeKind::Package),
    ("PATCH_FOR", EdgeKind::Patch),
    ("HAS_PREREQUISITE", EdgeKind::Prerequisite),
    ("PROVIDED_DEPENDENCY_OF", EdgeKind::ProvidedDependency),
    ("REQUIREMENT_DESCRIPTION_FOR", EdgeKind::RequirementFor),
    ("RUNTIME_DEPENDENCY_OF", EdgeKind::RuntimeDependency),
    ("SPECIFICATION_FOR", EdgeKind::SpecificationFor),
    ("STATIC_LINK", EdgeKind::StaticLink),
    ("TEST_OF", EdgeKind::Test),
    ("TEST_CASE_OF", EdgeKind::TestCase),
    ("TEST_DEPENDENCY_OF", EdgeKind::TestDependency),
    ("TEST_TOOL_OF", EdgeKind::TestTool),
    ("VARIANT_OF", EdgeKind::Variant),
];

const CDX_TABLE: &[(&str, CdxHashAlgorithm, HashAlgorithmKind)] = &[
    ("MD5", CdxHashAlgorithm::Md5, HashAlgorithmKind::Md5),
    ("SHA-1", CdxHashAlgorithm::Sha1, HashAlgorithmKind::Sha1),
    ("SHA-256", CdxHashAlgorithm::Sha256, HashAlgorithmKind::Sha256),
    ("SHA-384", CdxHashAlgorithm::Sha384, HashAlgorithmKind::Sha384),
    ("SHA-512", CdxHashAlgorithm::Sha512, HashAlgorithmKind::Sha512),
    ("SHA3-256", CdxHashAlgorithm::Sha3_256, HashAlgorithmKind::Sha3_256),
    ("SHA3-384", CdxHashAlgorithm::Sha3_384, HashAlgorithmKind::Sha3_384),
    ("SHA3-512", CdxHashAlgorithm::Sha3_512, HashAlgorithmKind::Sha3_512),
    ("BLAKE2b-256", CdxHashAlgorithm::Blake2b256, HashAlgorithmKind::Blake2b256),
    ("BLAKE2b-384", CdxHashAlgorithm::Blake2b384, HashAlgorithmKind::Blake2b384),
    ("BLAKE2b-512", CdxHashAlgorithm::Blake2b512, HashAlgorithmKind::Blake2b512),
    ("BLAKE3", CdxHashAlgorithm::Blake3, HashAlgorithmKind::Blake3),
];

// ============================================================================
// SPDX relationships
// ============================================================================

#[test]
fn test_every_known_relationship_maps_to_documented_kind() {
    for (name, expected) in SPDX_TABLE {
        assert_eq!(normalize_relationship(name), *expected, "{name}");
    }
}

#[test]
fn test_relationship_mapping_has_no_collisions() {
    let kinds: HashSet<EdgeKind> = SPDX_TABLE
        .iter()
        .map(|(name, _)| normalize_relationship(name))
        .collect();
    assert_eq!(kinds.len(), SPDX_TABLE.len());
    assert!(!kinds.contains(&EdgeKind::Unknown));
}

#[test]
fn test_relationship_mapping_covers_every_kind() {
    // Every non-unknown kind is reachable from exactly one SPDX name
    assert_eq!(SPDX_TABLE.len(), EdgeKind::ALL.len() - 1);
    for kind in EdgeKind::ALL.iter().filter(|k| !k.is_unknown()) {
        let sources: Vec<_> = SPDX_TABLE.iter().filter(|(_, k)| k == kind).collect();
        assert_eq!(sources.len(), 1, "{kind}");
        assert_eq!(kind.spdx_name(), Some(sources[0].0));
    }
}

#[test]
fn test_intentionally_unmapped_relationships() {
    let expected = [
        "CONTAINED_BY",
        "DEPENDENCY_OF",
        "DESCRIBED_BY",
        "GENERATED_FROM",
        "PATCH_APPLIED",
        "PREREQUISITE_FOR",
    ];
    assert_eq!(UNMAPPED_SPDX_RELATIONSHIPS, expected.as_slice());
    for name in expected {
        assert_eq!(normalize_relationship(name), EdgeKind::Unknown, "{name}");
    }
}

#[test]
fn test_garbage_relationships_are_unknown() {
    for name in ["", "FOO", "UNKNOWN_FUTURE_KIND", "UNKNOWN", "DEPENDS ON", "DEPENDS_ON_"] {
        assert_eq!(normalize_relationship(name), EdgeKind::Unknown, "{name:?}");
    }
}

#[test]
fn test_relationships_are_case_sensitive() {
    for (name, _) in SPDX_TABLE {
        let lower = name.to_lowercase();
        assert_eq!(normalize_relationship(&lower), EdgeKind::Unknown, "{lower}");
    }
}

#[test]
fn test_edge_kind_from_spdx_matches_free_function() {
    for (name, _) in SPDX_TABLE {
        assert_eq!(EdgeKind::from_spdx(name), normalize_relationship(name));
    }
    assert_eq!(EdgeKind::from_spdx("DYNAMIC_LINK"), EdgeKind::DynamicLink);
}

// ============================================================================
// CycloneDX hash algorithms
// ============================================================================

#[test]
fn test_every_cdx_algorithm_maps_to_matching_kind() {
    for (spelling, alg, expected) in CDX_TABLE {
        assert_eq!(&CdxHashAlgorithm::parse(spelling), alg);
        assert_eq!(normalize_hash_algorithm(alg), *expected, "{spelling}");
        assert_eq!(HashAlgorithmKind::from_cdx(alg), *expected);
        assert_eq!(normalize_hash_algorithm_name(spelling), *expected);
    }
}

#[test]
fn test_hash_mapping_is_injective() {
    let kinds: HashSet<HashAlgorithmKind> = CdxHashAlgorithm::KNOWN
        .iter()
        .map(normalize_hash_algorithm)
        .collect();
    assert_eq!(kinds.len(), CdxHashAlgorithm::KNOWN.len());
    assert_eq!(kinds.len(), HashAlgorithmKind::ALL.len() - 1);
    assert!(!kinds.contains(&HashAlgorithmKind::Unknown));
}

#[test]
fn test_unrecognized_algorithms_are_unknown() {
    for spelling in ["", "SHA256", "sha-256", "CRC32", "BLAKE2B-256", "UNKNOWN"] {
        let alg = CdxHashAlgorithm::parse(spelling);
        assert!(matches!(alg, CdxHashAlgorithm::Unrecognized(_)), "{spelling:?}");
        assert_eq!(normalize_hash_algorithm(&alg), HashAlgorithmKind::Unknown);
    }
}

#[test]
fn test_normalizers_are_repeatable() {
    for _ in 0..3 {
        assert_eq!(normalize_relationship("TEST_OF"), EdgeKind::Test);
        assert_eq!(
            normalize_hash_algorithm(&CdxHashAlgorithm::Sha256),
            HashAlgorithmKind::Sha256
        );
    }
}

#[test]
fn test_digest_lengths_match_algorithm_family() {
    for (_, alg, kind) in CDX_TABLE {
        let len = kind.digest_hex_len().expect("known kinds have a length");
        let expected = match alg {
            CdxHashAlgorithm::Md5 => 32,
            CdxHashAlgorithm::Sha1 => 40,
            CdxHashAlgorithm::Sha384
            | CdxHashAlgorithm::Sha3_384
            | CdxHashAlgorithm::Blake2b384 => 96,
            CdxHashAlgorithm::Sha512
            | CdxHashAlgorithm::Sha3_512
            | CdxHashAlgorithm::Blake2b512 => 128,
            _ => 64,
        };
        assert_eq!(len, expected, "{alg}");
    }
}
