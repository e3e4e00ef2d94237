#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_vocab::normalize::{normalize_hash_algorithm, normalize_relationship, CdxHashAlgorithm};

/// Fuzz both normalizers with arbitrary identifiers.
///
/// Any kind other than `Unknown` must round-trip back to the input text.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let kind = normalize_relationship(s);
        if let Some(name) = kind.spdx_name() {
            assert_eq!(name, s);
        }

        let alg = CdxHashAlgorithm::parse(s);
        assert_eq!(alg.as_str(), s);
        let _ = normalize_hash_algorithm(&alg);
    }
});
