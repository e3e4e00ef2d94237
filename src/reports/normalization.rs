//! Results of normalizing identifiers, one at a time or in batches.

use crate::model::EdgeKind;
use crate::normalize::{CdxHashAlgorithm, Vocabulary, UNMAPPED_SPDX_RELATIONSHIPS};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Outcome of normalizing a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub vocabulary: Vocabulary,
    /// Identifier exactly as given
    pub input: String,
    /// Canonical name of the normalized kind
    pub canonical: String,
    /// The identifier had no mapping
    pub unknown: bool,
    /// Recognized by the external vocabulary but deliberately unmapped
    pub intentionally_unmapped: bool,
}

impl LookupResult {
    #[must_use]
    pub fn new(vocabulary: Vocabulary, input: &str) -> Self {
        let (canonical, unknown) = vocabulary.normalize(input);
        Self {
            vocabulary,
            input: input.to_string(),
            canonical,
            unknown,
            intentionally_unmapped: vocabulary.is_intentionally_unmapped(input),
        }
    }
}

/// Tally of a batch of identifiers from one vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizationReport {
    pub vocabulary: Vocabulary,
    /// Number of identifiers processed
    pub total: usize,
    /// Identifiers that mapped to a canonical kind
    pub recognized: usize,
    /// Identifiers that normalized to the unknown kind
    pub unknown: usize,
    /// Occurrences per canonical kind, in first-seen order
    pub counts: IndexMap<String, usize>,
    /// Distinct unknown identifiers, in first-seen order
    pub unknown_inputs: IndexSet<String>,
    /// Subset of `unknown_inputs` that are deliberately unmapped
    pub unmapped_inputs: IndexSet<String>,
}

impl NormalizationReport {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            total: 0,
            recognized: 0,
            unknown: 0,
            counts: IndexMap::new(),
            unknown_inputs: IndexSet::new(),
            unmapped_inputs: IndexSet::new(),
        }
    }

    /// Build a report from an iterator of identifiers.
    pub fn from_inputs<I, S>(vocabulary: Vocabulary, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = Self::new(vocabulary);
        for input in inputs {
            report.record(input.as_ref());
        }
        report
    }

    /// Normalize one identifier and add it to the tally.
    pub fn record(&mut self, input: &str) -> LookupResult {
        let result = LookupResult::new(self.vocabulary, input);
        self.total += 1;
        if result.unknown {
            self.unknown += 1;
            if result.intentionally_unmapped {
                self.unmapped_inputs.insert(input.to_string());
            }
            self.unknown_inputs.insert(input.to_string());
        } else {
            self.recognized += 1;
            *self.counts.entry(result.canonical.clone()).or_insert(0) += 1;
        }
        result
    }

    #[must_use]
    pub const fn has_unknown(&self) -> bool {
        self.unknown > 0
    }
}

/// One row of a mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub external: String,
    pub canonical: String,
}

/// Every mapping defined for a vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct MappingTable {
    pub vocabulary: Vocabulary,
    pub entries: Vec<MappingEntry>,
    /// Recognized identifiers that map to the unknown kind
    pub unmapped: Vec<String>,
}

impl MappingTable {
    #[must_use]
    pub fn for_vocabulary(vocabulary: Vocabulary) -> Self {
        match vocabulary {
            Vocabulary::SpdxRelationship => Self {
                vocabulary,
                entries: EdgeKind::ALL
                    .iter()
                    .filter_map(|kind| {
                        kind.spdx_name().map(|name| MappingEntry {
                            external: name.to_string(),
                            canonical: kind.to_string(),
                        })
                    })
                    .collect(),
                unmapped: UNMAPPED_SPDX_RELATIONSHIPS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
            Vocabulary::CdxHashAlgorithm => Self {
                vocabulary,
                entries: CdxHashAlgorithm::KNOWN
                    .iter()
                    .map(|alg| MappingEntry {
                        external: alg.to_string(),
                        canonical: crate::normalize::normalize_hash_algorithm(alg).to_string(),
                    })
                    .collect(),
                unmapped: Vec::new(),
            },
        }
    }
}
