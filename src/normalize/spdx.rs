//! SPDX relationship types.

use crate::model::EdgeKind;

/// SPDX relationship types that are recognized but deliberately left
/// unmapped. Each is the reverse direction of a mapped relationship.
pub const UNMAPPED_SPDX_RELATIONSHIPS: &[&str] = &[
    "CONTAINED_BY",
    "DEPENDENCY_OF",
    "DESCRIBED_BY",
    "GENERATED_FROM",
    "PATCH_APPLIED",
    "PREREQUISITE_FOR",
];

/// Normalize an SPDX relationship type into an [`EdgeKind`].
///
/// Matching is exact and case-sensitive. Anything outside the mapped set,
/// including the names in [`UNMAPPED_SPDX_RELATIONSHIPS`], yields
/// [`EdgeKind::Unknown`].
#[must_use]
pub fn normalize_relationship(name: &str) -> EdgeKind {
    match name {
        "AMENDS" => EdgeKind::Amends,
        "ANCESTOR_OF" => EdgeKind::Ancestor,
        "BUILD_DEPENDENCY_OF" => EdgeKind::BuildDependency,
        "BUILD_TOOL_OF" => EdgeKind::BuildTool,
        "CONTAINS" => EdgeKind::Contains,
        "COPY_OF" => EdgeKind::Copy,
        "DATA_FILE_OF" => EdgeKind::DataFile,
        "DEPENDENCY_MANIFEST_OF" => EdgeKind::DependencyManifest,
        "DEPENDS_ON" => EdgeKind::DependsOn,
        "DESCENDANT_OF" => EdgeKind::Descendant,
        "DESCRIBES" => EdgeKind::Describes,
        "DEV_DEPENDENCY_OF" => EdgeKind::DevDependency,
        "DEV_TOOL_OF" => EdgeKind::DevTool,
        "DISTRIBUTION_ARTIFACT" => EdgeKind::DistributionArtifact,
        "DOCUMENTATION_OF" => EdgeKind::Documentation,
        "DYNAMIC_LINK" => EdgeKind::DynamicLink,
        "EXAMPLE_OF" => EdgeKind::Example,
        "EXPANDED_FROM_ARCHIVE" => EdgeKind::ExpandedFromArchive,
        "FILE_ADDED" => EdgeKind::FileAdded,
        "FILE_DELETED" => EdgeKind::FileDeleted,
        "FILE_MODIFIED" => EdgeKind::FileModified,
        "GENERATES" => EdgeKind::Generates,
        "METAFILE_OF" => EdgeKind::Metafile,
        "OPTIONAL_COMPONENT_OF" => EdgeKind::OptionalComponent,
        "OPTIONAL_DEPENDENCY_OF" => EdgeKind::OptionalDependency,
        "OTHER" => EdgeKind::Other,
        "PACKAGE_OF" => EdgeKind::Package,
        "PATCH_FOR" => EdgeKind::Patch,
        "HAS_PREREQUISITE" => EdgeKind::Prerequisite,
        "PROVIDED_DEPENDENCY_OF" => EdgeKind::ProvidedDependency,
        "REQUIREMENT_DESCRIPTION_FOR" => EdgeKind::RequirementFor,
        "RUNTIME_DEPENDENCY_OF" => EdgeKind::RuntimeDependency,
        "SPECIFICATION_FOR" => EdgeKind::SpecificationFor,
        "STATIC_LINK" => EdgeKind::StaticLink,
        "TEST_OF" => EdgeKind::Test,
        "TEST_CASE_OF" => EdgeKind::TestCase,
        "TEST_DEPENDENCY_OF" => EdgeKind::TestDependency,
        "TEST_TOOL_OF" => EdgeKind::TestTool,
        "VARIANT_OF" => EdgeKind::Variant,
        // CONTAINED_BY, DEPENDENCY_OF, DESCRIBED_BY, GENERATED_FROM,
        // PATCH_APPLIED and PREREQUISITE_FOR land here on purpose.
        _ => EdgeKind::Unknown,
    }
}

/// Whether `name` is a known SPDX relationship type that has no mapping.
#[must_use]
pub fn is_unmapped_spdx_relationship(name: &str) -> bool {
    UNMAPPED_SPDX_RELATIONSHIPS.contains(&name)
}
