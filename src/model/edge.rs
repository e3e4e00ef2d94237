//! Relationship kinds for edges in the SBOM graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of relationship between two nodes of the SBOM graph.
///
/// Each member except [`EdgeKind::Unknown`] corresponds to exactly one SPDX
/// relationship type. `Unknown` is a regular value, not an error: it is what
/// every unrecognized or deliberately unmapped relationship normalizes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    #[default]
    Unknown,
    Amends,
    Ancestor,
    BuildDependency,
    BuildTool,
    Contains,
    Copy,
    DataFile,
    DependencyManifest,
    DependsOn,
    Descendant,
    Describes,
    DevDependency,
    DevTool,
    DistributionArtifact,
    Documentation,
    DynamicLink,
    Example,
    ExpandedFromArchive,
    FileAdded,
    FileDeleted,
    FileModified,
    Generates,
    Metafile,
    OptionalComponent,
    OptionalDependency,
    Other,
    Package,
    Patch,
    Prerequisite,
    ProvidedDependency,
    RequirementFor,
    RuntimeDependency,
    SpecificationFor,
    StaticLink,
    Test,
    TestCase,
    TestDependency,
    TestTool,
    Variant,
}

impl EdgeKind {
    /// Every member, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Unknown,
        Self::Amends,
        Self::Ancestor,
        Self::BuildDependency,
        Self::BuildTool,
        Self::Contains,
        Self::Copy,
        Self::DataFile,
        Self::DependencyManifest,
        Self::DependsOn,
        Self::Descendant,
        Self::Describes,
        Self::DevDependency,
        Self::DevTool,
        Self::DistributionArtifact,
        Self::Documentation,
        Self::DynamicLink,
        Self::Example,
        Self::ExpandedFromArchive,
        Self::FileAdded,
        Self::FileDeleted,
        Self::FileModified,
        Self::Generates,
        Self::Metafile,
        Self::OptionalComponent,
        Self::OptionalDependency,
        Self::Other,
        Self::Package,
        Self::Patch,
        Self::Prerequisite,
        Self::ProvidedDependency,
        Self::RequirementFor,
        Self::RuntimeDependency,
        Self::SpecificationFor,
        Self::StaticLink,
        Self::Test,
        Self::TestCase,
        Self::TestDependency,
        Self::TestTool,
        Self::Variant,
    ];

    /// Normalize an SPDX relationship type.
    ///
    /// See [`crate::normalize::normalize_relationship`].
    #[must_use]
    pub fn from_spdx(name: &str) -> Self {
        crate::normalize::normalize_relationship(name)
    }

    /// The SPDX relationship type this kind was normalized from.
    ///
    /// Returns `None` for [`EdgeKind::Unknown`].
    #[must_use]
    pub const fn spdx_name(self) -> Option<&'static str> {
        let name = match self {
            Self::Unknown => return None,
            Self::Amends => "AMENDS",
            Self::Ancestor => "ANCESTOR_OF",
            Self::BuildDependency => "BUILD_DEPENDENCY_OF",
            Self::BuildTool => "BUILD_TOOL_OF",
            Self::Contains => "CONTAINS",
            Self::Copy => "COPY_OF",
            Self::DataFile => "DATA_FILE_OF",
            Self::DependencyManifest => "DEPENDENCY_MANIFEST_OF",
            Self::DependsOn => "DEPENDS_ON",
            Self::Descendant => "DESCENDANT_OF",
            Self::Describes => "DESCRIBES",
            Self::DevDependency => "DEV_DEPENDENCY_OF",
            Self::DevTool => "DEV_TOOL_OF",
            Self::DistributionArtifact => "DISTRIBUTION_ARTIFACT",
            Self::Documentation => "DOCUMENTATION_OF",
            Self::DynamicLink => "DYNAMIC_LINK",
            Self::Example => "EXAMPLE_OF",
            Self::ExpandedFromArchive => "EXPANDED_FROM_ARCHIVE",
            Self::FileAdded => "FILE_ADDED",
            Self::FileDeleted => "FILE_DELETED",
            Self::FileModified => "FILE_MODIFIED",
            Self::Generates => "GENERATES",
            Self::Metafile => "METAFILE_OF",
            Self::OptionalComponent => "OPTIONAL_COMPONENT_OF",
            Self::OptionalDependency => "OPTIONAL_DEPENDENCY_OF",
            Self::Other => "OTHER",
            Self::Package => "PACKAGE_OF",
            Self::Patch => "PATCH_FOR",
            Self::Prerequisite => "HAS_PREREQUISITE",
            Self::ProvidedDependency => "PROVIDED_DEPENDENCY_OF",
            Self::RequirementFor => "REQUIREMENT_DESCRIPTION_FOR",
            Self::RuntimeDependency => "RUNTIME_DEPENDENCY_OF",
            Self::SpecificationFor => "SPECIFICATION_FOR",
            Self::StaticLink => "STATIC_LINK",
            Self::Test => "TEST_OF",
            Self::TestCase => "TEST_CASE_OF",
            Self::TestDependency => "TEST_DEPENDENCY_OF",
            Self::TestTool => "TEST_TOOL_OF",
            Self::Variant => "VARIANT_OF",
        };
        Some(name)
    }

    /// Whether this edge expresses a package dependency of some scope.
    #[must_use]
    pub const fn is_dependency(self) -> bool {
        matches!(
            self,
            Self::DependsOn
                | Self::BuildDependency
                | Self::DevDependency
                | Self::OptionalDependency
                | Self::ProvidedDependency
                | Self::RuntimeDependency
                | Self::TestDependency
        )
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Stable kebab-case name, as used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Amends => "amends",
            Self::Ancestor => "ancestor",
            Self::BuildDependency => "build-dependency",
            Self::BuildTool => "build-tool",
            Self::Contains => "contains",
            Self::Copy => "copy",
            Self::DataFile => "data-file",
            Self::DependencyManifest => "dependency-manifest",
            Self::DependsOn => "depends-on",
            Self::Descendant => "descendant",
            Self::Describes => "describes",
            Self::DevDependency => "dev-dependency",
            Self::DevTool => "dev-tool",
            Self::DistributionArtifact => "distribution-artifact",
            Self::Documentation => "documentation",
            Self::DynamicLink => "dynamic-link",
            Self::Example => "example",
            Self::ExpandedFromArchive => "expanded-from-archive",
            Self::FileAdded => "file-added",
            Self::FileDeleted => "file-deleted",
            Self::FileModified => "file-modified",
            Self::Generates => "generates",
            Self::Metafile => "metafile",
            Self::OptionalComponent => "optional-component",
            Self::OptionalDependency => "optional-dependency",
            Self::Other => "other",
            Self::Package => "package",
            Self::Patch => "patch",
            Self::Prerequisite => "prerequisite",
            Self::ProvidedDependency => "provided-dependency",
            Self::RequirementFor => "requirement-for",
            Self::RuntimeDependency => "runtime-dependency",
            Self::SpecificationFor => "specification-for",
            Self::StaticLink => "static-link",
            Self::Test => "test",
            Self::TestCase => "test-case",
            Self::TestDependency => "test-dependency",
            Self::TestTool => "test-tool",
            Self::Variant => "variant",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
