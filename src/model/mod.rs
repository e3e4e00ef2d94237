//! Canonical vocabulary of the SBOM graph model.
//!
//! Both `CycloneDX` and SPDX documents describe relationships and hashes in
//! their own terms. The enums in this module are what the rest of the graph
//! model works with; raw format vocabulary never leaks past [`crate::normalize`].

mod edge;
mod hash;

pub use edge::EdgeKind;
pub use hash::HashAlgorithmKind;
