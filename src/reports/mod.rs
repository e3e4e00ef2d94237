//! Report generation for normalization results.
//!
//! Two output formats are provided:
//! - Text: Compact shell-friendly output
//! - JSON: Structured data for programmatic integration

mod json;
mod normalization;
mod summary;
mod types;

pub use json::JsonReporter;
pub use normalization::{LookupResult, MappingEntry, MappingTable, NormalizationReport};
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the outcome of a single lookup
    fn generate_lookup_report(&self, result: &LookupResult) -> Result<String, ReportError>;

    /// Render a batch tally
    fn generate_batch_report(&self, report: &NormalizationReport) -> Result<String, ReportError>;

    /// Render the full mapping table of a vocabulary
    fn generate_table_report(&self, table: &MappingTable) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a reporter for the given format.
#[must_use]
pub fn create_reporter(
    format: ReportFormat,
    pretty: bool,
    colored: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Text => {
            let reporter = SummaryReporter::new();
            if colored {
                Box::new(reporter)
            } else {
                Box::new(reporter.no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(pretty)),
    }
}
