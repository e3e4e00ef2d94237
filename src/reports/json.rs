//! JSON report generator.

use super::{
    LookupResult, MappingTable, NormalizationReport, ReportError, ReportFormat, ReportGenerator,
};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, kind: &'static str, body: &T) -> Result<String, ReportError> {
        let doc = JsonDocument {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            kind,
            result: body,
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_lookup_report(&self, result: &LookupResult) -> Result<String, ReportError> {
        self.render("lookup", result)
    }

    fn generate_batch_report(&self, report: &NormalizationReport) -> Result<String, ReportError> {
        self.render("batch", report)
    }

    fn generate_table_report(&self, table: &MappingTable) -> Result<String, ReportError> {
        self.render("table", table)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDocument<'a, T: Serialize> {
    tool: ToolInfo,
    kind: &'static str,
    result: &'a T,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}
