//! Text report generator for shell output.
//!
//! Provides compact, human-readable output for terminal usage.

use super::{
    LookupResult, MappingTable, NormalizationReport, ReportError, ReportFormat, ReportGenerator,
};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const UNMAPPED_NOTE: &str = "(recognized, intentionally unmapped)";

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_lookup_report(&self, result: &LookupResult) -> Result<String, ReportError> {
        let canonical = if result.unknown {
            self.color(&result.canonical, "yellow")
        } else {
            self.color(&result.canonical, "green")
        };
        let mut line = format!("{} -> {canonical}", result.input);
        if result.intentionally_unmapped {
            line.push(' ');
            line.push_str(&self.color(UNMAPPED_NOTE, "dim"));
        }
        Ok(line)
    }

    fn generate_batch_report(&self, report: &NormalizationReport) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(
            &format!("{} normalization", report.vocabulary.name()),
            "bold",
        ));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{} {} ({} recognized, {} unknown)",
            self.color("Identifiers:", "cyan"),
            report.total,
            self.color(&report.recognized.to_string(), "green"),
            if report.has_unknown() {
                self.color(&report.unknown.to_string(), "yellow")
            } else {
                report.unknown.to_string()
            },
        ));

        if !report.counts.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Kinds:", "cyan"));
            let width = report.counts.keys().map(String::len).max().unwrap_or(0);
            for (kind, count) in &report.counts {
                lines.push(format!("  {kind:<width$}  {count}"));
            }
        }

        if !report.unknown_inputs.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Unknown:", "yellow"));
            for input in &report.unknown_inputs {
                if report.unmapped_inputs.contains(input) {
                    lines.push(format!("  {input} {}", self.color(UNMAPPED_NOTE, "dim")));
                } else {
                    lines.push(format!("  {input}"));
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_table_report(&self, table: &MappingTable) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(
            &format!("{} mappings", table.vocabulary.name()),
            "bold",
        ));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let width = table
            .entries
            .iter()
            .map(|e| e.external.len())
            .chain(table.unmapped.iter().map(String::len))
            .max()
            .unwrap_or(0);
        for entry in &table.entries {
            lines.push(format!(
                "  {:<width$}  {}",
                entry.external,
                self.color(&entry.canonical, "green")
            ));
        }

        if !table.unmapped.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Unmapped:", "yellow"));
            for name in &table.unmapped {
                lines.push(format!("  {name:<width$}  {}", self.color("unknown", "dim")));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
