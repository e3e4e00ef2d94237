//! Table command handler.

use crate::config::AppConfig;
use crate::normalize::Vocabulary;
use crate::pipeline::{should_use_color, write_output, OutputTarget};
use crate::reports::{create_reporter, MappingTable};
use anyhow::Result;

/// Print every mapping defined for a vocabulary
pub fn run_table(vocabulary: Vocabulary, config: &AppConfig) -> Result<()> {
    let table = MappingTable::for_vocabulary(vocabulary);
    tracing::debug!(
        "{} mappings, {} unmapped for {vocabulary}",
        table.entries.len(),
        table.unmapped.len()
    );

    let target = OutputTarget::from_option(config.output.file.clone());
    let colored = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter(config.output.format, config.output.pretty, colored);
    let rendered = reporter.generate_table_report(&table)?;
    write_output(&rendered, &target, config.behavior.quiet)
}
