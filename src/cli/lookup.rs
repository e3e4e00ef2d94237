//! Lookup command handler.
//!
//! Implements the `lookup` subcommand for normalizing a single identifier.

use crate::config::AppConfig;
use crate::normalize::Vocabulary;
use crate::pipeline::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::{create_reporter, LookupResult};
use anyhow::Result;

/// Run the lookup command, returning the process exit code
pub fn run_lookup(vocabulary: Vocabulary, identifier: &str, config: &AppConfig) -> Result<i32> {
    let result = LookupResult::new(vocabulary, identifier);
    tracing::debug!(
        vocabulary = %vocabulary,
        input = identifier,
        canonical = %result.canonical,
        "normalized identifier"
    );

    let target = OutputTarget::from_option(config.output.file.clone());
    let colored = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter(config.output.format, config.output.pretty, colored);
    let rendered = reporter.generate_lookup_report(&result)?;
    write_output(&rendered, &target, config.behavior.quiet)?;

    Ok(lookup_exit_code(&result, config.behavior.fail_on_unknown))
}

fn lookup_exit_code(result: &LookupResult, fail_on_unknown: bool) -> i32 {
    if fail_on_unknown && result.unknown {
        exit_codes::UNKNOWN_FOUND
    } else {
        exit_codes::SUCCESS
    }
}
