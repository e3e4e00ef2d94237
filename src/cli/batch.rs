//! Batch command handler.
//!
//! Implements the `batch` subcommand: normalizes newline-separated
//! identifiers and reports a tally.

use crate::config::AppConfig;
use crate::normalize::Vocabulary;
use crate::pipeline::{exit_codes, read_identifiers, should_use_color, write_output, OutputTarget};
use crate::reports::{create_reporter, NormalizationReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the batch command, returning the process exit code
#[allow(clippy::needless_pass_by_value)]
pub fn run_batch(
    vocabulary: Vocabulary,
    input: Option<PathBuf>,
    config: &AppConfig,
) -> Result<i32> {
    let identifiers = read_identifiers(input.as_deref()).with_context(|| match &input {
        Some(path) => format!("Failed to read identifiers from {}", path.display()),
        None => "Failed to read identifiers from stdin".to_string(),
    })?;

    let report = normalize_batch(vocabulary, &identifiers);

    let target = OutputTarget::from_option(config.output.file.clone());
    let colored = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter(config.output.format, config.output.pretty, colored);
    let rendered = reporter.generate_batch_report(&report)?;
    write_output(&rendered, &target, config.behavior.quiet)?;

    if config.behavior.fail_on_unknown && report.has_unknown() {
        return Ok(exit_codes::UNKNOWN_FOUND);
    }
    Ok(exit_codes::SUCCESS)
}

/// Normalize every identifier and tally the results.
#[must_use]
pub fn normalize_batch(vocabulary: Vocabulary, identifiers: &[String]) -> NormalizationReport {
    let report = NormalizationReport::from_inputs(vocabulary, identifiers);
    tracing::info!(
        "Normalized {} {} identifiers: {} recognized, {} unknown",
        report.total,
        vocabulary,
        report.recognized,
        report.unknown
    );
    if report.has_unknown() {
        tracing::debug!("Unknown identifiers: {:?}", report.unknown_inputs);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn quiet_config(output: PathBuf, fail_on_unknown: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.output.file = Some(output);
        config.output.format = ReportFormat::Json;
        config.behavior.quiet = true;
        config.behavior.fail_on_unknown = fail_on_unknown;
        config
    }

    #[test]
    fn test_run_batch_writes_report() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("ids.txt");
        let output = tmp.path().join("report.json");
        std::fs::write(&input, "DEPENDS_ON\nDEPENDENCY_OF\n").unwrap();

        let code = run_batch(
            Vocabulary::SpdxRelationship,
            Some(input),
            &quiet_config(output.clone(), false),
        )
        .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["result"]["total"], 2);
        assert_eq!(json["result"]["unmapped_inputs"][0], "DEPENDENCY_OF");
    }

    #[test]
    fn test_run_batch_fail_on_unknown() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("algs.txt");
        std::fs::write(&input, "SHA-256\nSHA256\n").unwrap();

        let code = run_batch(
            Vocabulary::CdxHashAlgorithm,
            Some(input),
            &quiet_config(tmp.path().join("out.json"), true),
        )
        .unwrap();
        assert_eq!(code, exit_codes::UNKNOWN_FOUND);
    }

    #[test]
    fn test_run_batch_missing_input() {
        let tmp = TempDir::new().unwrap();
        let result = run_batch(
            Vocabulary::SpdxRelationship,
            Some(tmp.path().join("missing.txt")),
            &quiet_config(tmp.path().join("out.json"), false),
        );
        assert!(result.is_err());
    }
}
