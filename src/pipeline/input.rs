//! Reading identifiers for batch normalization.

use crate::error::{ErrorContext, Result, VocabError};
use std::io::Read;
use std::path::Path;

/// Split newline-separated input into identifiers.
///
/// Each line is trimmed; blank lines and `#` comments are skipped. Trimming
/// is part of the input framing only; the identifiers themselves are
/// normalized exactly as they remain.
#[must_use]
pub fn parse_identifier_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

/// Read identifiers from a file, or from stdin when no path is given.
pub fn read_identifiers(path: Option<&Path>) -> Result<Vec<String>> {
    let content = match path {
        Some(path) => {
            tracing::debug!("Reading identifiers from {}", path.display());
            std::fs::read_to_string(path).with_path(path)?
        }
        None => {
            tracing::debug!("Reading identifiers from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(VocabError::stdio)?;
            buf
        }
    };
    Ok(parse_identifier_lines(&content))
}
