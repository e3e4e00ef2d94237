//! Shared plumbing for CLI command handlers: reading input, writing output,
//! and exit codes.

mod input;
mod output;

pub use input::{parse_identifier_lines, read_identifiers};
pub use output::{should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - every identifier was recognized (or unknowns are tolerated)
    pub const SUCCESS: i32 = 0;
    /// Unknown identifiers were found and `--fail-on-unknown` is set
    pub const UNKNOWN_FOUND: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
