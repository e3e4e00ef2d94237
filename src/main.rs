//! sbom-vocab: normalize SBOM vocabulary from the command line
//!
//! Maps SPDX relationship types and `CycloneDX` hash algorithms onto the
//! canonical kinds used by the SBOM graph model.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_vocab::{
    cli,
    config::{AppConfig, BehaviorConfig, OutputConfig},
    normalize::Vocabulary,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-vocab")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(
    about = "Normalize SPDX relationship types and CycloneDX hash algorithms",
    long_about = None
)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Unknown identifiers found (with --fail-on-unknown)
    3  Error occurred

EXAMPLES:
    # Normalize a single relationship type
    sbom-vocab lookup spdx DEPENDS_ON

    # Tally the hash algorithms used in a list, failing on unknowns
    sbom-vocab batch cdx-hash algs.txt --fail-on-unknown

    # Print the full SPDX mapping as JSON
    sbom-vocab table spdx -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SBOM_VOCAB_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output options shared by the normalization commands
#[derive(clap::Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a single identifier
    Lookup {
        /// Vocabulary the identifier belongs to
        #[arg(value_enum)]
        vocabulary: Vocabulary,

        /// Identifier to normalize (exact, case-sensitive)
        identifier: String,

        /// Exit with code 1 if the identifier has no mapping
        #[arg(long)]
        fail_on_unknown: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Normalize newline-separated identifiers and report a tally
    Batch {
        /// Vocabulary the identifiers belong to
        #[arg(value_enum)]
        vocabulary: Vocabulary,

        /// Input file (stdin if not specified)
        input: Option<PathBuf>,

        /// Exit with code 1 if any identifier has no mapping
        #[arg(long)]
        fail_on_unknown: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print every mapping defined for a vocabulary
    Table {
        /// Vocabulary to list
        #[arg(value_enum)]
        vocabulary: Vocabulary,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-vocab.yaml in the current directory
    Init,
}

/// Build the CLI layer of the configuration from global and per-command flags.
fn cli_overrides(cli: &Cli, output: &OutputArgs, fail_on_unknown: bool) -> AppConfig {
    AppConfig {
        output: OutputConfig {
            format: output.output,
            file: output.output_file.clone(),
            pretty: !output.compact,
            no_color: cli.no_color,
        },
        behavior: BehaviorConfig {
            fail_on_unknown,
            quiet: cli.quiet,
        },
    }
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match &cli.command {
        Commands::Lookup {
            vocabulary,
            identifier,
            fail_on_unknown,
            output,
        } => {
            let overrides = cli_overrides(&cli, output, *fail_on_unknown);
            let config = cli::resolve_config(cli.config.as_deref(), &overrides)?;
            cli::run_lookup(*vocabulary, identifier, &config)
        }

        Commands::Batch {
            vocabulary,
            input,
            fail_on_unknown,
            output,
        } => {
            let overrides = cli_overrides(&cli, output, *fail_on_unknown);
            let config = cli::resolve_config(cli.config.as_deref(), &overrides)?;
            cli::run_batch(*vocabulary, input.clone(), &config)
        }

        Commands::Table { vocabulary, output } => {
            let overrides = cli_overrides(&cli, output, false);
            let config = cli::resolve_config(cli.config.as_deref(), &overrides)?;
            cli::run_table(*vocabulary, &config)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "sbom-vocab", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = sbom_vocab::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(action, &cli)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config_action(action: &ConfigAction, cli: &Cli) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = cli::load_config(cli.config.as_deref())?;
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for dir in sbom_vocab::config::config_search_dirs() {
                eprintln!("  {}", dir.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in sbom_vocab::config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match sbom_vocab::config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".sbom-vocab.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = sbom_vocab::config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_with_alias() {
        let cli = Cli::try_parse_from(["sbom-vocab", "lookup", "spdx", "DEPENDS_ON"]).unwrap();
        match cli.command {
            Commands::Lookup {
                vocabulary,
                identifier,
                ..
            } => {
                assert_eq!(vocabulary, Vocabulary::SpdxRelationship);
                assert_eq!(identifier, "DEPENDS_ON");
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_output_flag_defaults_to_auto() {
        let cli = Cli::try_parse_from(["sbom-vocab", "table", "spdx"]).unwrap();
        let Commands::Table { output, .. } = &cli.command else {
            panic!("expected table");
        };
        assert_eq!(output.output, ReportFormat::Auto);

        let cli = Cli::try_parse_from(["sbom-vocab", "table", "spdx", "-o", "text"]).unwrap();
        let Commands::Table { output, .. } = &cli.command else {
            panic!("expected table");
        };
        assert_eq!(cli_overrides(&cli, output, false).output.format, ReportFormat::Text);
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "sbom-vocab",
            "--no-color",
            "batch",
            "cdx-hash-algorithm",
            "algs.txt",
            "-o",
            "json",
            "--compact",
            "--fail-on-unknown",
        ])
        .unwrap();
        let Commands::Batch {
            output,
            fail_on_unknown,
            ..
        } = &cli.command
        else {
            panic!("expected batch");
        };
        let config = cli_overrides(&cli, output, *fail_on_unknown);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(!config.output.pretty);
        assert!(config.output.no_color);
        assert!(config.behavior.fail_on_unknown);
    }
}
