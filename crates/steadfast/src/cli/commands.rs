//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Steadfast - resilient Gemini API invocation with rate-limit fallback
#[derive(Parser, Debug)]
#[command(name = "steadfast")]
#[command(about = "Resilient Gemini API invocation with rate-limit fallback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether the default model is rate-limited and print the model to use
    Probe {
        /// Model to check (defaults to the configured default model)
        #[arg(long)]
        model: Option<String>,

        /// Accept the fallback without prompting
        #[arg(long, short)]
        yes: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_probe_with_global_flags() {
        let cli = Cli::try_parse_from([
            "steadfast",
            "probe",
            "--model",
            "gemini-2.5-pro",
            "--yes",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(!cli.json_logs);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Probe { model, yes } => {
                assert_eq!(model.as_deref(), Some("gemini-2.5-pro"));
                assert!(yes);
            }
            other => panic!("Expected probe, got {:?}", other),
        }
    }

    #[test]
    fn config_format_defaults_to_human() {
        let cli = Cli::try_parse_from(["steadfast", "config"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                format: OutputFormat::Human
            }
        ));

        let cli = Cli::try_parse_from(["steadfast", "--json-logs", "config", "--format", "json"])
            .unwrap();
        assert!(cli.json_logs);
        assert!(matches!(
            cli.command,
            Commands::Config {
                format: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["steadfast", "config", "--format", "yaml"]).is_err());
    }
}
