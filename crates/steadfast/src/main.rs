//! Steadfast CLI binary.
//!
//! This binary provides command-line access to Steadfast's functionality:
//! - Check which model a session should start with
//! - Show the effective configuration

use clap::Parser;
use steadfast::{LoggingConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, load_config, run_probe, show_config};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    init_logging(&LoggingConfig::from_verbosity(cli.verbose).with_json_logs(cli.json_logs))?;

    // Pick up GEMINI_API_KEY from .env if present
    dotenvy::dotenv().ok();

    let config = load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Probe { model, yes } => {
            let outcome = run_probe(&config, model, yes).await?;
            println!("{}", outcome.model());
        }

        Commands::Config { format } => {
            println!("{}", show_config(&config, format)?);
        }
    }

    Ok(())
}
