//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the steadfast binary.

mod commands;
mod config;
mod probe;

pub use commands::{Cli, Commands};
pub use config::{load_config, show_config};
pub use probe::run_probe;
