mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Warden -- guild moderation bot configuration tooling.
#[derive(Parser, Debug)]
#[command(name = "warden", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect or edit a configuration document
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Evaluate policy rules from a configuration document
    Policy {
        #[command(subcommand)]
        action: PolicyCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Display every accessor-visible field
    Show {
        /// Path to the config document
        #[arg(long, short = 'c')]
        config: PathBuf,
    },

    /// Print one field by its external key
    Get {
        /// Path to the config document
        #[arg(long, short = 'c')]
        config: PathBuf,

        /// External key name (or "all")
        key: String,
    },

    /// Set one scalar field and write the document back
    Set {
        /// Path to the config document
        #[arg(long, short = 'c')]
        config: PathBuf,

        /// External key name
        key: String,

        /// New value, parsed per the field's type
        value: String,
    },
}

#[derive(Subcommand, Debug)]
enum PolicyCommands {
    /// Decide whether a command may run in a channel
    Check {
        /// Path to the config document
        #[arg(long, short = 'c')]
        config: PathBuf,

        /// Command name
        command: String,

        /// Channel ID
        channel: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing with env filter (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigCommands::Show { config } => commands::config::show(&config),
            ConfigCommands::Get { config, key } => commands::config::get(&config, &key),
            ConfigCommands::Set { config, key, value } => {
                commands::config::set(&config, &key, &value)
            }
        },
        Commands::Policy { action } => match action {
            PolicyCommands::Check {
                config,
                command,
                channel,
            } => commands::policy::check(&config, &command, &channel),
        },
    }
}
