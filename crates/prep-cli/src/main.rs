//! TTS text preprocessor command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;

/// TTS text preprocessor CLI
#[derive(Debug, Parser)]
#[command(name = "tts-prep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args)]
struct ConfigArgs {
    /// Code block handling (full or brief)
    #[arg(long, default_value = "full")]
    code_blocks: String,

    /// URL verbosity (full, domain_only, or minimal)
    #[arg(long, default_value = "full")]
    url_detail: String,

    /// IPv4 octet reading (numbers or digits)
    #[arg(long, default_value = "numbers")]
    ip_mode: String,

    /// Do not speak operators
    #[arg(long)]
    no_operators: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite text for speech
    Normalize {
        /// Input text (use @file.txt for file input)
        input: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Report words handled by the letter-level fallback
        #[arg(long)]
        show_unknown: bool,
    },

    /// Show the character map between input and rewritten text
    Map {
        /// Input text (use @file.txt for file input)
        input: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Emit the map as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version and default configuration
    Info,
}

/// Subscriber setup for the pipeline's `#[instrument]` spans and the
/// dictionary/fallback diagnostics it logs.
fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json);

    info!(version = env!("CARGO_PKG_VERSION"), "starting tts-prep");

    match cli.command {
        Commands::Normalize {
            input,
            config,
            show_unknown,
        } => {
            commands::normalize::run(&input, &config, show_unknown)
                .context("normalization failed")?;
        }
        Commands::Map {
            input,
            config,
            json,
        } => {
            commands::map::run(&input, &config, json).context("map rendering failed")?;
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
