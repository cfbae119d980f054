//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use bridge::output::OutputMode;

/// bridge - composable string transforms
#[derive(Parser, Debug)]
#[command(
    name = "bridge",
    version,
    about = "Composable string transforms",
    long_about = "Apply string transforms from the command line.\n\n\
                  By default input is tagged with \"[bridge] \".\n\
                  Pipelines chain steps left to right, e.g. \"prefix:hello-,suffix:-world,upper\"."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transform a string
    Transform {
        /// Text to transform
        input: String,

        /// Reject empty input instead of transforming it
        #[arg(long)]
        safe: bool,

        /// Comma-separated steps: identity, tag, upper, prefix:<text>, suffix:<text>
        #[arg(short, long)]
        pipeline: Option<String>,
    },

    /// Show "<name> v<version>" for a config
    Info {
        /// TOML config file with `name` and `version`
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Transform {
            input,
            safe,
            pipeline,
        }) => commands::transform(&input, safe, pipeline.as_deref(), output_mode),
        Some(Command::Info { config }) => commands::info(config.as_deref(), output_mode),
        Some(Command::Version) | None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("bridge v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
