//! expressgen CLI tool

#![forbid(unsafe_code)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ApplyCommand, TokensCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "expressgen")]
#[command(version)]
#[command(about = "Fill placeholder tokens in a scaffolded Express project", long_about = None)]
struct Cli {
    /// Configuration file (default: ./expressgen.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the types, enums and routes templates of a dist tree
    Apply {
        /// Generated project directory
        dist: PathBuf,
        /// JSON file holding the module descriptors
        #[arg(short, long)]
        modules: PathBuf,
        /// Print a diff instead of writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Report which placeholder tokens each template carries
    Tokens {
        /// Generated project directory
        dist: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = expressgen::config::ExpressGenConfig::load(cli.config.as_deref())?;
    expressgen::observability::init(&config.logging)?;

    match cli.command {
        Commands::Apply {
            dist,
            modules,
            dry_run,
        } => {
            let cmd = ApplyCommand::new(dist, modules, dry_run);
            cmd.execute(&config).await?;
        }
        Commands::Tokens { dist } => {
            TokensCommand::new(dist).execute(&config).await?;
        }
    }

    Ok(())
}
