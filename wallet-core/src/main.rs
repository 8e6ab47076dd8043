//! walletgen CLI
//!
//! Generates a Solana or Ethereum wallet offline and prints its address and
//! recovery phrase.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use walletgen_core::{api, GeneratorConfig, Network};

mod commands;

#[derive(Parser)]
#[command(name = "walletgen")]
#[command(about = "Offline Solana / Ethereum wallet generator")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new wallet with a fresh recovery phrase
    Generate {
        /// Network to derive for (solana | ethereum)
        #[arg(short, long)]
        network: Option<Network>,

        /// Print the wallet as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive the address of an existing recovery phrase
    Derive {
        /// Network to derive for (solana | ethereum)
        #[arg(short, long)]
        network: Option<Network>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    api::init_core(&file_config, cli.verbose);

    match cli.command {
        Commands::Generate { network, json } => {
            commands::generate::run(&file_config.with_overrides(network, json)).await
        }
        Commands::Derive { network, json } => {
            commands::derive::run(&file_config.with_overrides(network, json))
        }
    }
}
