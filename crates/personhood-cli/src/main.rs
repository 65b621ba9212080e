//! Personhood CLI
//!
//! Command-line interface for the proof-of-personhood verification flow.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use personhood_client_sdk::ClientConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "personhood")]
#[command(author, version, about = "Proof-of-personhood verification client", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "PERSONHOOD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an attestation and a uniqueness proof to the verification service
    Verify {
        /// Identity attestation payload (JSON file)
        #[arg(short, long)]
        attestation: PathBuf,

        /// Uniqueness proof returned by the proof widget (JSON file)
        #[arg(short, long)]
        proof: PathBuf,

        /// Verification service base URL (overrides file and environment)
        #[arg(long)]
        api: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a raw service result without contacting the service
    Resolve {
        /// The result's success flag
        #[arg(long)]
        success: bool,

        /// The result's outcome code
        #[arg(long)]
        code: Option<String>,

        /// Print the state as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known outcome codes
    Codes,

    /// Show configuration and status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("personhood={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Verify {
            attestation,
            proof,
            api,
            json,
        } => {
            let config = ClientConfig::load(cli.config.as_deref(), api.as_deref())?;
            let outcome = commands::verify::run(&config, &attestation, &proof, json).await?;
            let code = outcome.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Resolve {
            success,
            code,
            json,
        } => {
            commands::resolve::run(success, code, json)?;
        }
        Commands::Codes => {
            commands::codes::list();
        }
        Commands::Status => {
            let config = ClientConfig::load(cli.config.as_deref(), None)?;
            commands::status::show(&config, cli.config.as_deref());
        }
    }

    Ok(())
}
