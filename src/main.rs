use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// consumed - social entertainment tracking feed service
#[derive(Parser)]
#[command(name = "consumed")]
#[command(about = "Activity feed consolidation for Consumed", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Consolidate a JSON file of feed events and print the activity cards
    Consolidate {
        /// JSON array of feed events
        #[arg(long, short)]
        input: PathBuf,

        /// Grouping window in seconds (overrides config file)
        #[arg(long)]
        window_seconds: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = consumed::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    consumed::observability::init_observability(
        "consumed",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => consumed::cli::server::serve(config, host, port).await,
        Commands::Consolidate {
            input,
            window_seconds,
        } => consumed::cli::consolidate::run(config, &input, window_seconds),
    }
}
