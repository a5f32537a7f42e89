mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shelfscan")]
#[command(about = "ShelfScan — FMCG product analyzer and inventory tracker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze product images and accumulate the running inventory
    Analyze {
        /// Image files to analyze, in order
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Write a Markdown inventory report to this path afterwards
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Use the canned mock provider instead of a remote call
        #[arg(long)]
        mock: bool,
    },
    /// Print the extraction instruction sent to the vision provider
    Prompt,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = shelfscan_config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            images,
            report,
            mock,
        } => session::run(&config, &images, report.as_deref(), mock).await,
        Commands::Prompt => {
            println!("{}", shelfscan_vision::EXTRACTION_PROMPT);
            Ok(())
        }
    }
}
