mod purify;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shelfscan-cli")]
#[command(about = "Turns scraped product listings into structured records")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize the scraper dump into structured product records
    Purify {
        /// Scraper dump to read (defaults to SHELFSCAN_RAW_FILE)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the records (defaults to SHELFSCAN_DATA_FILE)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Log every skipped item and the reason it was skipped
        #[arg(long)]
        report: bool,
    },
    /// Write the first children_text block of every item, one entry per item
    Texts {
        /// Scraper dump to read (defaults to SHELFSCAN_RAW_FILE)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the digest
        #[arg(long, default_value = "children_texts.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shelfscan_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Purify {
            input,
            output,
            report,
        }) => {
            let input = input.unwrap_or_else(|| config.raw_file.clone());
            let output = output.unwrap_or_else(|| config.data_file.clone());
            purify::run_purify(&input, &output, report).await?;
        }
        Some(Commands::Texts { input, output }) => {
            let input = input.unwrap_or_else(|| config.raw_file.clone());
            purify::run_texts(&input, &output).await?;
        }
        None => {
            tracing::info!(env = %config.env, "no command given; try `shelfscan-cli purify`");
        }
    }

    Ok(())
}
