mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dogceo_api::Client;

use crate::output::OutputFormat;

const BASE_URL_ENV: &str = "DOG_API_BASE_URL";

#[derive(Parser)]
#[command(name = "subbreeds")]
#[command(about = "Look up dog sub-breeds from the dog.ceo API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (falls back to $DOG_API_BASE_URL, then https://dog.ceo)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sub-breeds of one or more breeds
    List(commands::list::ListArgs),
    /// Count the sub-breeds of one or more breeds
    Count(commands::count::CountArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("dogceo=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var(BASE_URL_ENV).ok());
    let client = match base_url {
        Some(url) => {
            tracing::debug!("Using API base URL {}", url);
            Client::with_base_url(&url)
        }
        None => Client::new(),
    }
    .context("failed to build HTTP client")?;

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &client, &format).await?,
        Commands::Count(args) => commands::count::run(args, &client, &format).await?,
    }

    Ok(())
}
