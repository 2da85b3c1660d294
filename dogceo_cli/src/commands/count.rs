use anyhow::Result;
use clap::Args;
use dogceo_api::BreedFetcher;

use crate::output::{
    print_counts_csv, print_counts_markdown, print_counts_table, print_json, BreedCount,
    OutputFormat,
};

#[derive(Args)]
pub struct CountArgs {
    /// Breed names to count sub-breeds for
    #[arg(required = true)]
    pub breeds: Vec<String>,
}

pub async fn run(args: &CountArgs, fetcher: &dyn BreedFetcher, format: &OutputFormat) -> Result<()> {
    let (found, failures) = super::lookup_all(fetcher, &args.breeds).await;
    let counts: Vec<BreedCount> = found.iter().map(BreedCount::from).collect();

    match format {
        OutputFormat::Table => print_counts_table(&counts),
        OutputFormat::Json => print_json(&counts),
        OutputFormat::Csv => print_counts_csv(&counts)?,
        OutputFormat::Markdown => print_counts_markdown(&counts),
    }

    super::finish(failures, args.breeds.len())
}
