use anyhow::Result;
use clap::Args;
use dogceo_api::BreedFetcher;

use crate::output::{
    print_json, print_sub_breeds_csv, print_sub_breeds_markdown, print_sub_breeds_table,
    OutputFormat,
};

#[derive(Args)]
pub struct ListArgs {
    /// Breed names (e.g. hound, "Husky"); case and surrounding whitespace are ignored
    #[arg(required = true)]
    pub breeds: Vec<String>,
}

pub async fn run(args: &ListArgs, fetcher: &dyn BreedFetcher, format: &OutputFormat) -> Result<()> {
    let (found, failures) = super::lookup_all(fetcher, &args.breeds).await;

    match format {
        OutputFormat::Table => print_sub_breeds_table(&found),
        OutputFormat::Json => print_json(&found),
        OutputFormat::Csv => print_sub_breeds_csv(&found)?,
        OutputFormat::Markdown => print_sub_breeds_markdown(&found),
    }

    super::finish(failures, args.breeds.len())
}
