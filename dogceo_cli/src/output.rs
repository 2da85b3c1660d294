use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// The result of one successful lookup.
#[derive(Debug, Clone, Serialize)]
pub struct BreedSubBreeds {
    pub breed: String,
    pub sub_breeds: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreedCount {
    pub breed: String,
    pub count: usize,
}

impl From<&BreedSubBreeds> for BreedCount {
    fn from(b: &BreedSubBreeds) -> Self {
        Self {
            breed: b.breed.clone(),
            count: b.sub_breeds.len(),
        }
    }
}

#[derive(Tabled, Serialize)]
struct SubBreedRow {
    #[tabled(rename = "Breed")]
    #[serde(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Sub-breed")]
    #[serde(rename = "Sub-breed")]
    sub_breed: String,
}

#[derive(Tabled, Serialize)]
struct CountRow {
    #[tabled(rename = "Breed")]
    #[serde(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Sub-breeds")]
    #[serde(rename = "Sub-breeds")]
    count: usize,
}

// -- Row builders --

/// One row per sub-breed; a breed without sub-breeds still gets a row with
/// an empty sub-breed cell.
fn build_sub_breed_rows(results: &[BreedSubBreeds]) -> Vec<SubBreedRow> {
    results
        .iter()
        .flat_map(|r| {
            if r.sub_breeds.is_empty() {
                vec![SubBreedRow {
                    breed: r.breed.clone(),
                    sub_breed: String::new(),
                }]
            } else {
                r.sub_breeds
                    .iter()
                    .map(|s| SubBreedRow {
                        breed: r.breed.clone(),
                        sub_breed: s.clone(),
                    })
                    .collect()
            }
        })
        .collect()
}

fn build_count_rows(counts: &[BreedCount]) -> Vec<CountRow> {
    counts
        .iter()
        .map(|c| CountRow {
            breed: c.breed.clone(),
            count: c.count,
        })
        .collect()
}

// -- Table output --

pub fn print_sub_breeds_table(results: &[BreedSubBreeds]) {
    println!("{}", Table::new(build_sub_breed_rows(results)));
}

pub fn print_counts_table(counts: &[BreedCount]) {
    println!("{}", Table::new(build_count_rows(counts)));
}

// -- Markdown output --

pub fn print_sub_breeds_markdown(results: &[BreedSubBreeds]) {
    let mut table = Table::new(build_sub_breed_rows(results));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_counts_markdown(counts: &[BreedCount]) {
    let mut table = Table::new(build_count_rows(counts));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn write_csv<W: std::io::Write, R: Serialize>(writer: W, rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_sub_breeds_csv(results: &[BreedSubBreeds]) -> Result<()> {
    write_csv(std::io::stdout(), build_sub_breed_rows(results))
}

pub fn print_counts_csv(counts: &[BreedCount]) -> Result<()> {
    write_csv(std::io::stdout(), build_count_rows(counts))
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
