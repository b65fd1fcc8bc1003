use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use clinic_siting::config::{AppConfig, ListingConfig};
use clinic_siting::error::AppError;
use clinic_siting::workflows::listings::{write_csv, ListingGenerator, SeedConfig, SeedCounts};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListingKind {
    Buildings,
    Pharmacies,
    Posts,
}

#[derive(Args, Debug)]
pub(crate) struct SeedArgs {
    /// Seed for the generator (defaults to APP_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of building listings
    #[arg(long, default_value_t = 20)]
    pub(crate) buildings: usize,
    /// Number of pharmacy transfers
    #[arg(long, default_value_t = 10)]
    pub(crate) pharmacies: usize,
    /// Number of community posts
    #[arg(long, default_value_t = 10)]
    pub(crate) posts: usize,
    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
    /// Emit a single listing kind. CSV output defaults to buildings.
    #[arg(long, value_enum)]
    pub(crate) kind: Option<ListingKind>,
    /// Date listings are aged from (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) reference_date: Option<NaiveDate>,
}

pub(crate) fn run_seed(args: SeedArgs) -> Result<(), AppError> {
    let listings = AppConfig::load()?.listings;
    let stdout = std::io::stdout();
    write_seed(&args, &listings, stdout.lock())
}

pub(crate) fn write_seed<W: Write>(
    args: &SeedArgs,
    listings: &ListingConfig,
    mut writer: W,
) -> Result<(), AppError> {
    let counts = SeedCounts {
        buildings: args.buildings,
        pharmacies: args.pharmacies,
        posts: args.posts,
    };
    counts.validate(listings.max_batch)?;

    let seed = args.seed.unwrap_or(listings.default_seed);
    let reference_date = args
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let generator = ListingGenerator::new(seed, SeedConfig::for_date(reference_date));

    let kind = match (args.format, args.kind) {
        (_, Some(kind)) => Some(kind),
        (OutputFormat::Csv, None) => Some(ListingKind::Buildings),
        (OutputFormat::Json, None) => None,
    };

    match (args.format, kind) {
        (OutputFormat::Json, None) => {
            serde_json::to_writer_pretty(&mut writer, &generator.generate(counts))?;
            writeln!(writer)?;
        }
        (OutputFormat::Json, Some(ListingKind::Buildings)) => {
            serde_json::to_writer_pretty(&mut writer, &generator.buildings(counts.buildings))?;
            writeln!(writer)?;
        }
        (OutputFormat::Json, Some(ListingKind::Pharmacies)) => {
            serde_json::to_writer_pretty(&mut writer, &generator.pharmacies(counts.pharmacies))?;
            writeln!(writer)?;
        }
        (OutputFormat::Json, Some(ListingKind::Posts)) => {
            serde_json::to_writer_pretty(&mut writer, &generator.posts(counts.posts))?;
            writeln!(writer)?;
        }
        (OutputFormat::Csv, Some(ListingKind::Pharmacies)) => {
            write_csv(writer, &generator.pharmacies(counts.pharmacies))?;
        }
        (OutputFormat::Csv, Some(ListingKind::Posts)) => {
            write_csv(writer, &generator.posts(counts.posts))?;
        }
        (OutputFormat::Csv, _) => {
            write_csv(writer, &generator.buildings(counts.buildings))?;
        }
    }

    Ok(())
}
