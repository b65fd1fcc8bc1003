use crate::infra::{load_scoring_input, parse_date};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use clinic_siting::config::AppConfig;
use clinic_siting::error::AppError;
use clinic_siting::workflows::listings::{BuildingListing, ListingGenerator, SeedConfig};
use clinic_siting::workflows::site_scoring::{AnalysisResult, ScoringInput, SiteScoringEngine};
use std::path::PathBuf;

const DEMO_POOL_SIZE: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum Preset {
    Empty,
    Maximal,
    #[default]
    Sample,
}

impl Preset {
    fn input(self) -> ScoringInput {
        match self {
            Preset::Empty => ScoringInput::default(),
            Preset::Maximal => ScoringInput::maximal(),
            Preset::Sample => ScoringInput::sample(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// JSON scoring form to evaluate. Takes precedence over --preset.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Built-in site to evaluate when no input file is given
    #[arg(long, value_enum, default_value_t = Preset::Sample)]
    pub(crate) preset: Preset,
    /// Print the raw analysis as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the listing pool (defaults to APP_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// How many of the best seeded listings to show
    #[arg(long, default_value_t = 5)]
    pub(crate) top: usize,
    /// Date listings are aged from (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) reference_date: Option<NaiveDate>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let input = match &args.input {
        Some(path) => load_scoring_input(path)?,
        None => args.preset.input(),
    };

    let result = SiteScoringEngine::new().evaluate(&input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_analysis(&result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let listings = AppConfig::load()?.listings;
    let seed = args.seed.unwrap_or(listings.default_seed);
    let reference_date = args
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let engine = SiteScoringEngine::new();

    println!("Clinic siting demo");
    println!("\nSample site");
    render_analysis(&engine.evaluate(&ScoringInput::sample()));

    let generator = ListingGenerator::new(seed, SeedConfig::for_date(reference_date));
    let pool = generator.buildings(DEMO_POOL_SIZE.min(listings.max_batch));
    let ranked = rank_listings(&engine, &pool, args.top);

    println!(
        "\nBest seeded listings (seed {}, {} candidates, building and lease terms only)",
        seed,
        pool.len()
    );
    for (listing, result) in &ranked {
        let lead = result
            .recommendations
            .first()
            .map(|entry| entry.name)
            .unwrap_or("-");
        println!(
            "- {} {} | {}평 | 보증금 {} / 월세 {} 만원 | {}점 | 추천 {} | 관심 {}",
            listing.id,
            listing.title,
            listing.area,
            listing.deposit,
            listing.monthly_rent,
            result.total_score,
            lead,
            listing.competition.label()
        );
    }

    Ok(())
}

/// Scores every listing from its own terms and keeps the `top` best, highest first.
pub(crate) fn rank_listings<'a>(
    engine: &SiteScoringEngine,
    pool: &'a [BuildingListing],
    top: usize,
) -> Vec<(&'a BuildingListing, AnalysisResult)> {
    let mut ranked: Vec<_> = pool
        .iter()
        .map(|listing| (listing, engine.evaluate(&listing.scoring_input())))
        .collect();
    ranked.sort_by(|a, b| b.1.total_score.cmp(&a.1.total_score));
    ranked.truncate(top);
    ranked
}

pub(crate) fn render_analysis(result: &AnalysisResult) {
    println!(
        "Total score {}/100 | fit probability {}% | grade {}",
        result.total_score, result.probability, result.grade.label
    );

    println!("\nCategories");
    for category in &result.categories {
        println!("- {}: {}/{}", category.label, category.score, category.max);
        for item in &category.items {
            println!("    {} {}/{}", item.name, item.score, item.max);
        }
    }

    if result.recommendations.is_empty() {
        println!("\nRecommended specialties: none (floor and area required)");
    } else {
        println!("\nRecommended specialties");
        for entry in &result.recommendations {
            println!("- {} ({}): {}", entry.name, entry.score, entry.reason);
        }
    }

    if !result.improvements.is_empty() {
        println!("\nImprovement opportunities");
        for entry in &result.improvements {
            println!(
                "- [{}] {} {}/{} -> +{}%p",
                entry.category_label, entry.item, entry.score, entry.max, entry.probability_gain
            );
        }
    }

    println!(
        "\nStrongest: {} | Weakest: {}",
        result.insights.strongest_category, result.insights.weakest_category
    );
    for note in &result.insights.strengths {
        println!("+ {}", note);
    }
    for note in &result.insights.warnings {
        println!("! {}", note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_map_to_reference_inputs() {
        assert_eq!(Preset::Empty.input(), ScoringInput::default());
        assert_eq!(Preset::Maximal.input(), ScoringInput::maximal());
        assert_eq!(Preset::default().input(), ScoringInput::sample());
    }

    #[test]
    fn rank_listings_orders_by_score() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let pool = ListingGenerator::new(17, SeedConfig::for_date(reference)).buildings(25);
        let ranked = rank_listings(&SiteScoringEngine::new(), &pool, 5);

        assert_eq!(ranked.len(), 5);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].1.total_score >= pair[1].1.total_score));
        let engine = SiteScoringEngine::new();
        let best = pool
            .iter()
            .map(|listing| engine.evaluate(&listing.scoring_input()).total_score)
            .max();
        assert_eq!(Some(ranked[0].1.total_score), best);
    }
}
