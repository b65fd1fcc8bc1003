//! Clinic site scoring: five category scorers, a logistic fit probability, a
//! grade bucket, specialty recommendations and improvement ranking.
//!
//! [`evaluate`] is total over every [`ScoringInput`], including the empty one,
//! and cheap enough to call on each form change.

mod categories;
pub mod domain;
mod improvements;
mod insights;
pub mod probability;
mod recommendations;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    AgeMix, AreaType, BuildingAge, BuildingParking, CompetitorDensity, FireSafety, Floor,
    FootTraffic, Infrastructure, LeaseFlexibility, MaintenanceFee, ParkingConvenience,
    PermittedUse, PharmacyDistance, Population, PremiumBand, PriceLevel, RoadAccess,
    ScoringInput, TransitDistance, Ventilation,
};
pub use router::site_scoring_router;
pub use views::{
    AnalysisResult, Category, CategoryScore, Grade, GradeView, ImprovementOpportunity,
    ScoreItem, SiteInsights, SpecialtyRecommendation,
};

use tracing::debug;

/// Stateless handle over [`evaluate`] for callers that hold an engine value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteScoringEngine;

impl SiteScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, input: &ScoringInput) -> AnalysisResult {
        evaluate(input)
    }
}

/// Runs the full scoring pipeline for one site.
pub fn evaluate(input: &ScoringInput) -> AnalysisResult {
    let categories = categories::score_all(input);
    let total_score = categories
        .iter()
        .map(|category| category.score)
        .sum::<u8>()
        .min(100);
    let probability = probability::probability(total_score);
    let grade = probability::grade(total_score);
    let recommendations = recommendations::recommend(input);
    let improvements = improvements::rank_improvements(&categories, total_score, probability);
    let insights = insights::generate_insights(input, &categories);

    debug!(
        total_score,
        probability,
        grade = grade.label(),
        recommendations = recommendations.len(),
        "site evaluated"
    );

    AnalysisResult {
        categories,
        total_score,
        probability,
        grade: grade.into(),
        recommendations,
        improvements,
        insights,
    }
}
