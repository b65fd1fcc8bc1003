use super::probability::{slope, CEILING};
use super::views::{CategoryScore, ImprovementOpportunity};

pub(crate) const MAX_IMPROVEMENTS: usize = 3;

/// Ranks the line items with the most headroom.
///
/// The gain is a first-order estimate: the curve's slope at the current total
/// times the item's potential, capped so the projected probability stays at or
/// below the ceiling. It overstates gains for large gaps far from the midpoint.
pub(crate) fn rank_improvements(
    categories: &[CategoryScore],
    total_score: u8,
    probability: u8,
) -> Vec<ImprovementOpportunity> {
    let local_slope = slope(f64::from(total_score));
    let headroom = (CEILING as u8).saturating_sub(probability);

    let mut candidates: Vec<ImprovementOpportunity> = categories
        .iter()
        .flat_map(|category| {
            category
                .items
                .iter()
                .filter(|item| item.score < item.max)
                .map(move |item| {
                    let potential = item.max - item.score;
                    let gain = (local_slope * f64::from(potential)).round() as u8;
                    ImprovementOpportunity {
                        item: item.name,
                        category: category.category,
                        category_label: category.label,
                        score: item.score,
                        max: item.max,
                        potential,
                        probability_gain: gain.min(headroom),
                    }
                })
        })
        .collect();

    candidates.sort_by(|a, b| b.potential.cmp(&a.potential));
    candidates.truncate(MAX_IMPROVEMENTS);
    candidates
}
