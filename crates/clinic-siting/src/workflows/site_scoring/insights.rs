use super::domain::{PermittedUse, ScoringInput};
use super::views::{CategoryScore, SiteInsights};

const STRENGTH_RATIO: f64 = 0.8;
const WEAKNESS_RATIO: f64 = 0.4;

pub(crate) fn generate_insights(
    input: &ScoringInput,
    categories: &[CategoryScore],
) -> SiteInsights {
    // Ties resolve to the earlier category in report order.
    let strongest = categories.iter().fold(None::<&CategoryScore>, |best, entry| {
        match best {
            Some(current) if current.ratio() >= entry.ratio() => Some(current),
            _ => Some(entry),
        }
    });
    let weakest = categories.iter().fold(None::<&CategoryScore>, |worst, entry| {
        match worst {
            Some(current) if current.ratio() <= entry.ratio() => Some(current),
            _ => Some(entry),
        }
    });

    let strengths = categories
        .iter()
        .filter(|entry| entry.ratio() >= STRENGTH_RATIO)
        .map(|entry| {
            format!(
                "{} {}/{}점으로 경쟁력이 높습니다",
                entry.label, entry.score, entry.max
            )
        })
        .collect();

    let mut warnings: Vec<String> = categories
        .iter()
        .filter(|entry| entry.ratio() < WEAKNESS_RATIO)
        .map(|entry| {
            format!(
                "{} {}/{}점으로 보완이 필요합니다",
                entry.label, entry.score, entry.max
            )
        })
        .collect();

    match input.permitted_use {
        PermittedUse::NotPermitted => {
            warnings.push(
                "의료시설 용도로 사용할 수 없는 호실입니다. 계약 전 건축물대장을 확인하세요"
                    .to_string(),
            );
        }
        PermittedUse::ConversionRequired => {
            warnings.push(
                "용도 변경 허가가 필요합니다. 인허가 기간을 일정에 반영하세요".to_string(),
            );
        }
        PermittedUse::Permitted | PermittedUse::Unspecified => {}
    }

    if !input.elevator && !input.floor.elevator_exempt() && input.floor.points() > 0 {
        warnings.push(format!(
            "{} 호실에 엘리베이터가 없어 거동이 불편한 환자 접근이 어렵습니다",
            input.floor.label()
        ));
    }

    SiteInsights {
        strongest_category: strongest.map(|entry| entry.label).unwrap_or_default(),
        weakest_category: weakest.map(|entry| entry.label).unwrap_or_default(),
        strengths,
        warnings,
    }
}
