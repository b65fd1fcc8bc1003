use super::domain::{Floor, ScoringInput};
use super::views::{Category, CategoryScore, ScoreItem};

pub(crate) const TRANSIT_MAX: u8 = 6;
pub(crate) const AREA_MIN: f64 = 10.0;
pub(crate) const AREA_MAX: f64 = 120.0;

pub(crate) fn score_all(input: &ScoringInput) -> Vec<CategoryScore> {
    Category::ordered()
        .into_iter()
        .map(|category| score_category(input, category))
        .collect()
}

pub(crate) fn score_category(input: &ScoringInput, category: Category) -> CategoryScore {
    match category {
        Category::Location => score_location(input),
        Category::Building => score_building(input),
        Category::Market => score_market(input),
        Category::Financial => score_financial(input),
        Category::Legal => score_legal(input),
    }
}

pub(crate) fn score_location(input: &ScoringInput) -> CategoryScore {
    let items = vec![
        item("입지 유형", input.area_type.points(), 8),
        item("대중교통 접근성", transit_points(input), TRANSIT_MAX),
        item("유동인구", input.foot_traffic.points(), 5),
        item("도로 접근성", input.road_access.points(), 3),
        item("주차 편의성", input.parking_convenience.points(), 3),
    ];
    CategoryScore::from_items(Category::Location, items)
}

pub(crate) fn score_building(input: &ScoringInput) -> CategoryScore {
    let items = vec![
        item("층수", input.floor.points(), 6),
        item("전용 면적", area_points(input.area), 6),
        item("건물 주차", input.building_parking.points(), 4),
        item("엘리베이터", elevator_points(input.elevator, input.floor), 3),
        item("건물 연식", input.building_age.points(), 3),
        item("설비 인프라", input.infrastructure.points(), 3),
    ];
    CategoryScore::from_items(Category::Building, items)
}

pub(crate) fn score_market(input: &ScoringInput) -> CategoryScore {
    let items = vec![
        item("배후 인구", input.population.points(), 5),
        item("연령 구성", input.age_mix.points(), 5),
        item("경쟁 의원 수", input.competitors.points(), 5),
        item("약국 접근성", input.pharmacy_distance.points(), 3),
        item("인근 종합병원", if input.hospital_nearby { 2 } else { 0 }, 2),
    ];
    CategoryScore::from_items(Category::Market, items)
}

pub(crate) fn score_financial(input: &ScoringInput) -> CategoryScore {
    let items = vec![
        item("보증금 수준", input.deposit.points(), 5),
        item("임대료 수준", input.rent.points(), 5),
        item("관리비", input.maintenance_fee.points(), 3),
        item("권리금", input.premium.points(), 4),
        item("임대 조건 유연성", input.lease_flexibility.points(), 3),
    ];
    CategoryScore::from_items(Category::Financial, items)
}

pub(crate) fn score_legal(input: &ScoringInput) -> CategoryScore {
    let items = vec![
        item("용도 적합성", input.permitted_use.points(), 4),
        item("장애인 접근성", if input.accessibility { 2 } else { 0 }, 2),
        item("소방 안전", input.fire_safety.points(), 2),
        item("환기 시설", input.ventilation.points(), 2),
    ];
    CategoryScore::from_items(Category::Legal, items)
}

fn item(name: &'static str, score: u8, max: u8) -> ScoreItem {
    ScoreItem {
        name,
        score: score.min(max),
        max,
    }
}

/// Bus access only sweetens a transit tag that was actually provided.
pub(crate) fn transit_points(input: &ScoringInput) -> u8 {
    let base = input.transit_distance.points();
    if input.bus_access && base > 0 {
        (base + 1).min(TRANSIT_MAX)
    } else {
        base
    }
}

pub(crate) fn area_points(area: Option<f64>) -> u8 {
    let Some(area) = area.filter(|value| value.is_finite()) else {
        return 0;
    };
    let area = area.clamp(AREA_MIN, AREA_MAX);

    if (30.0..=50.0).contains(&area) {
        6
    } else if area > 50.0 && area <= 80.0 {
        5
    } else if (20.0..30.0).contains(&area) {
        4
    } else if area > 80.0 {
        3
    } else {
        2
    }
}

pub(crate) fn elevator_points(elevator: bool, floor: Floor) -> u8 {
    if elevator || floor.elevator_exempt() {
        3
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_bands_match_peak_and_shoulders() {
        assert_eq!(area_points(None), 0);
        assert_eq!(area_points(Some(f64::NAN)), 0);
        assert_eq!(area_points(Some(30.0)), 6);
        assert_eq!(area_points(Some(50.0)), 6);
        assert_eq!(area_points(Some(50.5)), 5);
        assert_eq!(area_points(Some(80.0)), 5);
        assert_eq!(area_points(Some(20.0)), 4);
        assert_eq!(area_points(Some(29.9)), 4);
        assert_eq!(area_points(Some(95.0)), 3);
        assert_eq!(area_points(Some(15.0)), 2);
    }

    #[test]
    fn out_of_band_area_is_clamped() {
        assert_eq!(area_points(Some(2.0)), 2);
        assert_eq!(area_points(Some(500.0)), 3);
    }

    #[test]
    fn unspecified_floor_is_not_elevator_exempt() {
        assert_eq!(elevator_points(false, Floor::Unspecified), 0);
        assert_eq!(elevator_points(false, Floor::Basement), 3);
        assert_eq!(elevator_points(true, Floor::Unspecified), 3);
    }
}
