use clinic_siting::workflows::site_scoring::{
    evaluate, AgeMix, BuildingParking, Category, Floor, Grade, PermittedUse, ScoringInput,
    SiteScoringEngine,
};

fn site(floor: Floor, area: f64) -> ScoringInput {
    ScoringInput {
        floor,
        area: Some(area),
        ..ScoringInput::default()
    }
}

#[test]
fn sample_site_evaluates_end_to_end() {
    let result = SiteScoringEngine::new().evaluate(&ScoringInput::sample());

    assert_eq!(result.total_score, 62);
    assert_eq!(result.probability, 81);
    assert_eq!(result.grade.grade, Grade::Good);
    assert_eq!(result.grade.label, "양호");

    let improvements: Vec<_> = result
        .improvements
        .iter()
        .map(|entry| (entry.item, entry.potential, entry.probability_gain))
        .collect();
    assert_eq!(
        improvements,
        vec![("임대료 수준", 4, 7), ("엘리베이터", 3, 5), ("연령 구성", 3, 5)]
    );
    assert_eq!(result.improvements[1].category_label, "건물 조건");
}

#[test]
fn engine_and_free_function_agree() {
    let input = ScoringInput {
        building_parking: BuildingParking::FiveToNine,
        age_mix: AgeMix::Senior,
        ..site(Floor::Ground, 75.0)
    };

    let from_engine = SiteScoringEngine::default().evaluate(&input);
    let from_fn = evaluate(&input);

    assert_eq!(from_engine.total_score, from_fn.total_score);
    assert_eq!(from_engine.recommendations, from_fn.recommendations);
    assert_eq!(from_engine.recommendations[0].name, "정형외과");
    assert_eq!(from_engine.recommendations[0].score, 102);
}

#[test]
fn elevator_absence_only_penalises_upper_floors() {
    for floor in Floor::ordered() {
        let with = evaluate(&ScoringInput {
            elevator: true,
            ..site(floor, 40.0)
        });
        let without = evaluate(&site(floor, 40.0));
        let expected = if floor.elevator_exempt() { 0 } else { 3 };
        assert_eq!(
            with.total_score - without.total_score,
            expected,
            "{floor:?}"
        );
    }
}

#[test]
fn zoning_problems_surface_as_warnings() {
    let result = evaluate(&ScoringInput {
        permitted_use: PermittedUse::ConversionRequired,
        ..site(Floor::Third, 40.0)
    });

    assert!(result
        .insights
        .warnings
        .iter()
        .any(|warning| warning.contains("용도 변경")));
    assert!(result
        .insights
        .warnings
        .iter()
        .any(|warning| warning.contains("엘리베이터")));
    assert_eq!(
        result.category(Category::Legal).map(|entry| entry.score),
        Some(2)
    );
}

#[test]
fn analysis_serializes_for_the_wire() {
    let payload = serde_json::to_value(evaluate(&ScoringInput::maximal())).expect("serializes");

    assert_eq!(payload["total_score"], 100);
    assert_eq!(payload["probability"], 99);
    assert_eq!(payload["grade"]["label"], "최상");
    assert_eq!(payload["categories"][0]["label"], "입지 조건");
    assert_eq!(payload["categories"][0]["max"], 25);
}
