use std::collections::HashSet;

use chrono::NaiveDate;
use clinic_siting::workflows::listings::{CompetitionLevel, ListingGenerator, SeedConfig};
use clinic_siting::workflows::site_scoring::probability::{grade, probability};
use clinic_siting::workflows::site_scoring::{
    evaluate, AgeMix, AreaType, BuildingAge, BuildingParking, Category, CompetitorDensity,
    FireSafety, Floor, FootTraffic, Infrastructure, LeaseFlexibility, MaintenanceFee,
    ParkingConvenience, PermittedUse, PharmacyDistance, Population, PremiumBand, PriceLevel,
    RoadAccess, ScoringInput, TransitDistance, Ventilation,
};
use proptest::prelude::*;
use proptest::sample::select;

fn location() -> impl Strategy<
    Value = (
        AreaType,
        TransitDistance,
        bool,
        FootTraffic,
        RoadAccess,
        ParkingConvenience,
    ),
> {
    (
        select(vec![
            AreaType::StationCommercial,
            AreaType::DowntownCommercial,
            AreaType::MixedUse,
            AreaType::NewTown,
            AreaType::Residential,
            AreaType::Suburban,
            AreaType::Unspecified,
        ]),
        select(vec![
            TransitDistance::Within5Min,
            TransitDistance::Within10Min,
            TransitDistance::Over10Min,
            TransitDistance::Unspecified,
        ]),
        any::<bool>(),
        select(vec![
            FootTraffic::VeryHigh,
            FootTraffic::High,
            FootTraffic::Moderate,
            FootTraffic::Low,
            FootTraffic::Unspecified,
        ]),
        select(vec![
            RoadAccess::MainRoad,
            RoadAccess::SecondaryRoad,
            RoadAccess::Alley,
            RoadAccess::Unspecified,
        ]),
        select(vec![
            ParkingConvenience::Easy,
            ParkingConvenience::Moderate,
            ParkingConvenience::Difficult,
            ParkingConvenience::Unspecified,
        ]),
    )
}

fn floors() -> Vec<Floor> {
    let mut floors = Floor::ordered().to_vec();
    floors.push(Floor::Unspecified);
    floors
}

fn building() -> impl Strategy<
    Value = (
        Floor,
        Option<f64>,
        BuildingParking,
        bool,
        BuildingAge,
        Infrastructure,
    ),
> {
    (
        select(floors()),
        prop::option::of(0.0f64..200.0),
        select(vec![
            BuildingParking::TenOrMore,
            BuildingParking::FiveToNine,
            BuildingParking::OneToFour,
            BuildingParking::None,
            BuildingParking::Unspecified,
        ]),
        any::<bool>(),
        select(vec![
            BuildingAge::Under5Years,
            BuildingAge::FiveTo15Years,
            BuildingAge::FifteenTo30Years,
            BuildingAge::Over30Years,
            BuildingAge::Unspecified,
        ]),
        select(vec![
            Infrastructure::Sufficient,
            Infrastructure::NeedsUpgrade,
            Infrastructure::Insufficient,
            Infrastructure::Unspecified,
        ]),
    )
}

fn market(
) -> impl Strategy<Value = (Population, AgeMix, CompetitorDensity, PharmacyDistance, bool)> {
    (
        select(vec![
            Population::Over50k,
            Population::From30kTo50k,
            Population::From10kTo30k,
            Population::Under10k,
            Population::Unspecified,
        ]),
        select(vec![
            AgeMix::Senior,
            AgeMix::Balanced,
            AgeMix::Young,
            AgeMix::Unspecified,
        ]),
        select(vec![
            CompetitorDensity::None,
            CompetitorDensity::Few,
            CompetitorDensity::Several,
            CompetitorDensity::Saturated,
            CompetitorDensity::Unspecified,
        ]),
        select(vec![
            PharmacyDistance::SameBuilding,
            PharmacyDistance::Nearby,
            PharmacyDistance::Far,
            PharmacyDistance::Unspecified,
        ]),
        any::<bool>(),
    )
}

fn price_level() -> impl Strategy<Value = PriceLevel> {
    select(vec![
        PriceLevel::BelowAverage,
        PriceLevel::Average,
        PriceLevel::AboveAverage,
        PriceLevel::Unspecified,
    ])
}

fn financial() -> impl Strategy<
    Value = (
        PriceLevel,
        PriceLevel,
        MaintenanceFee,
        PremiumBand,
        LeaseFlexibility,
    ),
> {
    (
        price_level(),
        price_level(),
        select(vec![
            MaintenanceFee::Low,
            MaintenanceFee::Moderate,
            MaintenanceFee::High,
            MaintenanceFee::Unspecified,
        ]),
        select(vec![
            PremiumBand::None,
            PremiumBand::Low,
            PremiumBand::Moderate,
            PremiumBand::High,
            PremiumBand::Unspecified,
        ]),
        select(vec![
            LeaseFlexibility::Flexible,
            LeaseFlexibility::Standard,
            LeaseFlexibility::Rigid,
            LeaseFlexibility::Unspecified,
        ]),
    )
}

fn legal() -> impl Strategy<Value = (PermittedUse, bool, FireSafety, Ventilation)> {
    (
        select(vec![
            PermittedUse::Permitted,
            PermittedUse::ConversionRequired,
            PermittedUse::NotPermitted,
            PermittedUse::Unspecified,
        ]),
        any::<bool>(),
        select(vec![
            FireSafety::Compliant,
            FireSafety::Partial,
            FireSafety::NonCompliant,
            FireSafety::Unspecified,
        ]),
        select(vec![
            Ventilation::Good,
            Ventilation::Fair,
            Ventilation::Poor,
            Ventilation::Unspecified,
        ]),
    )
}

fn scoring_input() -> impl Strategy<Value = ScoringInput> {
    (location(), building(), market(), financial(), legal()).prop_map(
        |(
            (
                area_type,
                transit_distance,
                bus_access,
                foot_traffic,
                road_access,
                parking_convenience,
            ),
            (floor, area, building_parking, elevator, building_age, infrastructure),
            (population, age_mix, competitors, pharmacy_distance, hospital_nearby),
            (deposit, rent, maintenance_fee, premium, lease_flexibility),
            (permitted_use, accessibility, fire_safety, ventilation),
        )| ScoringInput {
            area_type,
            transit_distance,
            bus_access,
            foot_traffic,
            road_access,
            parking_convenience,
            floor,
            area,
            building_parking,
            elevator,
            building_age,
            infrastructure,
            population,
            age_mix,
            competitors,
            pharmacy_distance,
            hospital_nearby,
            deposit,
            rent,
            maintenance_fee,
            premium,
            lease_flexibility,
            permitted_use,
            accessibility,
            fire_safety,
            ventilation,
        },
    )
}

fn building_score(input: &ScoringInput) -> u8 {
    evaluate(input)
        .category(Category::Building)
        .map(|entry| entry.score)
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn scores_stay_within_category_bounds(input in scoring_input()) {
        let result = evaluate(&input);

        prop_assert_eq!(result.categories.len(), 5);
        let mut sum = 0u32;
        for entry in &result.categories {
            prop_assert!(entry.score <= entry.max, "{} over max", entry.label);
            prop_assert_eq!(entry.max, entry.category.max_score());
            let items: u32 = entry.items.iter().map(|item| u32::from(item.score)).sum();
            prop_assert_eq!(items, u32::from(entry.score));
            sum += u32::from(entry.score);
        }
        prop_assert_eq!(sum, u32::from(result.total_score));
        prop_assert!(result.total_score <= 100);
        prop_assert!((5..=99).contains(&result.probability));
        prop_assert_eq!(result.probability, probability(result.total_score));
        prop_assert_eq!(result.grade.grade, grade(result.total_score));
    }

    #[test]
    fn probability_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(probability(low) <= probability(high));
        prop_assert!(grade(low) <= grade(high));
    }

    #[test]
    fn elevator_only_matters_above_ground(input in scoring_input()) {
        let with = ScoringInput { elevator: true, ..input.clone() };
        let without = ScoringInput { elevator: false, ..input };
        let delta = building_score(&with) - building_score(&without);

        if with.floor.elevator_exempt() {
            prop_assert_eq!(delta, 0);
        } else {
            prop_assert_eq!(delta, 3);
        }
    }

    #[test]
    fn transit_never_exceeds_six(input in scoring_input()) {
        let result = evaluate(&input);
        let transit = result
            .category(Category::Location)
            .and_then(|entry| entry.items.get(1))
            .map(|item| item.score)
            .unwrap_or_default();
        prop_assert!(transit <= 6);
    }

    #[test]
    fn improvements_skip_maxed_items_and_keep_input_order_on_ties(input in scoring_input()) {
        let result = evaluate(&input);
        let order: Vec<&str> = result
            .categories
            .iter()
            .flat_map(|entry| entry.items.iter().map(|item| item.name))
            .collect();
        let position = |name: &str| order.iter().position(|candidate| *candidate == name);

        prop_assert!(result.improvements.len() <= 3);
        for entry in &result.improvements {
            prop_assert!(entry.score < entry.max);
            prop_assert_eq!(entry.potential, entry.max - entry.score);
            prop_assert!(u16::from(result.probability) + u16::from(entry.probability_gain) <= 99);
        }
        for pair in result.improvements.windows(2) {
            prop_assert!(pair[0].potential >= pair[1].potential);
            if pair[0].potential == pair[1].potential {
                prop_assert!(position(pair[0].item) < position(pair[1].item));
            }
        }
    }

    #[test]
    fn recommendations_are_unique_sorted_and_bounded(input in scoring_input()) {
        let result = evaluate(&input);
        let names: HashSet<_> = result.recommendations.iter().map(|entry| entry.name).collect();

        prop_assert!(result.recommendations.len() <= 5);
        prop_assert_eq!(names.len(), result.recommendations.len());
        prop_assert!(result
            .recommendations
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn wire_round_trip_preserves_the_analysis(input in scoring_input()) {
        let encoded = serde_json::to_string(&input).expect("serialize input");
        let decoded: ScoringInput = serde_json::from_str(&encoded).expect("deserialize input");
        prop_assert_eq!(evaluate(&decoded).total_score, evaluate(&input).total_score);
    }

    #[test]
    fn seeded_listings_are_consistent(seed in any::<u64>()) {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let generator = ListingGenerator::new(seed, SeedConfig::for_date(reference));

        for listing in generator.buildings(25) {
            prop_assert!((10.0..=120.0).contains(&listing.area));
            prop_assert_eq!(listing.deposit % 500, 0);
            prop_assert_eq!(listing.monthly_rent % 10, 0);
            prop_assert_eq!(
                listing.competition,
                CompetitionLevel::from_interest(listing.interest_count)
            );
            prop_assert!(listing.listed_on <= reference);
            let score = evaluate(&listing.scoring_input()).total_score;
            prop_assert!(score <= 100);
        }
        for post in generator.posts(25) {
            prop_assert!(post.likes <= post.views);
            prop_assert!(post.comments <= post.views);
        }
    }
}
