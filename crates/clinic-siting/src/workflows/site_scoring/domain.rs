use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw site description collected by the landlord simulator form.
///
/// Every field is independent and optional on the wire; anything missing,
/// `null`, of the wrong JSON type or outside a field's vocabulary lands on the
/// field's default (`Unspecified`, `false`, no area) and scores zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringInput {
    // Location
    #[serde(deserialize_with = "lenient")]
    pub area_type: AreaType,
    #[serde(deserialize_with = "lenient")]
    pub transit_distance: TransitDistance,
    #[serde(deserialize_with = "lenient")]
    pub bus_access: bool,
    #[serde(deserialize_with = "lenient")]
    pub foot_traffic: FootTraffic,
    #[serde(deserialize_with = "lenient")]
    pub road_access: RoadAccess,
    #[serde(deserialize_with = "lenient")]
    pub parking_convenience: ParkingConvenience,
    // Building
    #[serde(deserialize_with = "lenient")]
    pub floor: Floor,
    /// Usable floor area in pyeong.
    #[serde(deserialize_with = "lenient")]
    pub area: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub building_parking: BuildingParking,
    #[serde(deserialize_with = "lenient")]
    pub elevator: bool,
    #[serde(deserialize_with = "lenient")]
    pub building_age: BuildingAge,
    #[serde(deserialize_with = "lenient")]
    pub infrastructure: Infrastructure,
    // Market
    #[serde(deserialize_with = "lenient")]
    pub population: Population,
    #[serde(deserialize_with = "lenient")]
    pub age_mix: AgeMix,
    #[serde(deserialize_with = "lenient")]
    pub competitors: CompetitorDensity,
    #[serde(deserialize_with = "lenient")]
    pub pharmacy_distance: PharmacyDistance,
    #[serde(deserialize_with = "lenient")]
    pub hospital_nearby: bool,
    // Financial
    #[serde(deserialize_with = "lenient")]
    pub deposit: PriceLevel,
    #[serde(deserialize_with = "lenient")]
    pub rent: PriceLevel,
    #[serde(deserialize_with = "lenient")]
    pub maintenance_fee: MaintenanceFee,
    #[serde(deserialize_with = "lenient")]
    pub premium: PremiumBand,
    #[serde(deserialize_with = "lenient")]
    pub lease_flexibility: LeaseFlexibility,
    // Legal / facility
    #[serde(deserialize_with = "lenient")]
    pub permitted_use: PermittedUse,
    #[serde(deserialize_with = "lenient")]
    pub accessibility: bool,
    #[serde(deserialize_with = "lenient")]
    pub fire_safety: FireSafety,
    #[serde(deserialize_with = "lenient")]
    pub ventilation: Ventilation,
}

/// Falls back to the field default instead of rejecting the whole form.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl ScoringInput {
    /// Input with every field set to its highest-scoring value.
    pub fn maximal() -> Self {
        Self {
            area_type: AreaType::StationCommercial,
            transit_distance: TransitDistance::Within5Min,
            bus_access: true,
            foot_traffic: FootTraffic::VeryHigh,
            road_access: RoadAccess::MainRoad,
            parking_convenience: ParkingConvenience::Easy,
            floor: Floor::Ground,
            area: Some(40.0),
            building_parking: BuildingParking::TenOrMore,
            elevator: true,
            building_age: BuildingAge::Under5Years,
            infrastructure: Infrastructure::Sufficient,
            population: Population::Over50k,
            age_mix: AgeMix::Senior,
            competitors: CompetitorDensity::Few,
            pharmacy_distance: PharmacyDistance::SameBuilding,
            hospital_nearby: true,
            deposit: PriceLevel::BelowAverage,
            rent: PriceLevel::BelowAverage,
            maintenance_fee: MaintenanceFee::Low,
            premium: PremiumBand::None,
            lease_flexibility: LeaseFlexibility::Flexible,
            permitted_use: PermittedUse::Permitted,
            accessibility: true,
            fire_safety: FireSafety::Compliant,
            ventilation: Ventilation::Good,
        }
    }

    /// A typical second-floor unit near a station, used by demos.
    pub fn sample() -> Self {
        Self {
            area_type: AreaType::MixedUse,
            transit_distance: TransitDistance::Within10Min,
            bus_access: true,
            foot_traffic: FootTraffic::High,
            road_access: RoadAccess::SecondaryRoad,
            parking_convenience: ParkingConvenience::Moderate,
            floor: Floor::Second,
            area: Some(42.0),
            building_parking: BuildingParking::OneToFour,
            elevator: false,
            building_age: BuildingAge::FiveTo15Years,
            infrastructure: Infrastructure::NeedsUpgrade,
            population: Population::From30kTo50k,
            age_mix: AgeMix::Young,
            competitors: CompetitorDensity::Several,
            pharmacy_distance: PharmacyDistance::Nearby,
            hospital_nearby: false,
            deposit: PriceLevel::Average,
            rent: PriceLevel::AboveAverage,
            maintenance_fee: MaintenanceFee::Moderate,
            premium: PremiumBand::Low,
            lease_flexibility: LeaseFlexibility::Standard,
            permitted_use: PermittedUse::Permitted,
            accessibility: false,
            fire_safety: FireSafety::Partial,
            ventilation: Ventilation::Fair,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaType {
    StationCommercial,
    DowntownCommercial,
    MixedUse,
    NewTown,
    Residential,
    Suburban,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl AreaType {
    pub const fn points(self) -> u8 {
        match self {
            Self::StationCommercial => 8,
            Self::DowntownCommercial => 7,
            Self::MixedUse => 6,
            Self::NewTown => 5,
            Self::Residential => 4,
            Self::Suburban => 2,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitDistance {
    #[serde(rename = "within_5_min")]
    Within5Min,
    #[serde(rename = "within_10_min")]
    Within10Min,
    #[serde(rename = "over_10_min")]
    Over10Min,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl TransitDistance {
    pub const fn points(self) -> u8 {
        match self {
            Self::Within5Min => 6,
            Self::Within10Min => 4,
            Self::Over10Min => 2,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootTraffic {
    VeryHigh,
    High,
    Moderate,
    Low,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl FootTraffic {
    pub const fn points(self) -> u8 {
        match self {
            Self::VeryHigh => 5,
            Self::High => 4,
            Self::Moderate => 3,
            Self::Low => 1,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadAccess {
    MainRoad,
    SecondaryRoad,
    Alley,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl RoadAccess {
    pub const fn points(self) -> u8 {
        match self {
            Self::MainRoad => 3,
            Self::SecondaryRoad => 2,
            Self::Alley => 1,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParkingConvenience {
    Easy,
    Moderate,
    Difficult,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ParkingConvenience {
    pub const fn points(self) -> u8 {
        match self {
            Self::Easy => 3,
            Self::Moderate => 2,
            Self::Difficult => 1,
            Self::Unspecified => 0,
        }
    }
}

/// Floor the unit sits on. Ground and basement units never need an elevator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Floor {
    Ground,
    Second,
    Third,
    FourthToFifth,
    SixthOrHigher,
    Basement,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Floor {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Basement,
            Self::Ground,
            Self::Second,
            Self::Third,
            Self::FourthToFifth,
            Self::SixthOrHigher,
        ]
    }

    pub const fn points(self) -> u8 {
        match self {
            Self::Ground => 6,
            Self::Second => 5,
            Self::Third => 4,
            Self::FourthToFifth => 3,
            Self::SixthOrHigher => 2,
            Self::Basement => 1,
            Self::Unspecified => 0,
        }
    }

    pub const fn elevator_exempt(self) -> bool {
        matches!(self, Self::Ground | Self::Basement)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ground => "1층",
            Self::Second => "2층",
            Self::Third => "3층",
            Self::FourthToFifth => "4~5층",
            Self::SixthOrHigher => "6층 이상",
            Self::Basement => "지하",
            Self::Unspecified => "미지정",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingParking {
    TenOrMore,
    FiveToNine,
    OneToFour,
    None,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl BuildingParking {
    pub const fn points(self) -> u8 {
        match self {
            Self::TenOrMore => 4,
            Self::FiveToNine => 3,
            Self::OneToFour => 2,
            Self::None | Self::Unspecified => 0,
        }
    }

    pub const fn is_ample(self) -> bool {
        matches!(self, Self::TenOrMore | Self::FiveToNine)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingAge {
    #[serde(rename = "under_5_years")]
    Under5Years,
    #[serde(rename = "five_to_15_years")]
    FiveTo15Years,
    #[serde(rename = "fifteen_to_30_years")]
    FifteenTo30Years,
    #[serde(rename = "over_30_years")]
    Over30Years,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl BuildingAge {
    pub const fn points(self) -> u8 {
        match self {
            Self::Under5Years => 3,
            Self::FiveTo15Years => 2,
            Self::FifteenTo30Years => 1,
            Self::Over30Years | Self::Unspecified => 0,
        }
    }
}

/// Electrical capacity, plumbing and medical gas readiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Infrastructure {
    Sufficient,
    NeedsUpgrade,
    Insufficient,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Infrastructure {
    pub const fn points(self) -> u8 {
        match self {
            Self::Sufficient => 3,
            Self::NeedsUpgrade => 1,
            Self::Insufficient | Self::Unspecified => 0,
        }
    }
}

/// Resident population within the catchment area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Population {
    #[serde(rename = "over_50k")]
    Over50k,
    #[serde(rename = "from_30k_to_50k")]
    From30kTo50k,
    #[serde(rename = "from_10k_to_30k")]
    From10kTo30k,
    #[serde(rename = "under_10k")]
    Under10k,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Population {
    pub const fn points(self) -> u8 {
        match self {
            Self::Over50k => 5,
            Self::From30kTo50k => 4,
            Self::From10kTo30k => 3,
            Self::Under10k => 1,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeMix {
    Senior,
    Balanced,
    Young,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl AgeMix {
    pub const fn points(self) -> u8 {
        match self {
            Self::Senior => 5,
            Self::Balanced => 3,
            Self::Young => 2,
            Self::Unspecified => 0,
        }
    }
}

/// Same-specialty clinics within walking distance.
///
/// A couple of neighbours prove demand without splitting it, so `Few` beats
/// both an empty and a saturated market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitorDensity {
    None,
    Few,
    Several,
    Saturated,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl CompetitorDensity {
    pub const fn points(self) -> u8 {
        match self {
            Self::Few => 5,
            Self::None => 3,
            Self::Several => 2,
            Self::Saturated => 1,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PharmacyDistance {
    SameBuilding,
    Nearby,
    Far,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl PharmacyDistance {
    pub const fn points(self) -> u8 {
        match self {
            Self::SameBuilding => 3,
            Self::Nearby => 2,
            Self::Far | Self::Unspecified => 0,
        }
    }
}

/// Deposit or rent relative to the neighbourhood average. Cheaper scores higher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceLevel {
    BelowAverage,
    Average,
    AboveAverage,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl PriceLevel {
    pub const fn points(self) -> u8 {
        match self {
            Self::BelowAverage => 5,
            Self::Average => 3,
            Self::AboveAverage => 1,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceFee {
    Low,
    Moderate,
    High,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl MaintenanceFee {
    pub const fn points(self) -> u8 {
        match self {
            Self::Low => 3,
            Self::Moderate => 2,
            Self::High => 1,
            Self::Unspecified => 0,
        }
    }
}

/// Key money (권리금) asked by the outgoing tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumBand {
    None,
    Low,
    Moderate,
    High,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl PremiumBand {
    pub const fn points(self) -> u8 {
        match self {
            Self::None => 4,
            Self::Low => 3,
            Self::Moderate => 2,
            Self::High => 1,
            Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseFlexibility {
    Flexible,
    Standard,
    Rigid,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl LeaseFlexibility {
    pub const fn points(self) -> u8 {
        match self {
            Self::Flexible => 3,
            Self::Standard => 2,
            Self::Rigid => 1,
            Self::Unspecified => 0,
        }
    }
}

/// Whether the building register allows a medical facility on this unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermittedUse {
    Permitted,
    ConversionRequired,
    NotPermitted,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl PermittedUse {
    pub const fn points(self) -> u8 {
        match self {
            Self::Permitted => 4,
            Self::ConversionRequired => 2,
            Self::NotPermitted | Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireSafety {
    Compliant,
    Partial,
    NonCompliant,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl FireSafety {
    pub const fn points(self) -> u8 {
        match self {
            Self::Compliant => 2,
            Self::Partial => 1,
            Self::NonCompliant | Self::Unspecified => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ventilation {
    Good,
    Fair,
    Poor,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Ventilation {
    pub const fn points(self) -> u8 {
        match self {
            Self::Good => 2,
            Self::Fair => 1,
            Self::Poor | Self::Unspecified => 0,
        }
    }
}
