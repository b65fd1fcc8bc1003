use chrono::NaiveDate;
use serde::Serialize;

use crate::workflows::site_scoring::domain::{
    BuildingParking, Floor, MaintenanceFee, PremiumBand, PriceLevel, ScoringInput,
};

/// Competition derived from how many users flagged interest in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl CompetitionLevel {
    pub const fn from_interest(interest_count: u32) -> Self {
        match interest_count {
            0..=9 => Self::Low,
            10..=29 => Self::Medium,
            30..=59 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    /// Inclusive interest-count range of the tier. `VeryHigh` is open-ended.
    pub const fn interest_range(self) -> (u32, Option<u32>) {
        match self {
            Self::Low => (0, Some(9)),
            Self::Medium => (10, Some(29)),
            Self::High => (30, Some(59)),
            Self::VeryHigh => (60, None),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "낮음",
            Self::Medium => "보통",
            Self::High => "높음",
            Self::VeryHigh => "매우 높음",
        }
    }
}

/// Clinic-ready unit offered in the marketplace. Prices are in 만원.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingListing {
    pub id: String,
    pub title: String,
    pub district: &'static str,
    pub floor: Floor,
    pub area: f64,
    pub deposit: u32,
    pub monthly_rent: u32,
    pub premium: u32,
    pub maintenance_fee: u32,
    pub parking_spaces: u32,
    pub has_elevator: bool,
    pub is_hot: bool,
    pub is_new: bool,
    pub view_count: u32,
    pub interest_count: u32,
    pub competition: CompetitionLevel,
    pub listed_on: NaiveDate,
}

impl BuildingListing {
    pub fn rent_per_pyeong(&self) -> f64 {
        if self.area > 0.0 {
            f64::from(self.monthly_rent) / self.area
        } else {
            0.0
        }
    }

    /// Projects the listing onto the fields the scoring engine can infer from it.
    /// Location, market and legal fields stay unspecified.
    pub fn scoring_input(&self) -> ScoringInput {
        let rent_per_pyeong = self.rent_per_pyeong();
        let rent = if rent_per_pyeong < 7.0 {
            PriceLevel::BelowAverage
        } else if rent_per_pyeong < 11.0 {
            PriceLevel::Average
        } else {
            PriceLevel::AboveAverage
        };

        let deposit_months = if self.monthly_rent > 0 {
            f64::from(self.deposit) / f64::from(self.monthly_rent)
        } else {
            0.0
        };
        let deposit = if deposit_months <= 10.0 {
            PriceLevel::BelowAverage
        } else if deposit_months <= 15.0 {
            PriceLevel::Average
        } else {
            PriceLevel::AboveAverage
        };

        let premium = match self.premium {
            0 => PremiumBand::None,
            1..=3_000 => PremiumBand::Low,
            3_001..=8_000 => PremiumBand::Moderate,
            _ => PremiumBand::High,
        };

        let fee_per_pyeong = if self.area > 0.0 {
            f64::from(self.maintenance_fee) / self.area
        } else {
            0.0
        };
        let maintenance_fee = if fee_per_pyeong < 1.0 {
            MaintenanceFee::Low
        } else if fee_per_pyeong < 1.5 {
            MaintenanceFee::Moderate
        } else {
            MaintenanceFee::High
        };

        let building_parking = match self.parking_spaces {
            0 => BuildingParking::None,
            1..=4 => BuildingParking::OneToFour,
            5..=9 => BuildingParking::FiveToNine,
            _ => BuildingParking::TenOrMore,
        };

        ScoringInput {
            floor: self.floor,
            area: Some(self.area),
            elevator: self.has_elevator,
            building_parking,
            deposit,
            rent,
            maintenance_fee,
            premium,
            ..ScoringInput::default()
        }
    }
}

/// Pharmacy business offered for transfer. Money fields are in 만원.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PharmacyTransfer {
    pub id: String,
    pub title: String,
    pub district: &'static str,
    pub area: f64,
    pub monthly_revenue: u32,
    pub premium: u32,
    pub daily_prescriptions: u32,
    pub nearby_clinics: u32,
    pub is_hot: bool,
    pub is_new: bool,
    pub interest_count: u32,
    pub competition: CompetitionLevel,
    pub listed_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardCategory {
    Question,
    Information,
    Review,
    Free,
}

impl BoardCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Question => "질문",
            Self::Information => "정보",
            Self::Review => "후기",
            Self::Free => "자유",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityPost {
    pub id: String,
    pub category: BoardCategory,
    pub title: String,
    pub author: String,
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
    pub created_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedDataset {
    pub seed: u64,
    pub reference_date: NaiveDate,
    pub buildings: Vec<BuildingListing>,
    pub pharmacies: Vec<PharmacyTransfer>,
    pub posts: Vec<CommunityPost>,
}
