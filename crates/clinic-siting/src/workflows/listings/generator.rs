use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{
    BoardCategory, BuildingListing, CommunityPost, CompetitionLevel, PharmacyTransfer,
    SeedDataset,
};
use super::rng::SeedRng;
use crate::workflows::site_scoring::domain::Floor;

pub(crate) const AREA_RANGE: (f64, f64) = (10.0, 120.0);
pub(crate) const DEPOSIT_UNIT: u32 = 500;
pub(crate) const RENT_UNIT: u32 = 10;
pub(crate) const PREMIUM_UNIT: u32 = 500;
pub(crate) const REVENUE_UNIT: u32 = 100;
pub(crate) const PHARMACY_PREMIUM_UNIT: u32 = 1_000;
const NEW_LISTING_DAYS: u32 = 7;

const BUILDING_SALT: u64 = 0x6275_696c_6469_6e67;
const PHARMACY_SALT: u64 = 0x7068_6172_6d61_6379;
const POST_SALT: u64 = 0x706f_7374_7300_0000;

const DISTRICTS: &[&str] = &[
    "강남구",
    "서초구",
    "송파구",
    "마포구",
    "영등포구",
    "성동구",
    "분당구",
    "영통구",
    "일산동구",
    "해운대구",
    "수성구",
    "유성구",
];

const FLOOR_WEIGHTS: &[(Floor, u32)] = &[
    (Floor::Ground, 15),
    (Floor::Second, 25),
    (Floor::Third, 20),
    (Floor::FourthToFifth, 25),
    (Floor::SixthOrHigher, 10),
    (Floor::Basement, 5),
];

const BUILDING_TITLES: &[&str] = &[
    "역세권 메디컬빌딩",
    "신축 클리닉 전용 상가",
    "대로변 코너 상가",
    "약국 입점 메디컬센터",
    "주거 밀집지역 근린상가",
    "학원가 인접 상가",
];

const PHARMACY_TITLES: &[&str] = &[
    "메디컬빌딩 1층 약국 양도",
    "대형 병원 앞 문전약국",
    "주거단지 상가 약국",
    "역세권 처방 안정 약국",
];

const POST_TITLES: &[(BoardCategory, &str)] = &[
    (BoardCategory::Question, "개원 입지 선정할 때 유동인구 자료는 어디서 보나요?"),
    (BoardCategory::Question, "권리금 협상 경험 공유 부탁드립니다"),
    (BoardCategory::Information, "의료시설 용도변경 절차 정리"),
    (BoardCategory::Information, "올해 개원 지원 대출 상품 비교"),
    (BoardCategory::Review, "2층 내과 개원 1년차 후기"),
    (BoardCategory::Review, "메디컬빌딩 인테리어 업체 후기"),
    (BoardCategory::Free, "개원 준비하면서 느낀 점"),
    (BoardCategory::Free, "주말 진료 하시는 원장님 계신가요"),
];

const AUTHOR_PREFIXES: &[&str] = &["개원준비", "봉직의", "원장", "약사", "컨설턴트"];

/// Share of listings per interest tier, lowest tier first.
const INTEREST_TIER_WEIGHTS: &[(CompetitionLevel, u32)] = &[
    (CompetitionLevel::Low, 50),
    (CompetitionLevel::Medium, 30),
    (CompetitionLevel::High, 15),
    (CompetitionLevel::VeryHigh, 5),
];
const VERY_HIGH_INTEREST_CAP: u32 = 150;

/// Distribution knobs for synthetic data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub reference_date: NaiveDate,
    pub hot_probability: f64,
    pub new_probability: f64,
    pub max_listing_age_days: u32,
}

impl SeedConfig {
    pub fn for_date(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            hot_probability: 0.08,
            new_probability: 0.15,
            max_listing_age_days: 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedCounts {
    pub buildings: usize,
    pub pharmacies: usize,
    pub posts: usize,
}

impl SeedCounts {
    /// Rejects any batch larger than `max_batch`.
    pub fn validate(&self, max_batch: usize) -> Result<(), ListingRequestError> {
        for (kind, requested) in [
            ("buildings", self.buildings),
            ("pharmacies", self.pharmacies),
            ("posts", self.posts),
        ] {
            if requested > max_batch {
                return Err(ListingRequestError::BatchTooLarge {
                    kind,
                    requested,
                    max: max_batch,
                });
            }
        }
        Ok(())
    }
}

/// Error raised when a caller asks for more synthetic data than allowed.
#[derive(Debug, thiserror::Error)]
pub enum ListingRequestError {
    #[error("requested {requested} {kind}, maximum batch size is {max}")]
    BatchTooLarge {
        kind: &'static str,
        requested: usize,
        max: usize,
    },
}

/// Produces synthetic marketplace batches from a seed.
///
/// Each listing kind draws from its own stream, so changing one count never
/// reshuffles the other kinds.
pub struct ListingGenerator {
    seed: u64,
    config: SeedConfig,
}

impl ListingGenerator {
    pub fn new(seed: u64, config: SeedConfig) -> Self {
        Self { seed, config }
    }

    pub fn generate(&self, counts: SeedCounts) -> SeedDataset {
        let dataset = SeedDataset {
            seed: self.seed,
            reference_date: self.config.reference_date,
            buildings: self.buildings(counts.buildings),
            pharmacies: self.pharmacies(counts.pharmacies),
            posts: self.posts(counts.posts),
        };

        debug!(
            seed = self.seed,
            buildings = dataset.buildings.len(),
            pharmacies = dataset.pharmacies.len(),
            posts = dataset.posts.len(),
            "seed dataset generated"
        );
        dataset
    }

    pub fn buildings(&self, count: usize) -> Vec<BuildingListing> {
        let mut rng = SeedRng::new(self.seed ^ BUILDING_SALT);
        (1..=count)
            .map(|index| self.building(&mut rng, index))
            .collect()
    }

    pub fn pharmacies(&self, count: usize) -> Vec<PharmacyTransfer> {
        let mut rng = SeedRng::new(self.seed ^ PHARMACY_SALT);
        (1..=count)
            .map(|index| self.pharmacy(&mut rng, index))
            .collect()
    }

    pub fn posts(&self, count: usize) -> Vec<CommunityPost> {
        let mut rng = SeedRng::new(self.seed ^ POST_SALT);
        (1..=count)
            .map(|index| self.post(&mut rng, index))
            .collect()
    }

    fn building(&self, rng: &mut SeedRng, index: usize) -> BuildingListing {
        let district = *rng.pick(DISTRICTS);
        let floor = *rng.weighted(FLOOR_WEIGHTS);
        // Mean of two uniforms leans toward mid-sized units.
        let area = round_tenth(
            (rng.range_f64(15.0, 110.0) + rng.range_f64(15.0, 110.0)) / 2.0,
        )
        .clamp(AREA_RANGE.0, AREA_RANGE.1);

        let rent_per_pyeong = rng.range_f64(5.0, 14.0);
        let monthly_rent = round_to(area * rent_per_pyeong, RENT_UNIT).max(50);
        let deposit_months = f64::from(rng.range_u32(8, 18));
        let deposit = round_to(f64::from(monthly_rent) * deposit_months, DEPOSIT_UNIT)
            .max(DEPOSIT_UNIT);
        let premium = if rng.chance(0.35) {
            0
        } else {
            round_to(rng.range_f64(1_000.0, 15_000.0), PREMIUM_UNIT)
        };
        let maintenance_fee = (area * rng.range_f64(0.8, 2.0)).round().max(5.0) as u32;
        let parking_spaces = rng.range_u32(0, 20);
        let has_elevator = match floor {
            Floor::Ground | Floor::Basement => rng.chance(0.6),
            _ => rng.chance(0.85),
        };

        let is_hot = rng.chance(self.config.hot_probability);
        let is_new = rng.chance(self.config.new_probability);
        let listed_on = self.listed_on(rng, is_new);
        let interest_count = interest_count(rng, is_hot);
        let view_count = interest_count * rng.range_u32(8, 25) + rng.range_u32(0, 50);
        let title = format!("{district} {} {}", floor.label(), rng.pick(BUILDING_TITLES));

        BuildingListing {
            id: format!("bld-{index:06}"),
            title,
            district,
            floor,
            area,
            deposit,
            monthly_rent,
            premium,
            maintenance_fee,
            parking_spaces,
            has_elevator,
            is_hot,
            is_new,
            view_count,
            interest_count,
            competition: CompetitionLevel::from_interest(interest_count),
            listed_on,
        }
    }

    fn pharmacy(&self, rng: &mut SeedRng, index: usize) -> PharmacyTransfer {
        let district = *rng.pick(DISTRICTS);
        let area = round_tenth(rng.range_f64(10.0, 40.0));
        let monthly_revenue = round_to(rng.range_f64(3_000.0, 20_000.0), REVENUE_UNIT);
        let premium = round_to(rng.range_f64(5_000.0, 50_000.0), PHARMACY_PREMIUM_UNIT);
        let daily_prescriptions = rng.range_u32(40, 300);
        let nearby_clinics = rng.range_u32(0, 12);
        let is_hot = rng.chance(self.config.hot_probability);
        let is_new = rng.chance(self.config.new_probability);
        let listed_on = self.listed_on(rng, is_new);
        let interest_count = interest_count(rng, is_hot);

        PharmacyTransfer {
            id: format!("phm-{index:06}"),
            title: format!("{district} {}", rng.pick(PHARMACY_TITLES)),
            district,
            area,
            monthly_revenue,
            premium,
            daily_prescriptions,
            nearby_clinics,
            is_hot,
            is_new,
            interest_count,
            competition: CompetitionLevel::from_interest(interest_count),
            listed_on,
        }
    }

    fn post(&self, rng: &mut SeedRng, index: usize) -> CommunityPost {
        let (category, title) = *rng.pick(POST_TITLES);
        // Squaring skews toward the long tail of quiet posts.
        let views = 10 + (rng.next_f64().powi(2) * 2_990.0) as u32;
        let likes = rng.range_u32(0, views / 10);
        let comments = rng.range_u32(0, views / 20);
        let author = format!("{}{:03}", rng.pick(AUTHOR_PREFIXES), rng.range_u32(1, 999));
        let age = rng.range_u32(0, self.config.max_listing_age_days);

        CommunityPost {
            id: format!("post-{index:06}"),
            category,
            title: title.to_string(),
            author,
            views,
            likes,
            comments,
            created_on: self.days_before_reference(age),
        }
    }

    fn listed_on(&self, rng: &mut SeedRng, is_new: bool) -> NaiveDate {
        let max_age = if is_new {
            NEW_LISTING_DAYS.min(self.config.max_listing_age_days)
        } else {
            self.config.max_listing_age_days
        };
        let age = rng.range_u32(0, max_age);
        self.days_before_reference(age)
    }

    fn days_before_reference(&self, days: u32) -> NaiveDate {
        self.config
            .reference_date
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(self.config.reference_date)
    }
}

/// Draws an interest count inside a sampled tier. Hot listings start at `High`.
fn interest_count(rng: &mut SeedRng, is_hot: bool) -> u32 {
    let mut tier = *rng.weighted(INTEREST_TIER_WEIGHTS);
    if is_hot && tier < CompetitionLevel::High {
        tier = CompetitionLevel::High;
    }
    let (low, high) = tier.interest_range();
    rng.range_u32(low, high.unwrap_or(VERY_HIGH_INTEREST_CAP))
}

fn round_to(value: f64, unit: u32) -> u32 {
    let unit = f64::from(unit.max(1));
    ((value / unit).round() * unit).max(0.0) as u32
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
