//! Specialty fit derived from a closed rule table.
//!
//! The floor/area table seeds candidates, a small fallback set fills thin
//! matches, and flat bonuses reward parking and demographics. Adding a
//! specialty is a data change to one of the tables below.

use super::domain::{AgeMix, Floor, ScoringInput};
use super::views::SpecialtyRecommendation;

pub(crate) const MAX_RECOMMENDATIONS: usize = 5;
const MIN_SPECIFIC_MATCHES: usize = 3;
const BONUS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloorBucket {
    Ground,
    Low,
    High,
    Basement,
}

impl FloorBucket {
    fn of(floor: Floor) -> Option<Self> {
        match floor {
            Floor::Ground => Some(Self::Ground),
            Floor::Second | Floor::Third => Some(Self::Low),
            Floor::FourthToFifth | Floor::SixthOrHigher => Some(Self::High),
            Floor::Basement => Some(Self::Basement),
            Floor::Unspecified => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AreaBand {
    Small,
    Medium,
    Large,
}

impl AreaBand {
    fn of(area: Option<f64>) -> Option<Self> {
        let area = area.filter(|value| value.is_finite())?;
        Some(if area < 30.0 {
            Self::Small
        } else if area < 60.0 {
            Self::Medium
        } else {
            Self::Large
        })
    }
}

struct Candidate {
    name: &'static str,
    score: u8,
    reason: &'static str,
}

struct PlacementRule {
    floor: FloorBucket,
    band: AreaBand,
    candidates: &'static [Candidate],
}

const fn candidate(name: &'static str, score: u8, reason: &'static str) -> Candidate {
    Candidate {
        name,
        score,
        reason,
    }
}

const PLACEMENT_RULES: &[PlacementRule] = &[
    PlacementRule {
        floor: FloorBucket::Ground,
        band: AreaBand::Small,
        candidates: &[
            candidate("이비인후과", 88, "1층 소형 평수로 회전율 높은 단기 진료에 적합"),
            candidate("소아청소년과", 85, "유모차 진입이 쉬운 1층 입지"),
            candidate("가정의학과", 80, "소규모 1차 진료에 필요한 면적 충족"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Ground,
        band: AreaBand::Medium,
        candidates: &[
            candidate("내과", 90, "1층 중형 평수로 검사실과 대기 공간 확보 가능"),
            candidate("정형외과", 86, "거동이 불편한 환자의 접근성이 우수"),
            candidate("소아청소년과", 84, "보호자 동반 내원이 편리한 1층 입지"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Ground,
        band: AreaBand::Large,
        candidates: &[
            candidate("정형외과", 92, "물리치료실을 갖춘 대형 1층 공간"),
            candidate("재활의학과", 88, "재활 장비 반입과 환자 동선이 유리"),
            candidate("내과", 85, "내시경실과 검진 공간을 함께 구성 가능"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Low,
        band: AreaBand::Small,
        candidates: &[
            candidate("피부과", 84, "저층 소형 공간에 시술실 구성이 용이"),
            candidate("안과", 80, "검사 장비 중심의 컴팩트한 동선"),
            candidate("정신건강의학과", 78, "프라이버시가 보장되는 저층 입지"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Low,
        band: AreaBand::Medium,
        candidates: &[
            candidate("치과", 88, "체어 배치에 적합한 저층 중형 평수"),
            candidate("피부과", 86, "상담실과 시술실을 분리할 수 있는 면적"),
            candidate("안과", 83, "검사실과 수술실 구성이 가능한 면적"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Low,
        band: AreaBand::Large,
        candidates: &[
            candidate("성형외과", 87, "수술실과 회복실을 갖출 수 있는 대형 공간"),
            candidate("건강검진센터", 84, "검진 동선 구성이 가능한 넓은 면적"),
            candidate("산부인과", 80, "분만실을 제외한 외래 진료 공간 확보"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::High,
        band: AreaBand::Small,
        candidates: &[
            candidate("정신건강의학과", 85, "노출이 적은 고층 소형 공간"),
            candidate("한의원", 80, "예약 중심 진료로 층수 영향이 적음"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::High,
        band: AreaBand::Medium,
        candidates: &[
            candidate("성형외과", 86, "고층의 프라이버시와 전망이 강점"),
            candidate("치과", 82, "예약 환자 위주로 고층 입지 부담이 적음"),
            candidate("한의원", 78, "침구실 배치에 적합한 중형 평수"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::High,
        band: AreaBand::Large,
        candidates: &[
            candidate("건강검진센터", 88, "층 전체를 검진 동선으로 활용 가능"),
            candidate("성형외과", 84, "수술실과 입원실 구성이 가능한 면적"),
            candidate("재활의학과", 76, "넓은 운동치료실 확보 가능"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Basement,
        band: AreaBand::Small,
        candidates: &[
            candidate("통증의학과", 72, "시술 위주라 소형 지하 공간에서도 운영 가능"),
            candidate("정신건강의학과", 70, "외부 노출이 적은 조용한 상담 공간"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Basement,
        band: AreaBand::Medium,
        candidates: &[
            candidate("통증의학과", 74, "주사실과 물리치료실 배치에 충분한 면적"),
            candidate("재활의학과", 72, "지하 공간을 운동치료실로 활용"),
            candidate("한의원", 70, "침구실 위주 진료로 채광 영향이 적음"),
        ],
    },
    PlacementRule {
        floor: FloorBucket::Basement,
        band: AreaBand::Large,
        candidates: &[
            candidate("재활의학과", 74, "지하 대형 공간을 운동치료실로 활용"),
            candidate("통증의학과", 72, "시술 위주 진료로 채광 영향이 적음"),
        ],
    },
];

struct FallbackCandidate {
    candidate: Candidate,
    min_area: f64,
}

const FALLBACK_CANDIDATES: &[FallbackCandidate] = &[
    FallbackCandidate {
        candidate: candidate("가정의학과", 75, "대부분의 입지에서 무난한 1차 진료과"),
        min_area: 15.0,
    },
    FallbackCandidate {
        candidate: candidate("내과", 72, "수요가 안정적인 범용 진료과"),
        min_area: 25.0,
    },
    FallbackCandidate {
        candidate: candidate("한의원", 70, "소규모 공간에서도 운영 가능"),
        min_area: 20.0,
    },
    FallbackCandidate {
        candidate: candidate("건강검진센터", 70, "넓은 면적을 검진 공간으로 활용"),
        min_area: 80.0,
    },
];

struct BonusRule {
    applies: fn(&ScoringInput) -> bool,
    specialties: &'static [&'static str],
}

const BONUS_RULES: &[BonusRule] = &[
    BonusRule {
        applies: has_ample_parking,
        specialties: &["정형외과", "재활의학과", "건강검진센터", "산부인과"],
    },
    BonusRule {
        applies: is_senior_skewed,
        specialties: &["내과", "정형외과", "안과", "재활의학과", "한의원"],
    },
    BonusRule {
        applies: is_youth_skewed,
        specialties: &["피부과", "성형외과", "치과", "정신건강의학과"],
    },
];

fn has_ample_parking(input: &ScoringInput) -> bool {
    input.building_parking.is_ample()
}

fn is_senior_skewed(input: &ScoringInput) -> bool {
    input.age_mix == AgeMix::Senior
}

fn is_youth_skewed(input: &ScoringInput) -> bool {
    input.age_mix == AgeMix::Young
}

pub(crate) fn recommend(input: &ScoringInput) -> Vec<SpecialtyRecommendation> {
    let mut pool: Vec<SpecialtyRecommendation> = Vec::new();

    if let (Some(floor), Some(band)) = (FloorBucket::of(input.floor), AreaBand::of(input.area)) {
        pool.extend(
            PLACEMENT_RULES
                .iter()
                .filter(|rule| rule.floor == floor && rule.band == band)
                .flat_map(|rule| rule.candidates.iter())
                .map(to_recommendation),
        );
    }

    if pool.len() < MIN_SPECIFIC_MATCHES {
        let area = input.area.filter(|value| value.is_finite()).unwrap_or(0.0);
        pool.extend(
            FALLBACK_CANDIDATES
                .iter()
                .filter(|fallback| area >= fallback.min_area)
                .map(|fallback| to_recommendation(&fallback.candidate)),
        );
    }

    for rule in BONUS_RULES.iter().filter(|rule| (rule.applies)(input)) {
        for entry in pool
            .iter_mut()
            .filter(|entry| rule.specialties.contains(&entry.name))
        {
            entry.score = entry.score.saturating_add(BONUS);
        }
    }

    let mut unique: Vec<SpecialtyRecommendation> = Vec::with_capacity(pool.len());
    for entry in pool {
        if !unique.iter().any(|kept| kept.name == entry.name) {
            unique.push(entry);
        }
    }

    unique.sort_by(|a, b| b.score.cmp(&a.score));
    unique.truncate(MAX_RECOMMENDATIONS);
    unique
}

fn to_recommendation(candidate: &Candidate) -> SpecialtyRecommendation {
    SpecialtyRecommendation {
        name: candidate.name,
        score: candidate.score,
        reason: candidate.reason,
    }
}
