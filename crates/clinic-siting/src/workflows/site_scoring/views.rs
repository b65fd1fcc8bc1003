use serde::Serialize;

/// Scoring domains, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Location,
    Building,
    Market,
    Financial,
    Legal,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Location,
            Self::Building,
            Self::Market,
            Self::Financial,
            Self::Legal,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "입지 조건",
            Self::Building => "건물 조건",
            Self::Market => "상권 분석",
            Self::Financial => "재무 조건",
            Self::Legal => "법률/시설",
        }
    }

    pub const fn max_score(self) -> u8 {
        match self {
            Self::Location | Self::Building => 25,
            Self::Market | Self::Financial => 20,
            Self::Legal => 10,
        }
    }
}

/// One line of a category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreItem {
    pub name: &'static str,
    pub score: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub max: u8,
    pub score: u8,
    pub items: Vec<ScoreItem>,
}

impl CategoryScore {
    pub(crate) fn from_items(category: Category, items: Vec<ScoreItem>) -> Self {
        let score = items.iter().map(|item| item.score).sum::<u8>();
        Self {
            category,
            label: category.label(),
            max: category.max_score(),
            score: score.min(category.max_score()),
            items,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.max)
        }
    }
}

/// Six ordered buckets over the raw total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Unsuitable,
    Poor,
    Average,
    Good,
    Excellent,
    Top,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "최상",
            Self::Excellent => "우수",
            Self::Good => "양호",
            Self::Average => "보통",
            Self::Poor => "미흡",
            Self::Unsuitable => "부적합",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Top => "#059669",
            Self::Excellent => "#10b981",
            Self::Good => "#3b82f6",
            Self::Average => "#f59e0b",
            Self::Poor => "#f97316",
            Self::Unsuitable => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeView {
    pub grade: Grade,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Grade> for GradeView {
    fn from(grade: Grade) -> Self {
        Self {
            grade,
            label: grade.label(),
            color: grade.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyRecommendation {
    pub name: &'static str,
    pub score: u8,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementOpportunity {
    pub item: &'static str,
    pub category: Category,
    pub category_label: &'static str,
    pub score: u8,
    pub max: u8,
    pub potential: u8,
    /// First-order estimate of the probability points gained by closing the gap.
    pub probability_gain: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteInsights {
    pub strongest_category: &'static str,
    pub weakest_category: &'static str,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub categories: Vec<CategoryScore>,
    pub total_score: u8,
    pub probability: u8,
    pub grade: GradeView,
    pub recommendations: Vec<SpecialtyRecommendation>,
    pub improvements: Vec<ImprovementOpportunity>,
    pub insights: SiteInsights,
}

impl AnalysisResult {
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
    }
}
