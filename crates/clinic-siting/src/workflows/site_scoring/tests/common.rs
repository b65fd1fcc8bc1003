use axum::response::Response;
use serde_json::Value;

use crate::workflows::site_scoring::domain::{Floor, ScoringInput};
use crate::workflows::site_scoring::views::{AnalysisResult, Category};

pub(super) fn empty_input() -> ScoringInput {
    ScoringInput::default()
}

pub(super) fn placed(floor: Floor, area: f64) -> ScoringInput {
    ScoringInput {
        floor,
        area: Some(area),
        ..ScoringInput::default()
    }
}

pub(super) fn category_score(result: &AnalysisResult, category: Category) -> u8 {
    result
        .category(category)
        .map(|entry| entry.score)
        .expect("category present")
}

pub(super) fn item_score(result: &AnalysisResult, category: Category, name: &str) -> u8 {
    result
        .category(category)
        .and_then(|entry| entry.items.iter().find(|item| item.name == name))
        .map(|item| item.score)
        .expect("item present")
}

pub(super) fn recommendation_names(result: &AnalysisResult) -> Vec<&'static str> {
    result
        .recommendations
        .iter()
        .map(|entry| entry.name)
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
