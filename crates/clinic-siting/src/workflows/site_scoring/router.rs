use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};

use super::domain::ScoringInput;
use super::evaluate;

/// Router exposing the scoring engine over HTTP.
pub fn site_scoring_router() -> Router {
    Router::new().route("/api/v1/site-scoring/evaluate", post(evaluate_handler))
}

pub(crate) async fn evaluate_handler(Json(input): Json<ScoringInput>) -> impl IntoResponse {
    let result = evaluate(&input);
    (StatusCode::OK, Json(result))
}
