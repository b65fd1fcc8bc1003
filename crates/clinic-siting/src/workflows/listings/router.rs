use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::domain::SeedDataset;
use super::generator::{ListingGenerator, ListingRequestError, SeedConfig, SeedCounts};
use crate::config::ListingConfig;

pub(crate) const DEFAULT_BUILDINGS: usize = 20;
pub(crate) const DEFAULT_PHARMACIES: usize = 10;
pub(crate) const DEFAULT_POSTS: usize = 10;

/// Query string accepted by the seed endpoint. Missing counts fall back to a
/// small demo batch and a missing seed to the configured one.
#[derive(Debug, Default, Deserialize)]
pub struct SeedQuery {
    pub seed: Option<u64>,
    pub buildings: Option<usize>,
    pub pharmacies: Option<usize>,
    pub posts: Option<usize>,
    pub reference_date: Option<NaiveDate>,
}

impl SeedQuery {
    pub fn counts(&self) -> SeedCounts {
        SeedCounts {
            buildings: self.buildings.unwrap_or(DEFAULT_BUILDINGS),
            pharmacies: self.pharmacies.unwrap_or(DEFAULT_PHARMACIES),
            posts: self.posts.unwrap_or(DEFAULT_POSTS),
        }
    }
}

/// Router serving seeded marketplace batches.
pub fn listings_router(config: ListingConfig) -> Router {
    Router::new()
        .route("/api/v1/listings/seed", get(seed_handler))
        .with_state(Arc::new(config))
}

pub(crate) async fn seed_handler(
    State(config): State<Arc<ListingConfig>>,
    Query(query): Query<SeedQuery>,
) -> Result<Json<SeedDataset>, ListingRequestError> {
    let counts = query.counts();
    counts.validate(config.max_batch)?;

    let seed = query.seed.unwrap_or(config.default_seed);
    let reference_date = query
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let dataset =
        ListingGenerator::new(seed, SeedConfig::for_date(reference_date)).generate(counts);

    info!(
        seed,
        buildings = counts.buildings,
        pharmacies = counts.pharmacies,
        posts = counts.posts,
        "seed batch served"
    );
    Ok(Json(dataset))
}

impl IntoResponse for ListingRequestError {
    fn into_response(self) -> Response {
        warn!(error = %self, "seed request rejected");
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn router() -> Router {
        listings_router(ListingConfig {
            default_seed: 42,
            max_batch: 100,
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).expect("build request"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let payload = serde_json::from_slice(&bytes).expect("json body");
        (status, payload)
    }

    #[tokio::test]
    async fn seed_route_uses_defaults() {
        let (status, payload) = get_json("/api/v1/listings/seed?reference_date=2025-03-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["seed"], 42);
        assert_eq!(payload["reference_date"], "2025-03-01");
        assert_eq!(
            payload["buildings"].as_array().map(Vec::len),
            Some(DEFAULT_BUILDINGS)
        );
        assert_eq!(
            payload["pharmacies"].as_array().map(Vec::len),
            Some(DEFAULT_PHARMACIES)
        );
        assert_eq!(payload["posts"].as_array().map(Vec::len), Some(DEFAULT_POSTS));
    }

    #[tokio::test]
    async fn seed_route_is_reproducible() {
        let uri = concat!(
            "/api/v1/listings/seed",
            "?seed=7&buildings=5&pharmacies=0&posts=3&reference_date=2025-01-15"
        );
        let (_, first) = get_json(uri).await;
        let (_, second) = get_json(uri).await;

        assert_eq!(first, second);
        assert_eq!(first["buildings"][0]["id"], "bld-000001");
        assert_eq!(first["pharmacies"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn seed_route_rejects_oversized_batches() {
        let (status, payload) = get_json("/api/v1/listings/seed?posts=101").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = payload["error"].as_str().expect("error message");
        assert!(message.contains("101 posts"), "{message}");
    }
}
