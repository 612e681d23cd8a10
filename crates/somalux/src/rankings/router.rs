use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use super::catalog::{Domain, DomainDescriptor, RankingError, RankingReport, RankingRequest};
use super::row::ScoreBreakdown;
use crate::config::RankingConfig;
use crate::error::AppError;

/// Body of a ranking call: the rows plus the dashboard's search and sort state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RankRequestBody {
    pub records: Option<Vec<Value>>,
    pub search_term: Option<String>,
    pub filter_metric: Option<String>,
    pub limit: Option<usize>,
}

impl RankRequestBody {
    fn into_parts(
        self,
        config: &RankingConfig,
    ) -> Result<(Vec<Value>, RankingRequest), RankingError> {
        if self.limit == Some(0) {
            return Err(RankingError::InvalidLimit);
        }

        let records = self.records.unwrap_or_default();
        if records.len() > config.max_records {
            return Err(RankingError::TooManyRecords {
                count: records.len(),
                max: config.max_records,
            });
        }

        let defaults = RankingRequest::default();
        let request = RankingRequest {
            search_term: self.search_term.unwrap_or(defaults.search_term),
            filter_metric: self.filter_metric.unwrap_or(defaults.filter_metric),
            limit: self.limit.or(config.default_limit),
        };
        Ok((records, request))
    }
}

/// Router exposing the domain catalog, ranking and score explanation endpoints.
pub fn ranking_router(config: RankingConfig) -> Router {
    Router::new()
        .route("/api/v1/rankings", get(catalog_handler))
        .route("/api/v1/rankings/:domain", post(rank_handler))
        .route("/api/v1/rankings/:domain/score", post(score_handler))
        .with_state(Arc::new(config))
}

pub(crate) async fn catalog_handler() -> Json<Vec<DomainDescriptor>> {
    Json(Domain::ALL.iter().map(|domain| domain.descriptor()).collect())
}

pub(crate) async fn rank_handler(
    State(config): State<Arc<RankingConfig>>,
    Path(domain): Path<String>,
    Json(body): Json<RankRequestBody>,
) -> Result<Json<RankingReport>, AppError> {
    let domain = domain.parse::<Domain>()?;
    let (records, request) = body.into_parts(&config)?;
    Ok(Json(domain.rank(records, &request)?))
}

pub(crate) async fn score_handler(
    Path(domain): Path<String>,
    Json(record): Json<Value>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let domain = domain.parse::<Domain>()?;
    Ok(Json(domain.score(record)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::json;
    use tower::ServiceExt;

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("body encodes")))
            .expect("request builds")
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn ranks_authors_by_score() {
        let router = ranking_router(RankingConfig::default());
        let body = json!({
            "records": [
                { "display_name": "Juma", "books_count": 1 },
                { "display_name": "Amina", "books_count": 3, "followers_count": 4 }
            ]
        });

        let response = router
            .oneshot(post_json("/api/v1/rankings/authors", body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload["metric"], "score");
        assert_eq!(payload["entries"][0]["label"], "Amina");
        assert_eq!(payload["entries"][0]["score"], 23);
        assert_eq!(payload["entries"][1]["position"], 2);
    }

    #[tokio::test]
    async fn missing_records_rank_as_empty() {
        let router = ranking_router(RankingConfig::default());
        let response = router
            .oneshot(post_json("/api/v1/rankings/books", json!({})))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload["entries"], json!([]));
        assert_eq!(payload["summary"]["total_records"], 0);
    }

    #[tokio::test]
    async fn applies_configured_default_limit() {
        let router = ranking_router(RankingConfig {
            default_limit: Some(1),
            ..RankingConfig::default()
        });
        let body = json!({
            "records": [{ "name": "Science" }, { "name": "History" }],
            "filter_metric": "books"
        });

        let response = router
            .oneshot(post_json("/api/v1/rankings/categories", body))
            .await
            .expect("router responds");
        let payload = read_json(response).await;
        assert_eq!(payload["entries"].as_array().map(Vec::len), Some(1));
        assert_eq!(payload["summary"]["matched_records"], 2);
    }

    #[tokio::test]
    async fn unknown_domain_is_not_found() {
        let router = ranking_router(RankingConfig::default());
        let response = router
            .oneshot(post_json("/api/v1/rankings/dragons", json!({ "records": [] })))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_batches_are_rejected() {
        let router = ranking_router(RankingConfig {
            default_limit: None,
            max_records: 1,
        });
        let body = json!({ "records": [{}, {}] });
        let response = router
            .oneshot(post_json("/api/v1/rankings/ads", body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn non_object_records_are_unprocessable() {
        let router = ranking_router(RankingConfig::default());
        let body = json!({ "records": ["not a row"] });
        let response = router
            .oneshot(post_json("/api/v1/rankings/goals", body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn score_endpoint_returns_breakdown() {
        let router = ranking_router(RankingConfig::default());
        let body = json!({ "impressions": 1000, "clicks": 50, "conversions": 2 });
        let response = router
            .oneshot(post_json("/api/v1/rankings/ads/score", body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload["score"], 75);
        assert_eq!(payload["components"][2]["field"], "ctr");
    }

    #[tokio::test]
    async fn catalog_lists_every_domain() {
        let Json(descriptors) = catalog_handler().await;
        assert_eq!(descriptors.len(), Domain::ALL.len());
        assert_eq!(descriptors[0].domain, "authors");
        assert_eq!(descriptors[0].metrics[0], "score");
    }

    #[tokio::test]
    async fn zero_limit_is_rejected() {
        let router = ranking_router(RankingConfig::default());
        let body = json!({ "records": [{ "display_name": "Kito" }], "limit": 0 });
        let response = router
            .oneshot(post_json("/api/v1/rankings/engagement", body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = read_json(response).await;
        assert_eq!(payload["error"], "ranking error: limit must be at least 1");
    }

    #[tokio::test]
    async fn errors_use_the_shared_json_body() {
        let router = ranking_router(RankingConfig::default());
        let response = router
            .oneshot(post_json("/api/v1/rankings/dragons/score", json!({})))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload = read_json(response).await;
        assert_eq!(
            payload["error"],
            "ranking error: unknown ranking domain 'dragons'"
        );
    }
}
