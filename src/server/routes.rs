//! Leaderboard HTTP handlers
//!
//! `GET /ranking?difficulty=` and `POST /ranking`. Bad input is a 400 with
//! `{"error": ...}`; anything else is a generic 500.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::consts::DISPLAY_TOP;
use crate::difficulty::Difficulty;
use crate::error::Error;
use crate::ranking::{ErrorBody, RankedEntry, SubmitRequest, SubmitResponse};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidArgument(msg) => {
                log::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response()
            }
            Error::Unexpected(msg) => {
                log::error!("Request failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub difficulty: Option<String>,
}

/// `GET /ranking?difficulty=low|medium|high`
pub async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<RankedEntry>>, Error> {
    let difficulty: Difficulty = query
        .difficulty
        .as_deref()
        .ok_or_else(|| Error::invalid("missing difficulty"))?
        .parse()?;
    let ranking = state.store.top_n(difficulty, DISPLAY_TOP)?;
    Ok(Json(ranking))
}

/// `POST /ranking` with `{username, difficulty, score}`
pub async fn post_ranking(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, Error> {
    let req: SubmitRequest = serde_json::from_slice(&body)
        .map_err(|e| Error::invalid(format!("malformed submission: {e}")))?;
    let (_, ranking) = state.store.submit_request(&req)?;
    Ok(Json(SubmitResponse::saved(ranking)))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::ranking::RankingStore;
    use crate::server::{AppState, router};

    fn create_app() -> Router {
        router(AppState::new(RankingStore::new()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ranking")
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_empty_ranking() {
        let response = create_app()
            .oneshot(get("/ranking?difficulty=low"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_get_bad_difficulty() {
        let app = create_app();
        let response = app
            .clone()
            .oneshot(get("/ranking?difficulty=bogus"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("bogus"));

        let response = app.oneshot(get("/ranking")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_post_then_get() {
        let app = create_app();
        for score in [50, 80, 30, 95, 10] {
            let response = app
                .clone()
                .oneshot(post(&format!(
                    r#"{{"username":"ace","difficulty":"medium","score":{score}}}"#
                )))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["status"], "saved");
        }

        let response = app
            .oneshot(get("/ranking?difficulty=medium"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let rows = json.as_array().unwrap();
        let ranks: Vec<(u64, i64)> = rows
            .iter()
            .map(|r| (r["rank"].as_u64().unwrap(), r["score"].as_i64().unwrap()))
            .collect();
        assert_eq!(ranks, vec![(1, 95), (2, 80), (3, 50), (4, 30), (5, 10)]);
        assert_eq!(rows[0]["username"], "ace");
        assert!(rows[0]["timestamp"].is_i64());
    }

    #[tokio::test]
    async fn test_post_returns_top_ten() {
        let app = create_app();
        let mut last = serde_json::Value::Null;
        for score in 1..=12 {
            let response = app
                .clone()
                .oneshot(post(&format!(
                    r#"{{"username":"p","difficulty":"high","score":{score}}}"#
                )))
                .await
                .unwrap();
            last = body_json(response).await;
        }
        let ranking = last["ranking"].as_array().unwrap();
        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking[0]["score"], 12);
        assert_eq!(ranking[9]["rank"], 10);
    }

    #[tokio::test]
    async fn test_post_rejects_bad_bodies() {
        let app = create_app();
        for body in [
            r#"{"username":"a","difficulty":"easy","score":"x"}"#,
            r#"{"username":"a","difficulty":"medium","score":"x"}"#,
            r#"{"username":"a","difficulty":"bogus","score":1}"#,
            r#"{"username":"","difficulty":"low","score":1}"#,
            r#"{"difficulty":"low","score":1}"#,
            r#"{"username":"a","score":1}"#,
            r#"{"username":"a","difficulty":"low"}"#,
            r#"{"username":7,"difficulty":"low","score":1}"#,
            r#"{"username":"a","difficulty":"low","score":1.5}"#,
            "not json",
        ] {
            let response = app.clone().oneshot(post(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        }

        // Nothing was stored
        let response = app.oneshot(get("/ranking?difficulty=low")).await.unwrap();
        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_unexpected_maps_to_500() {
        use axum::response::IntoResponse;
        let response = crate::Error::unexpected("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
