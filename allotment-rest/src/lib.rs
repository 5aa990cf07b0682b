//! HTTP/JSON binding for the allotment engine.
//!
//! The engine is a pure function of the request body, so the service layer
//! is a single POST route plus CORS and request tracing. Every validation
//! failure, whether a body-level rejection or an engine error, maps to a
//! 400 with the same `{"status": "error", "message": ...}` shape.

use allotment_core::engine;
use allotment_core::model::{AllotmentRequest, SeatingPlan};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize)]
struct ApiSuccess {
    status: &'static str,
    #[serde(flatten)]
    plan: SeatingPlan,
}

#[derive(Debug, Serialize)]
struct ApiError {
    status: &'static str,
    message: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/generate-allotment", post(generate_allotment))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn generate_allotment(
    payload: Result<Json<AllotmentRequest>, JsonRejection>,
) -> Result<Json<ApiSuccess>, (StatusCode, Json<ApiError>)> {
    let Json(request) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;
    let plan = engine::generate_allotment(&request).map_err(|err| {
        tracing::debug!(error = %err, "rejected allotment request");
        bad_request(err.to_string())
    })?;
    Ok(Json(ApiSuccess {
        status: "success",
        plan,
    }))
}

fn bad_request(message: String) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            status: "error",
            message,
        }),
    )
}
