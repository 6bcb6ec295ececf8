//! Preview Routes
//!
//! - GET /health/live - Liveness probe
//! - GET /health - Status with bundle check
//! - GET /content.json - Full content snapshot
//! - GET /api/v1/charts/:id - One chart spec
//! - GET /api/v1/topics/:key - One topic with parsed sessions

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::error::PreviewResult;
use super::state::PreviewState;
use crate::charts::{ChartId, ChartSpec};
use crate::content::{ContentSnapshot, TopicKey, TopicRecord};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when the UI bundle is present, else `degraded`
    pub status: String,
    pub dist_ready: bool,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn health(State(state): State<Arc<PreviewState>>) -> Json<HealthResponse> {
    let dist_ready = state.dist_ready();
    Json(HealthResponse {
        status: if dist_ready { "healthy" } else { "degraded" }.to_string(),
        dist_ready,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /content.json
pub async fn content(State(state): State<Arc<PreviewState>>) -> Json<ContentSnapshot> {
    Json(state.snapshot.as_ref().clone())
}

/// GET /api/v1/charts/:id
pub async fn chart(Path(id): Path<String>) -> PreviewResult<Json<ChartSpec>> {
    let id: ChartId = id.parse()?;
    Ok(Json(ChartSpec::for_chart(id)?))
}

/// GET /api/v1/topics/:key
pub async fn topic(Path(key): Path<String>) -> PreviewResult<Json<TopicRecord>> {
    let key: TopicKey = key.parse()?;
    Ok(Json(TopicRecord::for_key(key)?))
}
