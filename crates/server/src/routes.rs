//! Request handlers for the triage API.

use std::collections::HashMap;

use axum::Json;
use serde::{Deserialize, Serialize};

use exosift_engine::summary::summarize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub file_path: String,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub file_path: String,
    pub total_rows: usize,
    pub class_counts: HashMap<String, usize>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /run` — execute the triage pipeline over the catalog at
/// `file_path` and return its class distribution.
pub async fn run(Json(req): Json<RunRequest>) -> Result<Json<RunResponse>, ApiError> {
    let path = req.file_path.clone();

    // Synchronous file read + batch row loop; keep it on the blocking pool.
    let catalog = tokio::task::spawn_blocking(move || exosift_io::run_pipeline(&path))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let summary = summarize(&catalog);
    tracing::info!(
        file = %req.file_path,
        rows = summary.total_rows,
        "pipeline run complete"
    );

    Ok(Json(RunResponse {
        file_path: req.file_path,
        total_rows: summary.total_rows,
        class_counts: summary.class_counts,
    }))
}
