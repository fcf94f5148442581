//! HTTP handlers for SiteTrust API

use axum::{extract::State, Json};
use std::sync::Arc;

use risk_engine::TextGenerator;
use shared_types::{ScanReport, ScanRequest};

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Run the full risk pipeline for one page.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanReport>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(ApiError::InvalidRequest("url is required".to_string()));
    }

    let report = state.engine.scan(&request).await;

    tracing::info!(
        url = %request.url,
        score = report.risk_score,
        verdict = %report.verdict,
        "scan complete"
    );

    Ok(Json(report))
}

/// Answer a user question, grounded in a fresh scan when a URL is supplied.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::InvalidRequest("message is required".to_string()));
    }

    let prompt = match request.url.as_deref() {
        Some(url) if !url.trim().is_empty() => {
            let scan_request = ScanRequest {
                url: url.to_string(),
                page_text: request.page_text.clone().unwrap_or_default(),
            };
            let report = state.engine.scan(&scan_request).await;
            let report_json =
                serde_json::to_string_pretty(&report).map_err(|e| ApiError::Internal(e.into()))?;

            format!(
                "WEBSITE SECURITY SCAN DATA:\n{}\n\nUSER QUESTION:\n{}\n\nAnswer based on the website scan above.",
                report_json, request.message
            )
        }
        _ => request.message.clone(),
    };

    let reply = state
        .generator
        .generate(&prompt)
        .await
        .map_err(ApiError::Upstream)?;

    Ok(Json(ChatResponse { reply }))
}
