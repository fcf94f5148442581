//! Request/response models for SiteTrust API
//!
//! The scan endpoint reuses [`shared_types::ScanRequest`] and
//! [`shared_types::ScanReport`] directly.

use serde::{Deserialize, Serialize};

/// Chat request, optionally grounded in a fresh page scan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub page_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
