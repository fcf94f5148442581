//! Application state for SiteTrust API

use std::time::Duration;

use anyhow::Result;
use risk_engine::{EngineConfig, RiskEngine};

use crate::generator::ChatCompletionClient;

pub struct AppState {
    pub engine: RiskEngine<ChatCompletionClient>,
    pub generator: ChatCompletionClient,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = EngineConfig {
            phishtank_url: env_or("PHISHTANK_URL", "https://checkurl.phishtank.com/checkurl/"),
            rdap_url: env_or("RDAP_URL", "https://rdap.org"),
            request_timeout: Duration::from_secs(10),
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let generator = ChatCompletionClient::new(
            client,
            env_or(
                "AI_API_URL",
                "https://api.groq.com/openai/v1/chat/completions",
            ),
            std::env::var("AI_API_KEY").unwrap_or_default(),
            env_or("AI_MODEL", "llama-3.3-70b-versatile"),
        );

        tracing::info!("Risk engine configured");

        let engine = RiskEngine::new(config, generator.clone())?;
        Ok(Self { engine, generator })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
