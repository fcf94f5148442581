//! OpenAI-compatible chat-completions wiring for the engine's
//! [`TextGenerator`] seam.

use async_trait::async_trait;
use risk_engine::TextGenerator;
use serde::{Deserialize, Serialize};

/// Cap on prompt size before it leaves the process.
const MAX_PROMPT_CHARS: usize = 50_000;

#[derive(Clone)]
pub struct ChatCompletionClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(client: reqwest::Client, endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
        }
    }

    /// Collapse whitespace runs and cap length.
    fn sanitize(text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        collapsed.chars().take(MAX_PROMPT_CHARS).collect()
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionClient {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let prompt = Self::sanitize(prompt);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: ChatCompletionResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("completion response had no content"))?;

        Ok(content)
    }
}
