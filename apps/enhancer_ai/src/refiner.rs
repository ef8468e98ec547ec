//! Chat-completion client used to rewrite prompts.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const MODEL: &str = "gpt-4o";

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("invalid API key")]
    InvalidCredential,
    #[error("request to completion provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion provider returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("completion provider returned no message content")]
    EmptyCompletion,
}

/// Given an instruction, the user's text and a caller-supplied key, return
/// the rewritten text.
#[async_trait]
pub trait PromptRefiner: Send + Sync {
    async fn refine(
        &self,
        instruction: &str,
        prompt: &str,
        api_key: &str,
    ) -> Result<String, RefineError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Clone)]
pub struct OpenAiRefiner {
    client: Client,
    base_url: String,
}

impl OpenAiRefiner {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for OpenAiRefiner {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PromptRefiner for OpenAiRefiner {
    async fn refine(
        &self,
        instruction: &str,
        prompt: &str,
        api_key: &str,
    ) -> Result<String, RefineError> {
        let body = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage { role: "system", content: instruction },
                ChatMessage { role: "user", content: prompt },
            ],
        };

        trace!(model = MODEL, "requesting chat completion");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(RefineError::InvalidCredential);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, "completion provider returned non-success status");
            return Err(RefineError::Upstream { status: status.as_u16(), body });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .ok_or(RefineError::EmptyCompletion)
    }
}
