//! Blocking client for OpenAI-compatible `/chat/completions` endpoints.

use crate::config::LlmConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::TextGenerator;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(cfg: &LlmConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", cfg.base_url.trim_end_matches('/')),
            model: cfg.model.clone(),
            api_key: cfg.api_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }
}

impl TextGenerator for OpenAiClient {
    fn complete(&self, prompt: &str, temperature: f32) -> AppResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Translation("OPENAI_API_KEY not set".into()))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
            temperature,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "chat completion request");

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            let snippet: String = text.chars().take(200).collect();
            warn!(%status, "chat completion failed");
            return Err(AppError::Translation(format!("HTTP {}: {}", status, snippet)));
        }

        let data: ChatResponse = resp.json()?;
        data.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::Translation("service returned no choices".into()))
    }
}
