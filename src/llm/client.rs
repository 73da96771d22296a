// src/llm/client.rs

//! Low-level OpenAI chat completions client. No SDK wrappers; just reqwest.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::config::AppConfig;

/// Seam between the feedback service and the completion provider, so tests
/// can substitute a scripted client for the real one.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one chat-style completion request and returns the first
    /// completion's text, trimmed. No retries.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

impl OpenAIClient {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .context("OPENAI_API_KEY not set")?;

        // The completion call is the only long-latency operation in a
        // request, so the timeout lives on this client.
        let client = Client::builder()
            .timeout(Duration::from_secs(config.openai_timeout))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            api_base: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_output_tokens,
            temperature: config.temperature,
        })
    }

    fn auth_header(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.api_key))
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature
        });

        let (header_name, header_value) = self.auth_header();
        let resp = self
            .client
            .post(&url)
            .header(header_name, header_value)
            .json(&body)
            .send()
            .await
            .context("Failed to reach completion API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Completion API error {}: {}", status, error_text));
        }

        let resp_json: Value = resp
            .json()
            .await
            .context("Failed to parse completion response")?;

        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("No completion content in response"))?;

        Ok(content.trim().to_string())
    }
}
