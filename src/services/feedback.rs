// src/services/feedback.rs

use std::sync::Arc;

use tracing::{error, info};

use super::FeedbackError;
use super::types::{FeedbackRequest, ImprovedFeedback};
use crate::config::AppConfig;
use crate::llm::{CompletionClient, OpenAIClient};
use crate::prompt;

/// Orchestrates prompt construction, the completion call, and post-processing.
/// Stateless across requests; safe to share behind an Arc.
pub struct FeedbackService {
    client: Arc<dyn CompletionClient>,
}

impl FeedbackService {
    /// Fails fast when the provider credential is missing. This is a
    /// startup-time check; it never runs per request.
    pub fn new(config: &AppConfig) -> Result<Self, FeedbackError> {
        if config
            .openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .is_none()
        {
            return Err(FeedbackError::Configuration(
                "OpenAI API key is required. Please set OPENAI_API_KEY in your .env file."
                    .to_string(),
            ));
        }

        let client = OpenAIClient::from_config(config)
            .map_err(|e| FeedbackError::Configuration(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Constructs the service around an existing completion client.
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// One stateless transformation: build the prompt, call the model, trim,
    /// and recompute the word count from the returned text.
    pub async fn improve(
        &self,
        request: &FeedbackRequest,
    ) -> Result<ImprovedFeedback, FeedbackError> {
        let user_prompt = prompt::build_prompt(request);

        let completion = self
            .client
            .complete(prompt::SYSTEM_PROMPT, &user_prompt)
            .await
            .map_err(|e| {
                error!("Error improving feedback: {e:#}");
                FeedbackError::ExternalService(e.to_string())
            })?;

        let comment = completion.trim().to_string();
        let word_count = comment.split_whitespace().count();

        info!(word_count, "Improved feedback generated");

        Ok(ImprovedFeedback {
            comment,
            word_count,
        })
    }
}
