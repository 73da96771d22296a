// src/services/types.rs
// Request/response types for the feedback improvement service.

use serde::{Deserialize, Serialize};

use super::FeedbackError;

/// One feedback improvement request. Optional fields that arrive empty are
/// treated as absent; `tone` and `length` fall back to their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub original_feedback: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub custom_prompt: Option<String>,
    #[serde(default)]
    pub focus_areas: Option<Vec<String>>,
}

/// Target length for the improved comment, resolved from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthGuideline {
    Short,
    Medium,
    Long,
}

impl LengthGuideline {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    pub fn guideline(&self) -> &'static str {
        match self {
            Self::Short => "1-2 sentences",
            Self::Medium => "3-4 sentences",
            Self::Long => "5+ sentences",
        }
    }
}

impl FeedbackRequest {
    /// Boundary validation: field shapes only, no semantic checks.
    pub fn validate(&self) -> Result<(), FeedbackError> {
        let feedback_chars = self.original_feedback.chars().count();
        if feedback_chars == 0 || feedback_chars > 1000 {
            return Err(FeedbackError::Validation(
                "original_feedback must be between 1 and 1000 characters".to_string(),
            ));
        }

        if let Some(tone) = &self.tone {
            if tone.chars().count() > 50 {
                return Err(FeedbackError::Validation(
                    "tone must be at most 50 characters".to_string(),
                ));
            }
        }

        if let Some(length) = &self.length {
            if LengthGuideline::parse(length).is_none() {
                return Err(FeedbackError::Validation(
                    "length must be one of: short, medium, long".to_string(),
                ));
            }
        }

        if let Some(custom) = &self.custom_prompt {
            if custom.chars().count() > 500 {
                return Err(FeedbackError::Validation(
                    "custom_prompt must be at most 500 characters".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Tone directive, defaulting to "encouraging".
    pub fn tone(&self) -> &str {
        self.tone
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("encouraging")
    }

    /// Length directive, defaulting to short. Unknown values only survive to
    /// this point when validation was skipped, and fall back to the default.
    pub fn length(&self) -> LengthGuideline {
        self.length
            .as_deref()
            .and_then(LengthGuideline::parse)
            .unwrap_or(LengthGuideline::Short)
    }

    /// Custom instruction, if present and non-empty.
    pub fn custom_prompt(&self) -> Option<&str> {
        self.custom_prompt
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// The rewritten comment. `word_count` is always recomputed from `comment`,
/// never taken from the model's own report.
#[derive(Debug, Clone, Serialize)]
pub struct ImprovedFeedback {
    pub comment: String,
    pub word_count: usize,
}
