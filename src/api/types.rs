// src/api/types.rs

use chrono::Utc;
use serde::Serialize;

use crate::services::ImprovedFeedback;

/// Wire envelope for the improve-feedback endpoint. Failures use the same
/// shape via `ApiError`, with `error` populated instead of `data`.
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ImprovedFeedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: String,
}

impl FeedbackResponse {
    pub fn success(data: ImprovedFeedback) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error_field() {
        let response = FeedbackResponse::success(ImprovedFeedback {
            comment: "Great work.".to_string(),
            word_count: 2,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["comment"], "Great work.");
        assert_eq!(json["data"]["word_count"], 2);
        assert!(json.get("error").is_none());
        assert!(json["generated_at"].is_string());
    }
}
