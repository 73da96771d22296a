// src/api/http/feedback.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::FeedbackResponse;
use crate::services::FeedbackRequest;
use crate::state::AppState;

/// Improve existing feedback using the completion model.
pub async fn improve_feedback_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<FeedbackRequest>,
) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        request.validate().map_err(ApiError::from)?;

        info!("Improving feedback: {:.50}...", request.original_feedback);

        let improved = app_state
            .feedback_service
            .improve(&request)
            .await
            .map_err(ApiError::from)?;

        Ok(Json(FeedbackResponse::success(improved)))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(err) => {
            error!("Error improving feedback: {}", err.message);
            err.into_response()
        }
    }
}
