// src/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::FeedbackService;

/// Shared, read-only application state. Built once in main() and cloned into
/// handlers; there is no mutable cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub feedback_service: Arc<FeedbackService>,
}
