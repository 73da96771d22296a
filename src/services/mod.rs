// src/services/mod.rs

pub mod feedback;
pub mod types;

pub use feedback::FeedbackService;
pub use types::{FeedbackRequest, ImprovedFeedback, LengthGuideline};

/// Error taxonomy for the feedback improvement flow.
/// Configuration failures are startup-time only; everything that goes wrong
/// during a request is either a validation problem or a provider problem.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ExternalService(String),
}
