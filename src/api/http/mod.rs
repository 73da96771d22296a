// src/api/http/mod.rs

mod feedback;
mod handlers;
mod router;

pub use feedback::improve_feedback_handler;
pub use handlers::health_handler;
pub use router::http_router;
