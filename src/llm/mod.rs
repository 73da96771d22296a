// src/llm/mod.rs

pub mod client;

pub use client::{CompletionClient, OpenAIClient};
