// src/prompt/mod.rs
// Prompt construction for the feedback improvement flow

pub mod builder;

pub use builder::{SYSTEM_PROMPT, build_prompt};
