//! Completion service access.

pub mod client;

pub use client::{CompletionService, OpenAiClient};
