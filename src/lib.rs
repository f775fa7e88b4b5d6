//! ghostwriter - A CLI tool that writes commit message titles from uncommitted changes.
//!
//! # Overview
//!
//! ghostwriter reads the diff between HEAD and the working tree, cuts it into
//! character-bounded blocks, asks a chat completion service to summarize each
//! block, and condenses those summaries into one short commit title.

pub mod config;
pub mod diff;
pub mod error;
pub mod llm;
pub mod summary;

// Re-export commonly used types
pub use config::{ClientConfig, Config};
pub use diff::{FileDiffUnit, assemble, parse};
pub use error::{ChunkError, CompletionError, DiffError, SummaryError};
pub use llm::{CompletionService, OpenAiClient};
pub use summary::Ghostwriter;
