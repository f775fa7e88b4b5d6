//! Error types for ghostwriter modules using thiserror.

use thiserror::Error;

/// Errors from diff chunking.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChunkError {
    #[error("Invalid prompt cutoff {cutoff}: the character budget per block must be positive")]
    InvalidConfiguration { cutoff: i64 },
}

/// Errors from reading the working tree diff.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to collect diff: {0}")]
    DiffFailed(#[source] git2::Error),
}

/// Errors from the completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Completion request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Completion API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Completion API returned no content")]
    EmptyResponse,

    #[error("Completion API returned an unreadable response: {0}")]
    InvalidResponse(String),
}

/// Errors from commit message generation.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(transparent)]
    Chunk(#[from] ChunkError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}
