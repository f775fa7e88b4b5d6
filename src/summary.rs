//! Commit title generation: per-block summaries fanned out, then one title.

use futures::future::join_all;
use tracing::debug;

use crate::config::Config;
use crate::diff::{assemble, parse, truncate_chars};
use crate::error::SummaryError;
use crate::llm::CompletionService;

/// Instruction placed before each diff block.
pub const SUMMARY_PROMPT: &str = "Summarize the following code changes briefly";

/// Instruction placed before the joined block summaries.
pub const TITLE_PROMPT: &str = "In less than 50 characters, summarize a commit message about all of the following summaries.";

/// Returned when the working tree has no pending diff.
pub const EMPTY_DIFF_MESSAGE: &str = "Fix whitespace";

/// Returned when the diff produced no blocks to summarize.
pub const NO_CHANGES_MESSAGE: &str = "No changes";

/// Characters a prompt may run past the block cutoff before being cut.
const PROMPT_OVERRUN: i64 = 100;

/// Writes commit titles from diffs using a completion service.
pub struct Ghostwriter<C> {
    client: C,
    config: Config,
}

impl<C: CompletionService> Ghostwriter<C> {
    pub fn new(client: C, config: Config) -> Self {
        Self { client, config }
    }

    /// Generate a one-line commit title for `diff`.
    ///
    /// Every block is summarized concurrently and all requests are awaited
    /// before the title request. If any block failed, the first failure in
    /// block order is returned.
    pub async fn generate_commit_message(&self, diff: &str) -> Result<String, SummaryError> {
        if diff.is_empty() {
            return Ok(EMPTY_DIFF_MESSAGE.to_string());
        }

        let blocks = assemble(&parse(diff), self.config.prompt_cutoff)?;
        if blocks.is_empty() {
            return Ok(NO_CHANGES_MESSAGE.to_string());
        }

        debug!("Summarizing {} diff blocks", blocks.len());

        let results = join_all(blocks.iter().map(|block| self.summarize(block))).await;
        let summaries = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        self.create_title(&summaries.join("\n")).await
    }

    async fn summarize(&self, block: &str) -> Result<String, SummaryError> {
        self.fetch(&format!("{SUMMARY_PROMPT}\n\n{block}\n\n")).await
    }

    async fn create_title(&self, summaries: &str) -> Result<String, SummaryError> {
        self.fetch(&format!("{TITLE_PROMPT}\n\n{summaries}\n\n")).await
    }

    async fn fetch(&self, prompt: &str) -> Result<String, SummaryError> {
        let limit = usize::try_from(self.config.prompt_cutoff.saturating_add(PROMPT_OVERRUN))
            .unwrap_or(0);
        let prompt = truncate_chars(prompt, limit);
        debug!("Prompt length: {} chars", prompt.chars().count());

        Ok(self.client.complete(prompt).await?)
    }
}
