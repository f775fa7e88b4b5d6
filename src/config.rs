//! Runtime configuration for commit message generation.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default character budget per diff block.
pub const DEFAULT_PROMPT_CUTOFF: i64 = 10_000;

/// Default response token limit per request.
pub const DEFAULT_MAX_TOKENS: u32 = 128;

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default timeout for a single completion request.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable to override the default request timeout.
pub const TIMEOUT_ENV_VAR: &str = "GHOSTWRITER_TIMEOUT";

/// What to ask the completion service for. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model: String,
    /// Character budget per diff block; prompts are cut at this plus a
    /// small overrun allowance.
    pub prompt_cutoff: i64,
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt_cutoff: DEFAULT_PROMPT_CUTOFF,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Connection settings for the completion client.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub organization: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Settings for `api_key` with the default endpoint and the configured timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            organization: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: get_timeout(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("organization", &self.organization)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Per-request timeout used by [`ClientConfig::new`].
///
/// `GHOSTWRITER_TIMEOUT` holds whole seconds. Unset or blank means the
/// 60 second default; zero or anything unparsable is reported and ignored.
pub fn get_timeout() -> Duration {
    let secs = env::var(TIMEOUT_ENV_VAR)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Some(secs),
            _ => {
                warn!(
                    "Ignoring {}={:?}, expected a positive number of seconds",
                    TIMEOUT_ENV_VAR, raw
                );
                None
            }
        })
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Duration::from_secs(secs)
}
