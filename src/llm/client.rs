//! OpenAI-compatible chat completion client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ClientConfig, Config};
use crate::error::CompletionError;

/// Maximum length of an API error body carried into error messages.
const MAX_ERROR_CONTENT_LEN: usize = 200;

/// A service that turns a prompt into a short text completion.
///
/// This abstraction allows mocking the remote API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `prompt` and return the trimmed completion text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat completions over HTTP.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    organization: Option<String>,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(client: &ClientConfig, config: &Config) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(client.timeout)
            .build()
            .map_err(CompletionError::ClientBuild)?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", client.base_url.trim_end_matches('/')),
            api_key: client.api_key.clone(),
            organization: client.organization.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let mut request = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body);
        if let Some(org) = &self.organization {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request.send().await.map_err(CompletionError::Request)?;
        let status = response.status();
        let text = response.text().await.map_err(CompletionError::Request)?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        parse_completion(&text)
    }
}

/// Pull the completion text out of a chat completions response body.
fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::EmptyResponse)?;

    debug!("Completion returned {} chars", content.chars().count());
    Ok(content.trim().to_string())
}

/// The API's own error message if the body carries one, else the raw body.
fn api_error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        return parsed.error.message;
    }
    body.chars().take(MAX_ERROR_CONTENT_LEN).collect()
}
