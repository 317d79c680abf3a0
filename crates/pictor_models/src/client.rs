use crate::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, DescriberConfig};
use async_trait::async_trait;
use pictor_error::{ConfigError, RequestError, RequestErrorKind};
use tracing::instrument;

/// A remote chat completion API.
///
/// Implementations must be safe to call concurrently; each call is an
/// independent round trip.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Submit one chat completion request.
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, RequestError>;
}

/// HTTP client for OpenAI-compatible chat completion endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client from the shared configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: &DescriberConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!("Creating OpenAI-compatible client");
        Ok(Self {
            endpoint: config.chat_completions_url(),
            api_key: config.api_key().clone(),
            client,
        })
    }

    /// Chat completions URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Formats a non-success response the way the upstream SDK reports it:
/// `"<status> <message>"`, using the JSON error message when present.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    let code = status.as_u16();
    if body.trim().is_empty() {
        return format!("{} status code (no body)", code);
    }

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!("{} {}", code, parsed.error.message),
        Err(_) => format!("{} {}", code, body.trim()),
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %request.model, endpoint = %self.endpoint))]
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, RequestError> {
        tracing::debug!("Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                RequestError::new(RequestErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(status, &body);
            tracing::error!(status = status.as_u16(), "API returned error: {}", message);
            return Err(RequestError::new(RequestErrorKind::Api(message)));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            RequestError::new(RequestErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}
