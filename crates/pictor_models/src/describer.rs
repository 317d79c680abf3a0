//! Description Requester: one image in, one [`DescriptionResult`] out.

use crate::{ChatCompletion, ChatCompletionRequest, DescriberConfig, OpenAiClient};
use pictor_core::{DescriptionRequest, DescriptionResult, ImageReference, NO_DESCRIPTION_FALLBACK};
use pictor_error::{ConfigError, RequestError, RequestErrorKind};
use tracing::instrument;

/// Sends single-turn describe requests through a [`ChatCompletion`] backend.
///
/// Holds no per-call state; a shared reference can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct DescriptionRequester<C> {
    client: C,
    default_model: String,
}

impl DescriptionRequester<OpenAiClient> {
    /// Create a requester backed by the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &DescriberConfig) -> Result<Self, ConfigError> {
        let client = OpenAiClient::new(config)?;
        Ok(Self::new(client, config.model().clone()))
    }
}

impl<C: ChatCompletion> DescriptionRequester<C> {
    /// Create a requester around any chat completion backend.
    pub fn new(client: C, default_model: impl Into<String>) -> Self {
        Self {
            client,
            default_model: default_model.into(),
        }
    }

    /// Model used by [`DescriptionRequester::describe_with_default`].
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Describe the image with the configured default model.
    pub async fn describe_with_default(&self, reference: ImageReference) -> DescriptionResult {
        let model = self.default_model.clone();
        self.describe(reference, &model).await
    }

    /// Describe the image with `model`.
    ///
    /// Never fails: every error becomes [`DescriptionResult::Failed`] with an
    /// `"Error calling AI: "` prefix.
    #[instrument(skip(self, reference), fields(inline = reference.is_inline()))]
    pub async fn describe(&self, reference: ImageReference, model: &str) -> DescriptionResult {
        match self.request_description(reference, model).await {
            Ok(text) => {
                tracing::info!(chars = text.len(), "Image described");
                DescriptionResult::described(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Description request failed");
                DescriptionResult::from(&e)
            }
        }
    }

    async fn request_description(
        &self,
        reference: ImageReference,
        model: &str,
    ) -> Result<String, RequestError> {
        let request = DescriptionRequest::builder()
            .model(model)
            .reference(reference)
            .build()
            .map_err(|e| RequestError::new(RequestErrorKind::Serialization(e.to_string())))?;

        let chat_request = ChatCompletionRequest::from(&request);
        tracing::debug!(detail = %request.detail_level(), "Built multimodal chat request");

        let response = self.client.chat_completion(&chat_request).await?;

        if response.choices.is_empty() {
            return Err(RequestError::new(RequestErrorKind::UnexpectedResponse(
                "response contained no choices".to_string(),
            )));
        }

        Ok(response
            .first_text()
            .unwrap_or(NO_DESCRIPTION_FALLBACK)
            .to_string())
    }
}
