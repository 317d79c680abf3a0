//! The `describe-image` tool.

use crate::tools::{McpTool, ToolOutput};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use pictor_core::DescriptionResult;
use pictor_media::ReferenceResolver;
use pictor_models::{ChatCompletion, DescriptionRequester};
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// Resolves an image reference and asks the model to describe it.
pub struct DescribeImageTool<C> {
    resolver: ReferenceResolver,
    requester: DescriptionRequester<C>,
}

impl<C: ChatCompletion> DescribeImageTool<C> {
    /// Create the tool from its two collaborators.
    pub fn new(resolver: ReferenceResolver, requester: DescriptionRequester<C>) -> Self {
        Self {
            resolver,
            requester,
        }
    }

    /// Resolve `image_url` and describe it with the default model.
    ///
    /// A read failure short-circuits before any network call.
    #[instrument(skip(self))]
    pub async fn describe(&self, image_url: &str) -> DescriptionResult {
        match self.resolver.resolve(image_url).await {
            Ok(reference) => self.requester.describe_with_default(reference).await,
            Err(e) => DescriptionResult::from(&e),
        }
    }
}

#[async_trait]
impl<C: ChatCompletion + 'static> McpTool for DescribeImageTool<C> {
    fn name(&self) -> &str {
        "describe-image"
    }

    fn title(&self) -> &str {
        "Describe Image"
    }

    fn description(&self) -> &str {
        "Describe an image by URL"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "imageUrl": {
                    "type": "string",
                    "description": "The image URL or local file path to describe"
                }
            },
            "required": ["imageUrl"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<ToolOutput> {
        debug!(input = ?input, "Describe image tool called");

        let image_url = input
            .get("imageUrl")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::InvalidInput("Missing 'imageUrl' field".to_string()))?;

        Ok(self.describe(image_url).await.into())
    }
}
