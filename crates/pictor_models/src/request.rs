use pictor_core::{DescriptionRequest, DetailLevel};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

/// A message whose content is a list of typed parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Ordered content parts
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

/// One part of a multimodal message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
    /// Image addressed by URL (remote or data URI)
    ImageUrl {
        /// Image location and detail hint
        image_url: ImageUrl,
    },
}

impl ContentPart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image part
    pub fn image_url(url: impl Into<String>, detail: DetailLevel) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail,
            },
        }
    }
}

/// Image location inside an image part
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageUrl {
    /// HTTP(S) URL or `data:` URI
    pub url: String,
    /// Resolution hint
    pub detail: DetailLevel,
}

impl From<&DescriptionRequest> for ChatCompletionRequest {
    /// One user turn: the instruction text followed by the image.
    fn from(request: &DescriptionRequest) -> Self {
        let parts = vec![
            ContentPart::text(request.instruction_text().clone()),
            ContentPart::image_url(request.reference().to_url(), *request.detail_level()),
        ];

        Self {
            model: request.model().clone(),
            messages: vec![ChatMessage::user(parts)],
        }
    }
}
