//! Description request values.

use crate::{DetailLevel, ImageReference};
use derive_builder::Builder;
use derive_getters::Getters;

/// Instruction sent alongside every image.
pub const DESCRIBE_INSTRUCTION: &str = "what's in this image?";

/// A single-turn request to describe one image.
///
/// Built once per invocation and consumed by the requester.
///
/// # Examples
///
/// ```
/// use pictor_core::{DescriptionRequest, DetailLevel, ImageReference, DESCRIBE_INSTRUCTION};
///
/// let request = DescriptionRequest::builder()
///     .model("gpt-4o-mini")
///     .reference(ImageReference::Remote { url: "https://example.com/cat.png".into() })
///     .build()
///     .unwrap();
///
/// assert_eq!(request.instruction_text(), DESCRIBE_INSTRUCTION);
/// assert_eq!(*request.detail_level(), DetailLevel::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Builder, Getters)]
#[builder(setter(into))]
pub struct DescriptionRequest {
    /// Model identifier
    model: String,
    /// The image to describe
    reference: ImageReference,
    /// Instruction text preceding the image
    #[builder(default = "DESCRIBE_INSTRUCTION.to_string()")]
    instruction_text: String,
    /// Detail hint for the image part
    #[builder(default)]
    detail_level: DetailLevel,
}

impl DescriptionRequest {
    /// Creates a new builder for `DescriptionRequest`.
    pub fn builder() -> DescriptionRequestBuilder {
        DescriptionRequestBuilder::default()
    }
}
