//! OpenAI-compatible vision client and description requester for Pictor.
//!
//! # Overview
//!
//! - [`DescriberConfig`]: process-wide settings (credential, endpoint, model),
//!   built once at startup
//! - [`ChatCompletion`]: the seam to the external chat completion API, with
//!   [`OpenAiClient`] as the HTTP implementation
//! - [`DescriptionRequester`]: builds the multimodal request for one image and
//!   maps every outcome into a [`DescriptionResult`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pictor_core::ImageReference;
//! use pictor_models::{DescriberConfig, DescriptionRequester};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DescriberConfig::from_env()?;
//!     let requester = DescriptionRequester::from_config(&config)?;
//!
//!     let reference = ImageReference::Remote { url: "https://example.com/cat.png".into() };
//!     let result = requester.describe_with_default(reference).await;
//!     println!("{}", result.text());
//!     Ok(())
//! }
//! ```
//!
//! [`DescriptionResult`]: pictor_core::DescriptionResult

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod describer;
mod request;
mod response;

pub use client::{ChatCompletion, OpenAiClient};
pub use config::{DescriberConfig, DescriberConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use describer::DescriptionRequester;
pub use request::{ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl};
pub use response::{ApiErrorBody, ApiErrorDetail, ChatCompletionResponse, Choice, ChoiceMessage, Usage};
