//! Core data types for the Pictor image description server.
//!
//! This crate holds the values that flow through one `describe-image`
//! invocation: the resolved [`ImageReference`], the immutable
//! [`DescriptionRequest`] built from it, and the [`DescriptionResult`]
//! returned to the protocol layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod detail;
mod reference;
mod request;
mod result;

pub use detail::DetailLevel;
pub use reference::{ImageReference, DEFAULT_MEDIA_TYPE};
pub use request::{DescriptionRequest, DescriptionRequestBuilder, DESCRIBE_INSTRUCTION};
pub use result::{
    DescriptionResult, NO_DESCRIPTION_FALLBACK, READ_FAILURE_PREFIX, REQUEST_FAILURE_PREFIX,
};
