//! Image reference resolution for Pictor.
//!
//! Turns the caller's image string into an [`ImageReference`]:
//!
//! - `http://` and `https://` inputs become [`ImageReference::Remote`] untouched
//! - anything else is treated as a filesystem path, read fully, and labelled
//!   with a media type guessed from its extension
//!
//! [`ImageReference`]: pictor_core::ImageReference
//! [`ImageReference::Remote`]: pictor_core::ImageReference::Remote

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media_type;
mod resolver;

pub use media_type::media_type_for;
pub use resolver::{is_remote, ReferenceResolver};
