//! Error types for the Pictor image description server.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums define specific error conditions
//! - `*Error` structs wrap the condition with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The observable, user-facing text of an error is available through its
//! `message` field or accessor. The `Display` output additionally carries the
//! source location and is meant for logs.
//!
//! # Examples
//!
//! ```
//! use pictor_error::{PictorResult, ConfigError};
//!
//! fn load() -> PictorResult<String> {
//!     Err(ConfigError::new("OPENAI_API_KEY not set"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod request;
mod resolve;

pub use config::ConfigError;
pub use error::{PictorError, PictorErrorKind, PictorResult};
pub use request::{RequestError, RequestErrorKind};
pub use resolve::UnreadableFileError;
