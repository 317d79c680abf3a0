//! Top-level error wrapper types.

use crate::{ConfigError, RequestError, UnreadableFileError};

/// Every error condition the server can produce.
///
/// # Examples
///
/// ```
/// use pictor_error::{PictorError, UnreadableFileError};
///
/// let err: PictorError = UnreadableFileError::new("missing.png: not found").into();
/// assert!(format!("{}", err).contains("Unreadable file"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PictorErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Local image could not be read
    #[from(UnreadableFileError)]
    UnreadableFile(UnreadableFileError),
    /// Description request failed
    #[from(RequestError)]
    Request(RequestError),
}

/// Pictor error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pictor Error: {}", _0)]
pub struct PictorError(Box<PictorErrorKind>);

impl PictorError {
    /// Create a new error from a kind.
    pub fn new(kind: PictorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PictorErrorKind {
        &self.0
    }
}

impl<T> From<T> for PictorError
where
    T: Into<PictorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Pictor operations.
pub type PictorResult<T> = std::result::Result<T, PictorError>;
