//! Outcome of a describe invocation.

use pictor_error::{RequestError, UnreadableFileError};

/// Substituted when the model answers without any text.
pub const NO_DESCRIPTION_FALLBACK: &str = "No description available";

/// Prefix for local read failures.
pub const READ_FAILURE_PREFIX: &str = "Failed to read local file: ";

/// Prefix for failures talking to the model API.
pub const REQUEST_FAILURE_PREFIX: &str = "Error calling AI: ";

/// Exactly one outcome per invocation.
///
/// # Examples
///
/// ```
/// use pictor_core::DescriptionResult;
///
/// let ok = DescriptionResult::described("A cat.");
/// assert!(!ok.is_error());
/// assert_eq!(ok.text(), "A cat.");
///
/// let failed = DescriptionResult::failed("Error calling AI: timeout");
/// assert!(failed.is_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DescriptionResult {
    /// The model produced a description.
    Described {
        /// Description text
        text: String,
    },
    /// Something failed along the way.
    Failed {
        /// Human-readable, already prefixed message
        message: String,
    },
}

impl DescriptionResult {
    /// Successful outcome.
    pub fn described(text: impl Into<String>) -> Self {
        Self::Described { text: text.into() }
    }

    /// Failed outcome with a ready-to-display message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Whether the protocol layer must flag this result as an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The text to return to the caller, description or error message.
    pub fn text(&self) -> &str {
        match self {
            Self::Described { text } => text,
            Self::Failed { message } => message,
        }
    }
}

impl From<&UnreadableFileError> for DescriptionResult {
    fn from(err: &UnreadableFileError) -> Self {
        Self::failed(format!("{}{}", READ_FAILURE_PREFIX, err.message))
    }
}

impl From<&RequestError> for DescriptionResult {
    fn from(err: &RequestError) -> Self {
        Self::failed(format!("{}{}", REQUEST_FAILURE_PREFIX, err.message()))
    }
}
