//! Errors raised while building or submitting a description request.

/// Failure conditions of a chat completion round trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// HTTP request failed: {0}
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// API error: {0}
    #[display("API error: {}", _0)]
    Api(String),

    /// Failed to serialize request: {0}
    #[display("Failed to serialize request: {}", _0)]
    Serialization(String),

    /// Failed to deserialize response: {0}
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// Response had an unexpected shape: {0}
    #[display("Unexpected response: {}", _0)]
    UnexpectedResponse(String),
}

impl RequestErrorKind {
    /// The bare message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Http(msg)
            | Self::Api(msg)
            | Self::Serialization(msg)
            | Self::Deserialization(msg)
            | Self::UnexpectedResponse(msg) => msg,
        }
    }
}

/// Request error with location tracking.
///
/// # Examples
///
/// ```
/// use pictor_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::Api("rate limit exceeded".into()));
/// assert_eq!(err.message(), "rate limit exceeded");
/// assert!(err.to_string().starts_with("Request Error: API error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The error kind
    pub kind: RequestErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// User-facing message, identical for every kind.
    pub fn message(&self) -> &str {
        self.kind.message()
    }
}
