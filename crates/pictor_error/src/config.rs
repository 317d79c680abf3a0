//! Startup configuration failures.

/// Raised while building the server's settings, before any tool call runs.
///
/// Records where the error was constructed so log lines point at the check
/// that failed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Capture `message` along with the caller's file and line.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictor_error::ConfigError;
    ///
    /// let raw = "ten";
    /// let err = raw
    ///     .parse::<u64>()
    ///     .map_err(|e| ConfigError::new(format!("Invalid OPENAI_TIMEOUT_SECS '{}': {}", raw, e)))
    ///     .unwrap_err();
    ///
    /// assert!(err.message.starts_with("Invalid OPENAI_TIMEOUT_SECS 'ten'"));
    /// assert!(err.file.ends_with(".rs"));
    /// assert!(err.to_string().starts_with("Configuration Error: Invalid OPENAI_TIMEOUT_SECS"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
