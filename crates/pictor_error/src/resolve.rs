//! Local image resolution errors.

/// A path classified as local could not be read.
///
/// The failure subtype (missing file, permission denied, directory, ...) is
/// deliberately flattened into `message`.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Unreadable file: {} at line {} in {}", message, line, file)]
pub struct UnreadableFileError {
    /// Underlying cause, including the resolved path
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UnreadableFileError {
    /// Create a new UnreadableFileError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictor_error::UnreadableFileError;
    ///
    /// let err = UnreadableFileError::new("/tmp/cat.png: No such file or directory (os error 2)");
    /// assert!(err.message.starts_with("/tmp/cat.png"));
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
