//! Remote/local classification and local file loading.

use crate::media_type_for;
use pictor_core::ImageReference;
use pictor_error::{ConfigError, UnreadableFileError};
use std::path::{Component, Path, PathBuf};

/// Returns true when the input is used as a URL rather than a path.
///
/// Case-sensitive prefix match only; the rest of the URL is not validated.
///
/// # Examples
///
/// ```
/// use pictor_media::is_remote;
///
/// assert!(is_remote("https://example.com/cat.png"));
/// assert!(is_remote("http://"));
/// assert!(!is_remote("HTTPS://example.com/cat.png"));
/// assert!(!is_remote("./cat.png"));
/// ```
pub fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolves caller-supplied image strings.
///
/// Relative paths are joined onto `base_dir`, which the server sets to its
/// working directory at startup. The resolver holds no other state, so one
/// instance can serve concurrent invocations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceResolver {
    base_dir: PathBuf,
}

impl ReferenceResolver {
    /// Create a resolver that joins relative paths onto `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a resolver rooted at the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn from_current_dir() -> Result<Self, ConfigError> {
        let base_dir = std::env::current_dir()
            .map_err(|e| ConfigError::new(format!("Cannot determine working directory: {}", e)))?;
        Ok(Self::new(base_dir))
    }

    /// Directory relative paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute path for a local input.
    ///
    /// `.` and `..` segments are folded lexically; symlinks are not followed.
    pub fn absolute_path(&self, input: &str) -> PathBuf {
        let path = Path::new(input);
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }

    /// Classify `input` and, for local paths, load the file inline.
    ///
    /// # Errors
    ///
    /// Returns [`UnreadableFileError`] if a local path cannot be read for any
    /// reason. The empty string is a local path and fails here too.
    #[tracing::instrument(skip(self), fields(base_dir = %self.base_dir.display()))]
    pub async fn resolve(&self, input: &str) -> Result<ImageReference, UnreadableFileError> {
        if is_remote(input) {
            tracing::debug!("Using remote image URL as-is");
            return Ok(ImageReference::Remote {
                url: input.to_string(),
            });
        }

        let path = self.absolute_path(input);
        let data = tokio::fs::read(&path).await.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read local image");
            UnreadableFileError::new(format!("{}: {}", path.display(), e))
        })?;

        let media_type = media_type_for(&path);
        tracing::debug!(
            path = %path.display(),
            size = data.len(),
            media_type = %media_type,
            "Loaded local image"
        );

        Ok(ImageReference::Inline { media_type, data })
    }
}
