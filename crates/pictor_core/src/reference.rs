//! Resolved image references.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Media type used when a local file's extension is unknown or absent.
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// An image reference ready to be placed in a chat request.
///
/// A `Remote` reference is never read from disk, and an `Inline` reference is
/// never sent as a bare path.
///
/// # Examples
///
/// ```
/// use pictor_core::ImageReference;
///
/// let remote = ImageReference::Remote { url: "https://example.com/cat.png".to_string() };
/// assert_eq!(remote.to_url(), "https://example.com/cat.png");
///
/// let inline = ImageReference::Inline {
///     media_type: "image/png".to_string(),
///     data: vec![0x89, 0x50, 0x4E, 0x47],
/// };
/// assert_eq!(inline.to_url(), "data:image/png;base64,iVBORw==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageReference {
    /// Absolute HTTP(S) URL, passed through untouched.
    Remote {
        /// The URL as supplied by the caller
        url: String,
    },
    /// File contents carried inline.
    Inline {
        /// MIME type label, e.g. "image/png"
        media_type: String,
        /// Raw file bytes
        data: Vec<u8>,
    },
}

impl ImageReference {
    /// Serializes the reference into something usable wherever the model API
    /// expects an image URL.
    ///
    /// Inline data becomes `data:<media_type>;base64,<payload>`.
    pub fn to_url(&self) -> String {
        match self {
            Self::Remote { url } => url.clone(),
            Self::Inline { media_type, data } => {
                format!("data:{};base64,{}", media_type, STANDARD.encode(data))
            }
        }
    }

    /// Returns true for references that came from the local filesystem.
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }
}
