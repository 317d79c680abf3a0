//! Extension-based media type lookup.

use pictor_core::DEFAULT_MEDIA_TYPE;
use std::path::Path;

/// Guesses a MIME type from the path's extension.
///
/// Only the extension is consulted; file contents are never sniffed, so a
/// renamed file is labelled by its new name. Unknown or missing extensions
/// fall back to `image/jpeg`.
///
/// # Examples
///
/// ```
/// use pictor_media::media_type_for;
/// use std::path::Path;
///
/// assert_eq!(media_type_for(Path::new("cat.PNG")), "image/png");
/// assert_eq!(media_type_for(Path::new("photo")), "image/jpeg");
/// ```
pub fn media_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_MEDIA_TYPE)
        .to_string()
}
