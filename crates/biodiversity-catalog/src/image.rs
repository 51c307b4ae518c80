//! Species photo sources.
//!
//! Photos are hosted externally and addressed by id. A photo that fails to
//! load is swapped for the bundled fallback; the failure is never reported.

use tracing::debug;

/// Bundled image shown when a photo is missing or fails to load.
pub const FALLBACK_IMAGE: &str = "assets/fallback-image.jpg";

/// Thumbnail width requested from the image host.
pub const THUMBNAIL_WIDTH: u32 = 1000;

/// Thumbnail URL for a hosted image id.
pub fn thumbnail_url(image_id: &str) -> String {
    format!(
        "https://drive.google.com/thumbnail?id={}&sz=w{}",
        image_id, THUMBNAIL_WIDTH
    )
}

/// Where an `<img>` should load from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Fallback,
}

impl ImageSource {
    /// Source for an optional hosted image id. Blank ids go straight to the fallback.
    pub fn for_image_id(image_id: Option<&str>) -> Self {
        match image_id.map(str::trim) {
            Some(id) if !id.is_empty() => ImageSource::Remote(thumbnail_url(id)),
            _ => ImageSource::Fallback,
        }
    }

    /// The source to use after the current one failed to load.
    pub fn on_load_error(self) -> Self {
        if let ImageSource::Remote(url) = &self {
            debug!(url = %url, "Image failed to load, using fallback");
        }
        ImageSource::Fallback
    }

    pub fn url(&self) -> &str {
        match self {
            ImageSource::Remote(url) => url,
            ImageSource::Fallback => FALLBACK_IMAGE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageSource::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("1AbC"),
            "https://drive.google.com/thumbnail?id=1AbC&sz=w1000"
        );
    }

    #[test]
    fn test_missing_id_uses_fallback() {
        assert!(ImageSource::for_image_id(None).is_fallback());
        assert!(ImageSource::for_image_id(Some("  ")).is_fallback());
    }

    #[test]
    fn test_load_error_falls_back() {
        let source = ImageSource::for_image_id(Some("xyz"));
        assert!(!source.is_fallback());
        let source = source.on_load_error();
        assert_eq!(source.url(), FALLBACK_IMAGE);
    }
}
