//! Thumbnail derivation for saved videos
//!
//! Thumbnails are computed exactly once, when a video is saved. YouTube URLs
//! go through id extraction; Instagram entries all share one bundled
//! placeholder image (no per-URL logic exists for that platform).

use regex::Regex;

use crate::models::Platform;

/// Bundled placeholder shown for every Instagram entry
pub const INSTAGRAM_PLACEHOLDER: &str = "assets/instagram-placeholder.png";

/// Extract the 11-character YouTube video id from a URL.
///
/// Matches the known link shapes: `youtube.com/watch?v=`, `youtube.com/v/`,
/// `youtube.com/embed/`, nested path forms, and the `youtu.be/` short link.
/// Returns `None` when the URL matches none of them.
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<String> {
    let re = Regex::new(r#"(?:youtube\.com/(?:[^/]+/[^/]+/|(?:v|embed)/|.*[?&]v=)|youtu\.be/)([^"&?/ ]{11})"#)
        .expect("Invalid regex");
    re.captures(url)
        .map(|captures| captures[1].to_string())
}

/// Build the deterministic thumbnail URL for a YouTube video id
#[must_use]
pub fn youtube_thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/0.jpg")
}

/// Derive the thumbnail for a URL under the declared platform.
///
/// Returns `None` when derivation fails, in which case the save must be
/// aborted and nothing persisted. The platform is taken at face value; a
/// mismatched declaration produces a wrong thumbnail without any cross-check.
#[must_use]
pub fn derive_thumbnail(url: &str, platform: Platform) -> Option<String> {
    match platform {
        Platform::YouTube => extract_youtube_id(url).map(|id| youtube_thumbnail_url(&id)),
        Platform::Instagram => Some(INSTAGRAM_PLACEHOLDER.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_id_from_short_link() {
        assert_eq!(
            extract_youtube_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_id_from_watch_link() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?list=abc&v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_id_from_embed_and_v_links() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/v/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn rejects_unrecognized_urls() {
        assert_eq!(extract_youtube_id("https://example.com/watch?v=short"), None);
        assert_eq!(extract_youtube_id("https://vimeo.com/123456789"), None);
        assert_eq!(extract_youtube_id("not a url"), None);
    }

    #[test]
    fn derive_thumbnail_builds_youtube_url() {
        assert_eq!(
            derive_thumbnail("https://youtu.be/dQw4w9WgXcQ", Platform::YouTube).as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg")
        );
    }

    #[test]
    fn derive_thumbnail_fails_for_unmatched_youtube_url() {
        assert_eq!(
            derive_thumbnail("https://example.com/clip", Platform::YouTube),
            None
        );
    }

    #[test]
    fn derive_thumbnail_uses_placeholder_for_instagram() {
        // Any URL maps to the same bundled asset.
        assert_eq!(
            derive_thumbnail("https://www.instagram.com/p/xyz/", Platform::Instagram).as_deref(),
            Some(INSTAGRAM_PLACEHOLDER)
        );
        assert_eq!(
            derive_thumbnail("whatever", Platform::Instagram).as_deref(),
            Some(INSTAGRAM_PLACEHOLDER)
        );
    }
}
