//! Video model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::util::rfc3339_now;

/// A unique identifier for a video, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(Uuid);

impl VideoId {
    /// Create a new unique video ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for VideoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VideoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Source platform of a saved video.
///
/// The platform is declared by the user when saving, not detected from the
/// URL; a mismatched declaration silently produces a wrong thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    Instagram,
}

impl Platform {
    /// Stable label stored in documents and shown in the UI
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YouTube" => Ok(Self::YouTube),
            "Instagram" => Ok(Self::Instagram),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// A saved video bookmark, always owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier
    pub id: VideoId,
    /// Owning user identifier; every query is scoped by this field
    pub user_id: String,
    /// Free-text title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Source URL, played back as-is in the embedded web view
    pub url: String,
    /// Declared source platform
    pub platform: Platform,
    /// Thumbnail URL derived once at creation time, never re-derived
    pub thumbnail: String,
    /// Creation timestamp (RFC 3339 string)
    pub created_at: String,
}

impl Video {
    /// Create a new video document owned by `user_id`.
    ///
    /// The thumbnail is expected to be derived by the caller before
    /// construction; creation is the only time it is computed.
    #[must_use]
    pub fn new(user_id: impl Into<String>, fields: NewVideo, thumbnail: impl Into<String>) -> Self {
        Self {
            id: VideoId::new(),
            user_id: user_id.into(),
            title: fields.title,
            description: fields.description,
            url: fields.url,
            platform: fields.platform,
            thumbnail: thumbnail.into(),
            created_at: rfc3339_now(),
        }
    }
}

/// User-entered fields for a video about to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub url: String,
    pub platform: Platform,
}

impl NewVideo {
    /// Check that every user-entered field is non-empty after trimming
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    fn sample_fields() -> NewVideo {
        NewVideo {
            title: "Rickroll".to_string(),
            description: "A classic".to_string(),
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            platform: Platform::YouTube,
        }
    }

    #[test]
    fn test_video_id_unique() {
        let id1 = VideoId::new();
        let id2 = VideoId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_video_id_parse() {
        let id = VideoId::new();
        let parsed: VideoId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_video_new_stamps_owner_and_time() {
        let video = Video::new("user-1", sample_fields(), "https://img.example/0.jpg");
        assert_eq!(video.user_id, "user-1");
        assert_eq!(video.thumbnail, "https://img.example/0.jpg");
        assert!(chrono::DateTime::parse_from_rfc3339(&video.created_at).is_ok());
    }

    #[test]
    fn test_platform_roundtrip() {
        assert_eq!("YouTube".parse::<Platform>().unwrap(), Platform::YouTube);
        assert_eq!(
            "Instagram".parse::<Platform>().unwrap(),
            Platform::Instagram
        );
        assert!("Vimeo".parse::<Platform>().is_err());
    }

    #[test]
    fn test_new_video_completeness() {
        assert!(sample_fields().is_complete());

        let mut missing_title = sample_fields();
        missing_title.title = "   ".to_string();
        assert!(!missing_title.is_complete());

        let mut missing_url = sample_fields();
        missing_url.url = String::new();
        assert!(!missing_url.is_complete());
    }
}
