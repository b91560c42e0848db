//! Named list model with embedded video snapshots

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::video::{Video, VideoId};
use crate::util::rfc3339_now;

/// A unique identifier for a list, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(Uuid);

impl ListId {
    /// Create a new unique list ID using UUID v7
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

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A named list of videos owned by a single user.
///
/// The `videos` field holds full denormalized snapshots taken at creation
/// time. Deleting or editing a standalone Video never changes the copies
/// embedded here; lists are immutable after creation (create/delete only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoList {
    /// Unique identifier
    pub id: ListId,
    /// Owning user identifier; every query is scoped by this field
    pub user_id: String,
    /// List title
    pub title: String,
    /// Ordered embedded video snapshots selected at creation time
    pub videos: Vec<Video>,
    /// Creation timestamp (RFC 3339 string)
    pub created_at: String,
}

impl VideoList {
    /// Create a new list owned by `user_id`, embedding the given snapshots
    #[must_use]
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, videos: Vec<Video>) -> Self {
        Self {
            id: ListId::new(),
            user_id: user_id.into(),
            title: title.into(),
            videos,
            created_at: rfc3339_now(),
        }
    }

    /// Identifiers of the videos embedded in this list, in snapshot order
    #[must_use]
    pub fn video_ids(&self) -> Vec<VideoId> {
        self.videos.iter().map(|video| video.id).collect()
    }

    /// Whether the list embeds a snapshot of the given video
    #[must_use]
    pub fn contains(&self, id: &VideoId) -> bool {
        self.videos.iter().any(|video| video.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewVideo, Platform};
    use pretty_assertions::assert_eq;

    fn sample_video(user: &str, title: &str) -> Video {
        Video::new(
            user,
            NewVideo {
                title: title.to_string(),
                description: "desc".to_string(),
                url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
                platform: Platform::YouTube,
            },
            "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg",
        )
    }

    #[test]
    fn test_list_id_parse() {
        let id = ListId::new();
        let parsed: ListId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_new_list_embeds_snapshots_in_order() {
        let first = sample_video("user-1", "first");
        let second = sample_video("user-1", "second");
        let list = VideoList::new("user-1", "Favorites", vec![first.clone(), second.clone()]);

        assert_eq!(list.videos, vec![first.clone(), second.clone()]);
        assert_eq!(list.video_ids(), vec![first.id, second.id]);
        assert!(chrono::DateTime::parse_from_rfc3339(&list.created_at).is_ok());
    }

    #[test]
    fn test_contains_checks_embedded_ids() {
        let embedded = sample_video("user-1", "kept");
        let other = sample_video("user-1", "missing");
        let list = VideoList::new("user-1", "Favorites", vec![embedded.clone()]);

        assert!(list.contains(&embedded.id));
        assert!(!list.contains(&other.id));
    }
}
