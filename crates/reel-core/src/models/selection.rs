//! In-memory video selection used when composing a new list

use super::video::{Video, VideoId};

/// Ordered set of videos selected for a list under construction.
///
/// Purely in-memory; nothing is persisted until the list is created. Keyed by
/// video identifier so toggling the same video twice restores the original
/// selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    videos: Vec<Video>,
}

impl SelectionSet {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { videos: Vec::new() }
    }

    /// Toggle a video: add it if absent, remove it if present
    pub fn toggle(&mut self, video: &Video) {
        if self.contains(&video.id) {
            self.remove(&video.id);
        } else {
            self.videos.push(video.clone());
        }
    }

    /// Remove a video from the selection by id (no-op when absent)
    pub fn remove(&mut self, id: &VideoId) {
        self.videos.retain(|selected| selected.id != *id);
    }

    /// Whether the selection currently holds the given video
    #[must_use]
    pub fn contains(&self, id: &VideoId) -> bool {
        self.videos.iter().any(|selected| selected.id == *id)
    }

    /// Number of selected videos
    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Selected videos in insertion order
    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Consume the selection, yielding the snapshots to embed
    #[must_use]
    pub fn into_videos(self) -> Vec<Video> {
        self.videos
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.videos.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewVideo, Platform};
    use pretty_assertions::assert_eq;

    fn sample_video(title: &str) -> Video {
        Video::new(
            "user-1",
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
    fn toggle_adds_then_removes() {
        let video = sample_video("one");
        let mut selection = SelectionSet::new();

        selection.toggle(&video);
        assert!(selection.contains(&video.id));
        assert_eq!(selection.len(), 1);

        selection.toggle(&video);
        assert!(!selection.contains(&video.id));
        assert!(selection.is_empty());
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let kept = sample_video("kept");
        let toggled = sample_video("toggled");

        let mut selection = SelectionSet::new();
        selection.toggle(&kept);
        let before = selection.clone();

        selection.toggle(&toggled);
        selection.toggle(&toggled);
        assert_eq!(selection, before);
    }

    #[test]
    fn preserves_insertion_order() {
        let first = sample_video("first");
        let second = sample_video("second");

        let mut selection = SelectionSet::new();
        selection.toggle(&first);
        selection.toggle(&second);

        let titles: Vec<&str> = selection
            .videos()
            .iter()
            .map(|video| video.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn remove_is_noop_for_absent_id() {
        let present = sample_video("present");
        let absent = sample_video("absent");

        let mut selection = SelectionSet::new();
        selection.toggle(&present);
        selection.remove(&absent.id);

        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&present.id));
    }
}
