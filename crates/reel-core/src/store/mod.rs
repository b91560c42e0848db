//! Bookmark store service
//!
//! Async facade over the database layer. All reads and writes go through a
//! shared `Database` behind a mutex, and every successful mutation publishes
//! a change event so views watching a collection can refetch.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};

use crate::db::{
    Database, LibSqlListRepository, LibSqlVideoRepository, ListRepository, SyncConfig,
    VideoRepository,
};
use crate::error::{Error, Result};
use crate::models::{ListId, NewVideo, Video, VideoId, VideoList};
use crate::thumbnail;

/// Change feed channel capacity; slow subscribers simply refetch on lag
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Collections a view can watch for changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Videos,
    Lists,
}

/// A change notification scoped to one user's collection
#[derive(Debug, Clone)]
struct ChangeEvent {
    user_id: String,
    collection: Collection,
}

/// Handle returned by [`BookmarkStore::subscribe`].
///
/// Wakes only for mutations made on behalf of the subscribed user against
/// the subscribed collection. Dropping the handle tears the subscription
/// down; nothing keeps listening after the watching view goes away.
pub struct Subscription {
    user_id: String,
    collection: Collection,
    rx: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    /// Wait for the next matching change.
    ///
    /// Returns `false` once the store has been dropped and no further
    /// changes can arrive. Lagged receivers are treated as a change, since
    /// the only correct response to either is a refetch.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.rx.recv().await {
                Ok(event) => {
                    if event.user_id == self.user_id && event.collection == self.collection {
                        return true;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => return true,
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }
}

/// Thin async wrapper around the video and list repositories
#[derive(Clone)]
pub struct BookmarkStore {
    db: Arc<Mutex<Database>>,
    changes: broadcast::Sender<ChangeEvent>,
}

impl BookmarkStore {
    /// Open a local-only store at the given path
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::wrap(Database::open(path).await?))
    }

    /// Open a store backed by an embedded replica of a remote database
    pub async fn open_with_sync(
        local_path: impl AsRef<Path>,
        sync_config: SyncConfig,
    ) -> Result<Self> {
        Ok(Self::wrap(
            Database::open_with_sync(local_path, sync_config).await?,
        ))
    }

    /// Open an in-memory store (useful for testing)
    pub async fn open_in_memory() -> Result<Self> {
        Ok(Self::wrap(Database::open_in_memory().await?))
    }

    fn wrap(db: Database) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            db: Arc::new(Mutex::new(db)),
            changes,
        }
    }

    /// Watch one user's collection for changes
    pub fn subscribe(&self, user_id: impl Into<String>, collection: Collection) -> Subscription {
        Subscription {
            user_id: user_id.into(),
            collection,
            rx: self.changes.subscribe(),
        }
    }

    fn publish(&self, user_id: &str, collection: Collection) {
        // Send fails only when no subscriber exists, which is fine
        let _ = self.changes.send(ChangeEvent {
            user_id: user_id.to_string(),
            collection,
        });
    }

    /// List the user's videos in the order they were saved
    pub async fn list_videos(&self, user_id: &str) -> Result<Vec<Video>> {
        let db = self.db.lock().await;
        let repo = LibSqlVideoRepository::new(db.connection());
        repo.list_for_user(user_id).await
    }

    /// Save a new video bookmark.
    ///
    /// Every field must be non-empty and the thumbnail must derive from the
    /// URL; if either check fails nothing is persisted.
    pub async fn add_video(&self, user_id: &str, fields: NewVideo) -> Result<Video> {
        if !fields.is_complete() {
            return Err(Error::InvalidInput("Please fill in all fields".to_string()));
        }

        let thumbnail = thumbnail::derive_thumbnail(&fields.url, fields.platform)
            .ok_or_else(|| Error::Thumbnail(fields.url.clone()))?;

        let video = Video::new(user_id, fields, thumbnail);

        {
            let db = self.db.lock().await;
            let repo = LibSqlVideoRepository::new(db.connection());
            repo.insert(&video).await?;
        }

        tracing::debug!(id = %video.id, "Saved video");
        self.publish(user_id, Collection::Videos);
        Ok(video)
    }

    /// Delete one of the user's videos.
    ///
    /// Snapshots embedded in lists are left untouched.
    pub async fn delete_video(&self, user_id: &str, id: &VideoId) -> Result<()> {
        {
            let db = self.db.lock().await;
            let repo = LibSqlVideoRepository::new(db.connection());
            repo.delete(user_id, id).await?;
        }

        self.publish(user_id, Collection::Videos);
        Ok(())
    }

    /// List the user's lists in the order they were created
    pub async fn list_lists(&self, user_id: &str) -> Result<Vec<VideoList>> {
        let db = self.db.lock().await;
        let repo = LibSqlListRepository::new(db.connection());
        repo.list_for_user(user_id).await
    }

    /// Get one of the user's lists
    pub async fn get_list(&self, user_id: &str, id: &ListId) -> Result<VideoList> {
        let db = self.db.lock().await;
        let repo = LibSqlListRepository::new(db.connection());
        repo.get(user_id, id)
            .await?
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Create a named list embedding snapshots of the selected videos.
    ///
    /// Requires a non-empty title and at least one selected video.
    pub async fn create_list(
        &self,
        user_id: &str,
        title: &str,
        videos: Vec<Video>,
    ) -> Result<VideoList> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput(
                "Please enter a list title".to_string(),
            ));
        }
        if videos.is_empty() {
            return Err(Error::InvalidInput(
                "Please select at least one video".to_string(),
            ));
        }

        let list = VideoList::new(user_id, title, videos);

        {
            let db = self.db.lock().await;
            let repo = LibSqlListRepository::new(db.connection());
            repo.insert(&list).await?;
        }

        tracing::debug!(id = %list.id, "Created list");
        self.publish(user_id, Collection::Lists);
        Ok(list)
    }

    /// Delete one of the user's lists
    pub async fn delete_list(&self, user_id: &str, id: &ListId) -> Result<()> {
        {
            let db = self.db.lock().await;
            let repo = LibSqlListRepository::new(db.connection());
            repo.delete(user_id, id).await?;
        }

        self.publish(user_id, Collection::Lists);
        Ok(())
    }

    /// Current videos belonging to a list, in snapshot order.
    ///
    /// Resolves the list's embedded video IDs against the live videos
    /// collection, so a video deleted after the list was created no longer
    /// appears here even though its snapshot remains in the list document.
    pub async fn list_detail_videos(&self, user_id: &str, id: &ListId) -> Result<Vec<Video>> {
        let db = self.db.lock().await;

        let list_repo = LibSqlListRepository::new(db.connection());
        let list = list_repo
            .get(user_id, id)
            .await?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let video_repo = LibSqlVideoRepository::new(db.connection());
        let live = video_repo.list_for_user(user_id).await?;

        let videos = list
            .video_ids()
            .into_iter()
            .filter_map(|wanted| live.iter().find(|video| video.id == wanted).cloned())
            .collect();

        Ok(videos)
    }

    /// Sync with the remote database (if configured)
    pub async fn sync(&self) -> Result<()> {
        let db = self.db.lock().await;
        db.sync().await
    }

    /// Check whether remote sync is enabled
    pub async fn is_sync_enabled(&self) -> bool {
        let db = self.db.lock().await;
        db.is_sync_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::time::timeout;

    fn sample_fields(title: &str) -> NewVideo {
        NewVideo {
            title: title.to_string(),
            description: "desc".to_string(),
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            platform: Platform::YouTube,
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn add_and_list_videos() {
        let store = BookmarkStore::open_in_memory().await.unwrap();

        let saved = store.add_video("user-1", sample_fields("One")).await.unwrap();
        assert_eq!(
            saved.thumbnail,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg"
        );

        let videos = store.list_videos("user-1").await.unwrap();
        assert_eq!(videos, vec![saved]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn add_video_rejects_incomplete_fields() {
        let store = BookmarkStore::open_in_memory().await.unwrap();

        let mut fields = sample_fields("One");
        fields.description = "   ".to_string();
        let err = store.add_video("user-1", fields).await.unwrap_err();

        match err {
            Error::InvalidInput(msg) => assert!(msg.contains("all fields")),
            other => panic!("expected invalid input error, got {other:?}"),
        }
        assert!(store.list_videos("user-1").await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn add_video_rejects_underivable_thumbnail() {
        let store = BookmarkStore::open_in_memory().await.unwrap();

        let mut fields = sample_fields("One");
        fields.url = "https://example.com/not-a-video".to_string();
        let err = store.add_video("user-1", fields).await.unwrap_err();

        assert!(matches!(err, Error::Thumbnail(_)));
        assert!(store.list_videos("user-1").await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_list_requires_title_and_selection() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        let video = store.add_video("user-1", sample_fields("One")).await.unwrap();

        let err = store
            .create_list("user-1", "  ", vec![video.clone()])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = store.create_list("user-1", "Empty", vec![]).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        assert!(store.list_lists("user-1").await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_list_trims_title() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        let video = store.add_video("user-1", sample_fields("One")).await.unwrap();

        let list = store
            .create_list("user-1", "  Favorites  ", vec![video])
            .await
            .unwrap();
        assert_eq!(list.title, "Favorites");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn deleting_video_leaves_list_snapshot_intact() {
        let store = BookmarkStore::open_in_memory().await.unwrap();

        let video = store.add_video("user-1", sample_fields("One")).await.unwrap();
        let list = store
            .create_list("user-1", "Keepers", vec![video.clone()])
            .await
            .unwrap();

        store.delete_video("user-1", &video.id).await.unwrap();

        let fetched = store.get_list("user-1", &list.id).await.unwrap();
        assert_eq!(fetched.videos, vec![video]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_detail_resolves_against_live_videos() {
        let store = BookmarkStore::open_in_memory().await.unwrap();

        let kept = store.add_video("user-1", sample_fields("Kept")).await.unwrap();
        let deleted = store
            .add_video("user-1", sample_fields("Deleted"))
            .await
            .unwrap();
        let outside = store
            .add_video("user-1", sample_fields("Outside"))
            .await
            .unwrap();

        let list = store
            .create_list("user-1", "Detail", vec![kept.clone(), deleted.clone()])
            .await
            .unwrap();

        store.delete_video("user-1", &deleted.id).await.unwrap();

        let detail = store.list_detail_videos("user-1", &list.id).await.unwrap();
        assert_eq!(detail, vec![kept]);
        assert!(!detail.contains(&outside));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_detail_missing_list_is_not_found() {
        let store = BookmarkStore::open_in_memory().await.unwrap();

        let err = store
            .list_detail_videos("user-1", &ListId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn subscription_wakes_on_own_mutation() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        let mut sub = store.subscribe("user-1", Collection::Videos);

        store.add_video("user-1", sample_fields("One")).await.unwrap();

        let woke = timeout(Duration::from_secs(1), sub.changed()).await;
        assert!(woke.unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn subscription_ignores_other_users_and_collections() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        let mut sub = store.subscribe("user-1", Collection::Lists);

        // Other user's list, and own videos: neither should wake us
        let video = store.add_video("user-2", sample_fields("One")).await.unwrap();
        store
            .create_list("user-2", "Theirs", vec![video])
            .await
            .unwrap();
        store.add_video("user-1", sample_fields("Two")).await.unwrap();

        let woke = timeout(Duration::from_millis(200), sub.changed()).await;
        assert!(woke.is_err(), "subscription should stay silent");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn subscription_ends_when_store_drops() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        let mut sub = store.subscribe("user-1", Collection::Videos);

        drop(store);

        let woke = timeout(Duration::from_secs(1), sub.changed()).await;
        assert!(!woke.unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn user_switch_requires_a_fresh_subscription() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        let mut before = store.subscribe("user-a", Collection::Videos);

        // The handle opened for the previous user stays silent for the new
        // user's mutations, so callers must resubscribe on user switch
        store.add_video("user-b", sample_fields("Theirs")).await.unwrap();
        let woke = timeout(Duration::from_millis(200), before.changed()).await;
        assert!(woke.is_err(), "old user's subscription must stay silent");

        let mut after = store.subscribe("user-b", Collection::Videos);
        store.add_video("user-b", sample_fields("Later")).await.unwrap();
        let woke = timeout(Duration::from_secs(1), after.changed()).await;
        assert!(woke.unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_picks_up_rows_written_behind_the_feed() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        let mut sub = store.subscribe("user-1", Collection::Videos);

        // Rows arriving via replica sync bypass the change feed; only an
        // explicit refetch can surface them
        let video = Video::new(
            "user-1",
            sample_fields("Synced"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg",
        );
        {
            let db = store.db.lock().await;
            let repo = LibSqlVideoRepository::new(db.connection());
            repo.insert(&video).await.unwrap();
        }

        let woke = timeout(Duration::from_millis(200), sub.changed()).await;
        assert!(woke.is_err(), "no change event exists for synced rows");

        let fetched = store.list_videos("user-1").await.unwrap();
        assert_eq!(fetched, vec![video]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn users_do_not_see_each_others_videos() {
        let store = BookmarkStore::open_in_memory().await.unwrap();

        store.add_video("user-a", sample_fields("Mine")).await.unwrap();
        store.add_video("user-b", sample_fields("Theirs")).await.unwrap();

        let mine = store.list_videos("user-a").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Mine");
    }
}
