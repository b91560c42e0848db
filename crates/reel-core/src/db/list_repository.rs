//! List repository implementation

use crate::error::{Error, Result};
use crate::models::{ListId, Video, VideoList};
use libsql::{params, Connection};

/// Trait for video-list storage operations.
///
/// Lists carry embedded snapshots of their member videos; the `videos`
/// column holds a JSON array and is written whole on every insert.
pub trait ListRepository {
    /// Insert a list document
    fn insert(&self, list: &VideoList) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Get one of the user's lists by ID
    fn get(
        &self,
        user_id: &str,
        id: &ListId,
    ) -> impl std::future::Future<Output = Result<Option<VideoList>>> + Send;

    /// List the user's lists in store-default (insertion) order
    fn list_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<VideoList>>> + Send;

    /// Delete one of the user's lists by ID
    fn delete(
        &self,
        user_id: &str,
        id: &ListId,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// libSQL implementation of `ListRepository`
pub struct LibSqlListRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlListRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a list from a database row
    fn parse_list(row: &libsql::Row) -> Result<VideoList> {
        let id: String = row.get(0)?;
        let videos_json: String = row.get(3)?;
        let videos: Vec<Video> = serde_json::from_str(&videos_json)?;

        Ok(VideoList {
            id: id.parse().unwrap_or_default(),
            user_id: row.get(1)?,
            title: row.get(2)?,
            videos,
            created_at: row.get(4)?,
        })
    }
}

impl ListRepository for LibSqlListRepository<'_> {
    async fn insert(&self, list: &VideoList) -> Result<()> {
        let videos_json = serde_json::to_string(&list.videos)?;

        self.conn
            .execute(
                "INSERT INTO lists (id, user_id, title, videos, created_at)
                 VALUES (?, ?, ?, ?, ?)",
                params![
                    list.id.as_str(),
                    list.user_id.clone(),
                    list.title.clone(),
                    videos_json,
                    list.created_at.clone(),
                ],
            )
            .await?;

        Ok(())
    }

    async fn get(&self, user_id: &str, id: &ListId) -> Result<Option<VideoList>> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, user_id, title, videos, created_at
                 FROM lists
                 WHERE id = ? AND user_id = ?",
                params![id.as_str(), user_id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::parse_list(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<VideoList>> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, user_id, title, videos, created_at
                 FROM lists
                 WHERE user_id = ?
                 ORDER BY rowid ASC",
                params![user_id],
            )
            .await?;

        let mut lists = Vec::new();
        while let Some(row) = rows.next().await? {
            lists.push(Self::parse_list(&row)?);
        }

        Ok(lists)
    }

    async fn delete(&self, user_id: &str, id: &ListId) -> Result<()> {
        let rows = self
            .conn
            .execute(
                "DELETE FROM lists WHERE id = ? AND user_id = ?",
                params![id.as_str(), user_id],
            )
            .await?;

        if rows == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::{NewVideo, Platform};
    use pretty_assertions::assert_eq;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

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

    #[tokio::test(flavor = "multi_thread")]
    async fn test_insert_and_get_roundtrips_snapshots() {
        let db = setup().await;
        let repo = LibSqlListRepository::new(db.connection());

        let videos = vec![sample_video("user-1", "a"), sample_video("user-1", "b")];
        let list = VideoList::new("user-1", "Favorites", videos);
        repo.insert(&list).await.unwrap();

        let fetched = repo.get("user-1", &list.id).await.unwrap().unwrap();
        assert_eq!(fetched, list);
        assert_eq!(fetched.videos.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_is_scoped_by_user() {
        let db = setup().await;
        let repo = LibSqlListRepository::new(db.connection());

        repo.insert(&VideoList::new(
            "user-a",
            "Mine",
            vec![sample_video("user-a", "a")],
        ))
        .await
        .unwrap();
        repo.insert(&VideoList::new(
            "user-b",
            "Theirs",
            vec![sample_video("user-b", "b")],
        ))
        .await
        .unwrap();

        let mine = repo.list_for_user("user-a").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Mine");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_snapshots_survive_video_deletion() {
        let db = setup().await;
        let video_repo = crate::db::LibSqlVideoRepository::new(db.connection());
        let list_repo = LibSqlListRepository::new(db.connection());
        use crate::db::VideoRepository;

        let video = sample_video("user-1", "Embedded");
        video_repo.insert(&video).await.unwrap();

        let list = VideoList::new("user-1", "Keepers", vec![video.clone()]);
        list_repo.insert(&list).await.unwrap();

        // Deleting the standalone document must not touch the embedded copy
        video_repo.delete("user-1", &video.id).await.unwrap();

        let fetched = list_repo.get("user-1", &list.id).await.unwrap().unwrap();
        assert_eq!(fetched.videos, vec![video]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_delete() {
        let db = setup().await;
        let repo = LibSqlListRepository::new(db.connection());

        let list = VideoList::new("user-1", "Temp", vec![sample_video("user-1", "a")]);
        repo.insert(&list).await.unwrap();
        repo.delete("user-1", &list.id).await.unwrap();

        assert!(repo.get("user-1", &list.id).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_delete_missing_is_not_found() {
        let db = setup().await;
        let repo = LibSqlListRepository::new(db.connection());

        let error = repo.delete("user-1", &ListId::new()).await.unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_delete_refuses_other_users_list() {
        let db = setup().await;
        let repo = LibSqlListRepository::new(db.connection());

        let list = VideoList::new("user-a", "Mine", vec![sample_video("user-a", "a")]);
        repo.insert(&list).await.unwrap();

        let error = repo.delete("user-b", &list.id).await.unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
        assert!(repo.get("user-a", &list.id).await.unwrap().is_some());
    }
}
