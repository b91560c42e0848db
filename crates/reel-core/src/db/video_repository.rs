//! Video repository implementation

use crate::error::{Error, Result};
use crate::models::{Video, VideoId};
use libsql::{params, Connection};

/// Trait for video storage operations.
///
/// Every operation is scoped by the owning user identifier; a video is never
/// visible to a query made on behalf of another user.
pub trait VideoRepository {
    /// Insert a video document
    fn insert(&self, video: &Video) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Get one of the user's videos by ID
    fn get(
        &self,
        user_id: &str,
        id: &VideoId,
    ) -> impl std::future::Future<Output = Result<Option<Video>>> + Send;

    /// List the user's videos in store-default (insertion) order
    fn list_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Video>>> + Send;

    /// Delete one of the user's videos by ID
    fn delete(
        &self,
        user_id: &str,
        id: &VideoId,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// libSQL implementation of `VideoRepository`
pub struct LibSqlVideoRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlVideoRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a video from a database row
    fn parse_video(row: &libsql::Row) -> Result<Video> {
        let id: String = row.get(0)?;
        let platform: String = row.get(5)?;

        Ok(Video {
            id: id.parse().unwrap_or_default(),
            user_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            url: row.get(4)?,
            platform: platform.parse().map_err(Error::Database)?,
            thumbnail: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
}

impl VideoRepository for LibSqlVideoRepository<'_> {
    async fn insert(&self, video: &Video) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO videos (id, user_id, title, description, url, platform, thumbnail, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    video.id.as_str(),
                    video.user_id.clone(),
                    video.title.clone(),
                    video.description.clone(),
                    video.url.clone(),
                    video.platform.as_str(),
                    video.thumbnail.clone(),
                    video.created_at.clone(),
                ],
            )
            .await?;

        Ok(())
    }

    async fn get(&self, user_id: &str, id: &VideoId) -> Result<Option<Video>> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, user_id, title, description, url, platform, thumbnail, created_at
                 FROM videos
                 WHERE id = ? AND user_id = ?",
                params![id.as_str(), user_id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::parse_video(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Video>> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, user_id, title, description, url, platform, thumbnail, created_at
                 FROM videos
                 WHERE user_id = ?
                 ORDER BY rowid ASC",
                params![user_id],
            )
            .await?;

        let mut videos = Vec::new();
        while let Some(row) = rows.next().await? {
            videos.push(Self::parse_video(&row)?);
        }

        Ok(videos)
    }

    async fn delete(&self, user_id: &str, id: &VideoId) -> Result<()> {
        let rows = self
            .conn
            .execute(
                "DELETE FROM videos WHERE id = ? AND user_id = ?",
                params![id.as_str(), user_id],
            )
            .await?;

        if rows == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        Ok(())
    }
}
