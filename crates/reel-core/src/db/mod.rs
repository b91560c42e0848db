//! Database layer for reel

mod connection;
mod list_repository;
mod migrations;
mod video_repository;

pub use connection::{Database, SyncConfig};
pub use list_repository::{LibSqlListRepository, ListRepository};
pub use video_repository::{LibSqlVideoRepository, VideoRepository};
