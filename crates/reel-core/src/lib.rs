//! reel-core - Core library for reel
//!
//! This crate contains the shared models, database layer, auth client, and
//! store logic used by all reel interfaces (mobile, CLI).

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;
pub mod thumbnail;
pub mod util;

pub use error::{Error, Result};
pub use models::{ListId, NewVideo, Platform, SelectionSet, Video, VideoId, VideoList};
pub use store::{BookmarkStore, Collection, Subscription};
