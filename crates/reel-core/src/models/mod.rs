//! Data models for reel

mod list;
mod selection;
mod video;

pub use list::{ListId, VideoList};
pub use selection::SelectionSet;
pub use video::{NewVideo, Platform, Video, VideoId};
