//! Course playlist types
//!
//! Each course has at most one playlist holding ordered videos and ordered
//! study materials. `order` values are relative sort keys assigned by the
//! client; the backend guarantees neither uniqueness nor contiguity, so
//! consumers sort by them but never index by them.

use super::ids::{MaterialId, PlaylistId, VideoId};
use serde::{Deserialize, Serialize};

/// A course playlist with its ordered content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePlaylist {
    /// Unique playlist identifier
    #[serde(rename = "_id")]
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Sort key of the playlist itself
    pub order: Option<u32>,

    /// Ordered video entries
    #[serde(default)]
    pub videos: Vec<PlaylistVideo>,

    /// Ordered study materials
    #[serde(default)]
    pub materials: Vec<PlaylistMaterial>,
}

/// A video entry in a course playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistVideo {
    /// Unique video identifier
    #[serde(rename = "_id")]
    pub id: VideoId,

    /// Video title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Playback URL
    pub video_url: String,

    /// Thumbnail image URL
    pub thumbnail_url: Option<String>,

    /// Duration in seconds
    pub duration: Option<f64>,

    /// Relative sort key
    pub order: Option<u32>,
}

/// A study material entry in a course playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistMaterial {
    /// Unique material identifier
    #[serde(rename = "_id")]
    pub id: MaterialId,

    /// Material title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Download URL
    pub file_url: String,

    /// Relative sort key
    pub order: Option<u32>,
}
