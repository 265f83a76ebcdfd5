//! Notification types

use super::ids::NotificationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification addressed to the partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier
    #[serde(rename = "_id")]
    pub id: NotificationId,

    /// Short headline
    pub title: String,

    /// Message body
    pub body: String,

    /// When the notification was created
    pub created_at: DateTime<Utc>,

    /// When the partner read it, if they have
    pub read_at: Option<DateTime<Utc>>,

    /// Backend-defined category tag
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Notification {
    /// Whether the notification has been read.
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}
