//! Chat types
//!
//! Conversations pair the partner with a learner. Member and peer ids are
//! plain strings because they reference accounts from either side of the
//! platform, not just partner accounts.

use super::ids::ConversationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal account summary for the other side of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPeer {
    /// Account identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: Option<String>,

    /// Contact phone
    pub phone: Option<String>,

    /// Account role string as reported by the backend
    pub role: Option<String>,
}

/// A conversation the partner takes part in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation identifier
    #[serde(rename = "_id")]
    pub id: ConversationId,

    /// Account ids of both members
    pub members: Vec<String>,

    /// Preview of the most recent message
    pub last_message: String,

    /// When the conversation last changed
    pub updated_at: DateTime<Utc>,

    /// The non-partner member, when the backend can resolve it
    pub other_user: Option<ChatPeer>,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Conversation this message belongs to
    pub conversation_id: ConversationId,

    /// Sending account
    pub sender_id: String,

    /// Receiving account
    pub receiver_id: String,

    /// Message text
    pub text: String,

    /// Attachment URLs
    #[serde(default)]
    pub attachments: Vec<String>,

    /// Whether the receiver has seen the message
    pub seen: bool,

    /// When the message was sent
    pub created_at: DateTime<Utc>,
}
