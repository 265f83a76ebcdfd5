//! Domain types for the partner portal.
//!
//! Everything here mirrors the backend's wire format: camelCase field names
//! and `_id` primary keys, so the records (de)serialize directly from API
//! payloads.

mod chat;
mod course;
mod earnings;
mod event;
mod ids;
mod notification;
mod page;
mod playlist;
mod user;

pub use chat::{ChatMessage, ChatPeer, Conversation};
pub use course::Course;
pub use earnings::{Earnings, MonthlyAmount, Transaction, TransactionKind, TransactionStatus};
pub use event::{EventStatus, EventWithAnalytics, PartnerEvent};
pub use ids::{
    BookingId, ConversationId, CourseId, EventId, MaterialId, NotificationId, PartnerId,
    PlaylistId, VideoId,
};
pub use notification::Notification;
pub use page::Page;
pub use playlist::{CoursePlaylist, PlaylistMaterial, PlaylistVideo};
pub use user::{AccountStatus, PartnerRole, PartnerUser};
