//! Gurukul Partner Portal Core
//!
//! Platform-agnostic domain types and decision logic for the partner portal.
//!
//! This crate provides the foundational building blocks shared by the portal
//! API client and the session layer. It performs no I/O.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PartnerUser`, `Course`, `CoursePlaylist`, `PartnerEvent`, etc.
//! - **Route Guard**: the pure redirect decision table (`guard::decide_redirect`)
//! - **Reorder Planning**: the pairwise order-swap planner (`reorder::plan_move`)
//!
//! # Example
//!
//! ```rust
//! use gurukul_core::guard::{decide_redirect, RedirectTarget, SessionState};
//!
//! // An anonymous visitor on a protected page is sent to login
//! let redirect = decide_redirect(&SessionState::Anonymous, "/partner/dashboard");
//! assert_eq!(redirect, Some(RedirectTarget::Login));
//!
//! // While the session is still resolving, nothing happens
//! assert_eq!(decide_redirect(&SessionState::Loading, "/partner/dashboard"), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod guard;
pub mod reorder;
pub mod types;

// Re-export commonly used types
pub use guard::{decide_redirect, landing_route, RedirectTarget, SessionState};
pub use reorder::{plan_move, MoveDirection, OrderAssignment, SwapPlan};

// Export all types
pub use types::{
    // Identifiers
    BookingId, ConversationId, CourseId, EventId, MaterialId, NotificationId, PartnerId,
    PlaylistId, VideoId,
    // Accounts
    AccountStatus, PartnerRole, PartnerUser,
    // Courses and playlists
    Course, CoursePlaylist, PlaylistMaterial, PlaylistVideo,
    // Events
    EventStatus, EventWithAnalytics, PartnerEvent,
    // Earnings
    Earnings, MonthlyAmount, Transaction, TransactionKind, TransactionStatus,
    // Notifications
    Notification,
    // Chat
    ChatMessage, ChatPeer, Conversation,
    // Pagination
    Page,
};
