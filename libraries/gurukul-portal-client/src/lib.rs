//! Gurukul Portal Client
//!
//! HTTP client library for the Gurukul partner portal API.
//!
//! # Features
//!
//! - **Authentication**: Phone/password login, OTP flows, password reset
//! - **Courses**: Course creation and updates, playlist videos and
//!   materials, reordering
//! - **Events**: Event CRUD, booking approval and rejection
//! - **Earnings**: Summary and payout history
//! - **Inbox**: Notifications and chat
//! - **Profile**: Account details, password change, onboarding status
//! - **Uploads**: Multipart file uploads for portal assets
//!
//! Every authenticated request carries the stored bearer token. If the
//! server answers 401, the client clears the credential once and raises a
//! flag the caller can consume to route the partner back to login.
//!
//! # Example
//!
//! ```ignore
//! use gurukul_portal_client::{PortalClient, PortalConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PortalConfig::new("https://api.gurukul.example.com");
//!     let client = PortalClient::new(config)?;
//!
//!     // Login
//!     let session = client.login("9876543210", "secret").await?;
//!     println!("Logged in as {}", session.user.name);
//!
//!     // List courses
//!     let courses = client.courses().await?.list().await?;
//!     println!("Found {} courses", courses.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod chat;
mod client;
mod courses;
mod earnings;
mod error;
mod events;
mod notifications;
mod profile;
mod types;
mod uploads;

// Re-export main types
pub use client::PortalClient;
pub use error::{PortalClientError, Result};
pub use types::{
    AuthSession, CourseUpdate, Envelope, EventUpdate, EventsQuery, MaterialUpdate, MessagesQuery,
    NewCourse, NewEvent, NewMaterial, NewVideo, NotificationsQuery, PayoutsQuery, PlaylistUpsert,
    PortalConfig, ProfileUpdate, ReadFilter, RegisterPartner, UploadedFile, VideoUpdate,
};

// Re-export sub-clients for direct use if needed
pub use auth::{normalize_phone, AuthClient};
pub use chat::ChatClient;
pub use courses::CoursesClient;
pub use earnings::EarningsClient;
pub use events::EventsClient;
pub use notifications::NotificationsClient;
pub use profile::ProfileClient;
pub use uploads::UploadsClient;
