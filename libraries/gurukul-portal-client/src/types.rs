//! Types for portal API requests and responses.

use chrono::{DateTime, Utc};
use gurukul_core::types::PartnerUser;
use serde::{Deserialize, Serialize};

/// Default backend URL used when no environment override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable consulted by [`PortalConfig::from_env`].
pub const BASE_URL_ENV: &str = "GURUKUL_API_URL";

/// Configuration for connecting to the portal backend.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the backend (e.g., "https://api.gurukul.example.com")
    pub base_url: String,
    /// Current access token (if authenticated)
    pub access_token: Option<String>,
}

impl PortalConfig {
    /// Create a new config with just the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
        }
    }

    /// Create a config with a stored access token.
    pub fn with_token(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: Some(access_token.into()),
        }
    }

    /// Build a config from the environment, falling back to the local
    /// development backend when `GURUKUL_API_URL` is unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

/// Standard response wrapper used by every portal endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the backend considers the call successful
    pub success: bool,
    /// Human-readable status or error message
    pub message: String,
    /// The payload
    pub data: T,
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Established session returned by login and OTP verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// The signed-in partner account
    pub user: PartnerUser,
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Present on the wire but unused: the portal has no refresh endpoint
    pub refresh_token: Option<String>,
}

/// Registration details collected from the signup form.
#[derive(Debug, Clone)]
pub struct RegisterPartner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization_name: String,
    pub course_specialization: String,
    pub pincode: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Wire payload for the register endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: &'static str,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub organization_name: String,
    pub course_specialization: String,
    pub pincode: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendOtpRequest {
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyRegisterOtpRequest {
    pub phone: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyResetOtpRequest {
    pub phone: String,
    pub code: String,
    pub new_password: String,
}

// =============================================================================
// Course & Playlist Types
// =============================================================================

/// Payload for creating a course.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_certificate_course: Option<bool>,
}

/// Partial course update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_certificate_course: Option<bool>,
}

/// Upsert payload for a course playlist.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistUpsert {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Payload for adding a playlist video.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Partial video update: absent fields are left untouched.
///
/// Also the carrier for reorder assignments, where only `order` is set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl VideoUpdate {
    /// A reorder-only update.
    pub fn order(order: u32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }
}

/// Payload for adding a playlist material.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaterial {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Partial material update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl MaterialUpdate {
    /// A reorder-only update.
    pub fn order(order: u32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// Payload for creating an event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_opens_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_closes_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
}

/// Partial event update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_opens_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_closes_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
}

/// Filters for the event listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct EventsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Free-text search
    pub q: Option<String>,
    pub status: Option<gurukul_core::types::EventStatus>,
}

impl EventsQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

// =============================================================================
// Earnings Types
// =============================================================================

/// Paging for the payout history endpoint.
#[derive(Debug, Clone, Default)]
pub struct PayoutsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PayoutsQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Read-state filter for the notification listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFilter {
    /// Read and unread alike
    All,
    /// Only unread
    Unread,
    /// Only read
    Read,
}

impl ReadFilter {
    /// Convert the filter to its query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadFilter::All => "all",
            ReadFilter::Unread => "unread",
            ReadFilter::Read => "read",
        }
    }
}

/// Filters for the notification listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct NotificationsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub read: Option<ReadFilter>,
}

impl NotificationsQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(read) = self.read {
            pairs.push(("read", read.as_str().to_string()));
        }
        pairs
    }
}

// =============================================================================
// Chat Types
// =============================================================================

/// Paging for the conversation message listing.
#[derive(Debug, Clone, Default)]
pub struct MessagesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl MessagesQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendMessageRequest {
    pub receiver_id: String,
    pub text: String,
}

// =============================================================================
// Profile Types
// =============================================================================

/// Partial profile update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Review checklist served to accounts whose application is pending.
#[derive(Debug, Deserialize)]
pub(crate) struct OnboardingData {
    #[serde(default)]
    pub steps: Vec<String>,
}

// =============================================================================
// Upload Types
// =============================================================================

/// Response data from an upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    /// Public URL of the stored file
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_updates_omit_unset_fields() {
        let update = VideoUpdate::order(2);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"order": 2}));

        let update = CourseUpdate {
            title: Some("New title".to_string()),
            ..CourseUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"title": "New title"}));
    }

    #[test]
    fn events_query_pairs_skip_unset_filters() {
        let query = EventsQuery {
            page: Some(2),
            status: Some(gurukul_core::types::EventStatus::Published),
            ..EventsQuery::default()
        };

        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("status", "published".to_string())
            ]
        );
    }

    #[test]
    fn config_from_env_falls_back_to_default() {
        // The variable is not set in the test environment
        if std::env::var(BASE_URL_ENV).is_err() {
            assert_eq!(PortalConfig::from_env().base_url, DEFAULT_BASE_URL);
        }
    }
}
