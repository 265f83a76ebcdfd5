//! Event types

use super::ids::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Not yet visible to learners
    Draft,
    /// Open for booking
    Published,
    /// Took place
    Completed,
    /// Called off
    Canceled,
}

impl EventStatus {
    /// Convert status to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Published => "published",
            EventStatus::Completed => "completed",
            EventStatus::Canceled => "canceled",
        }
    }

    /// Parse status from its wire string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(EventStatus::Draft),
            "published" => Some(EventStatus::Published),
            "completed" => Some(EventStatus::Completed),
            "canceled" => Some(EventStatus::Canceled),
            _ => None,
        }
    }
}

/// An event hosted by the partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerEvent {
    /// Unique event identifier
    #[serde(rename = "_id")]
    pub id: EventId,

    /// Event title
    pub title: String,

    /// Long-form description
    pub description: Option<String>,

    /// Scheduled start
    pub starts_at: DateTime<Utc>,

    /// Scheduled end
    pub ends_at: Option<DateTime<Utc>>,

    /// Maximum number of bookings
    pub capacity: Option<u32>,

    /// Bookings taken so far
    pub booked_count: Option<u32>,

    /// Lifecycle status
    pub status: EventStatus,

    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

/// Event detail with engagement analytics, as served by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithAnalytics {
    /// The event record
    #[serde(flatten)]
    pub event: PartnerEvent,

    /// Page view count
    pub views: Option<u64>,

    /// Number of booking requests
    pub bookings_count: Option<u32>,

    /// Revenue attributed to this event
    pub revenue: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_string_conversion() {
        assert_eq!(EventStatus::Canceled.as_str(), "canceled");
        assert_eq!(EventStatus::from_str("published"), Some(EventStatus::Published));
        assert_eq!(EventStatus::from_str("cancelled"), None);
    }

    #[test]
    fn deserializes_event_with_analytics() {
        let json = r#"{
            "_id": "e-1",
            "title": "Live Q&A",
            "startsAt": "2024-06-10T14:00:00.000Z",
            "status": "published",
            "capacity": 100,
            "bookedCount": 42,
            "views": 900,
            "bookingsCount": 45,
            "revenue": 4500.0
        }"#;

        let detail: EventWithAnalytics = serde_json::from_str(json).unwrap();
        assert_eq!(detail.event.status, EventStatus::Published);
        assert_eq!(detail.event.booked_count, Some(42));
        assert_eq!(detail.views, Some(900));
    }
}
