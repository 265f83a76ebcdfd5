//! Event management and booking review endpoints.

use crate::client::{parse_envelope, PortalClient};
use crate::error::Result;
use crate::types::{EventUpdate, EventsQuery, NewEvent};
use gurukul_core::types::{BookingId, EventId, EventWithAnalytics, Page, PartnerEvent};
use tracing::{debug, info};

/// Client for the partner's events.
#[derive(Debug)]
pub struct EventsClient<'a> {
    portal: &'a PortalClient,
    base_url: String,
    access_token: String,
}

impl<'a> EventsClient<'a> {
    pub(crate) fn new(portal: &'a PortalClient, base_url: String, access_token: String) -> Self {
        Self {
            portal,
            base_url,
            access_token,
        }
    }

    /// List events, newest first, filtered and paged by `query`.
    pub async fn list(&self, query: &EventsQuery) -> Result<Page<PartnerEvent>> {
        let url = format!("{}/api/v1/partner/events", self.base_url);
        debug!(url = %url, "Listing events");

        let response = self
            .portal
            .http()
            .get(&url)
            .query(&query.query_pairs())
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "event list").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Fetch a single event along with its analytics counters.
    pub async fn get(&self, event_id: &EventId) -> Result<EventWithAnalytics> {
        let url = format!("{}/api/v1/partner/events/{}", self.base_url, event_id);
        debug!(url = %url, "Fetching event");

        let response = self
            .portal
            .http()
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "event").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Create an event.
    pub async fn create(&self, event: &NewEvent) -> Result<PartnerEvent> {
        let url = format!("{}/api/v1/partner/events", self.base_url);
        debug!(url = %url, title = %event.title, "Creating event");

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(event)
            .send()
            .await?;

        if response.status().is_success() {
            let created: PartnerEvent = parse_envelope(response, "created event").await?;
            info!(event_id = %created.id, "Event created");
            Ok(created)
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Apply a partial update to an event.
    pub async fn update(&self, event_id: &EventId, update: &EventUpdate) -> Result<PartnerEvent> {
        let url = format!("{}/api/v1/partner/events/{}", self.base_url, event_id);
        debug!(url = %url, "Updating event");

        let response = self
            .portal
            .http()
            .patch(&url)
            .bearer_auth(&self.access_token)
            .json(update)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "updated event").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Delete an event.
    pub async fn delete(&self, event_id: &EventId) -> Result<()> {
        let url = format!("{}/api/v1/partner/events/{}", self.base_url, event_id);
        debug!(url = %url, "Deleting event");

        let response = self
            .portal
            .http()
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            info!(event_id = %event_id, "Event deleted");
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Approve a pending booking on one of the partner's events.
    pub async fn approve_booking(&self, event_id: &EventId, booking_id: &BookingId) -> Result<()> {
        self.review_booking(event_id, booking_id, "approve").await
    }

    /// Reject a pending booking on one of the partner's events.
    pub async fn reject_booking(&self, event_id: &EventId, booking_id: &BookingId) -> Result<()> {
        self.review_booking(event_id, booking_id, "reject").await
    }

    async fn review_booking(
        &self,
        event_id: &EventId,
        booking_id: &BookingId,
        verdict: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/api/v1/partner/events/{}/bookings/{}/{}",
            self.base_url, event_id, booking_id, verdict
        );
        debug!(url = %url, "Reviewing booking");

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            info!(event_id = %event_id, booking_id = %booking_id, verdict, "Booking reviewed");
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }
}
