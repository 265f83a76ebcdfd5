//! Notification feed endpoints.

use crate::client::{parse_envelope, PortalClient};
use crate::error::Result;
use crate::types::NotificationsQuery;
use gurukul_core::types::{Notification, NotificationId, Page};
use tracing::debug;

/// Client for the partner's notification feed.
pub struct NotificationsClient<'a> {
    portal: &'a PortalClient,
    base_url: String,
    access_token: String,
}

impl<'a> NotificationsClient<'a> {
    pub(crate) fn new(portal: &'a PortalClient, base_url: String, access_token: String) -> Self {
        Self {
            portal,
            base_url,
            access_token,
        }
    }

    /// List notifications, newest first, optionally filtered by read state.
    pub async fn list(&self, query: &NotificationsQuery) -> Result<Page<Notification>> {
        let url = format!("{}/api/v1/notifications", self.base_url);
        debug!(url = %url, "Listing notifications");

        let response = self
            .portal
            .http()
            .get(&url)
            .query(&query.query_pairs())
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "notification list").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Mark one notification as read.
    pub async fn mark_read(&self, notification_id: &NotificationId) -> Result<()> {
        let url = format!(
            "{}/api/v1/notifications/{}/read",
            self.base_url, notification_id
        );
        debug!(url = %url, "Marking notification read");

        let response = self
            .portal
            .http()
            .patch(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Mark one notification as unread again.
    pub async fn mark_unread(&self, notification_id: &NotificationId) -> Result<()> {
        let url = format!(
            "{}/api/v1/notifications/{}/unread",
            self.base_url, notification_id
        );
        debug!(url = %url, "Marking notification unread");

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Mark every notification as read.
    pub async fn mark_all_read(&self) -> Result<()> {
        let url = format!("{}/api/v1/notifications/read-all", self.base_url);
        debug!(url = %url, "Marking all notifications read");

        let response = self
            .portal
            .http()
            .patch(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }
}
