//! Earnings summary and payout history endpoints.

use crate::client::{parse_envelope, PortalClient};
use crate::error::Result;
use crate::types::PayoutsQuery;
use gurukul_core::types::{Earnings, Page, Transaction};
use tracing::debug;

/// Client for the partner's earnings data.
pub struct EarningsClient<'a> {
    portal: &'a PortalClient,
    base_url: String,
    access_token: String,
}

impl<'a> EarningsClient<'a> {
    pub(crate) fn new(portal: &'a PortalClient, base_url: String, access_token: String) -> Self {
        Self {
            portal,
            base_url,
            access_token,
        }
    }

    /// Fetch the earnings summary: totals, balance, monthly series and
    /// recent transactions.
    pub async fn summary(&self) -> Result<Earnings> {
        let url = format!("{}/api/v1/partner/earnings", self.base_url);
        debug!(url = %url, "Fetching earnings summary");

        let response = self
            .portal
            .http()
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "earnings summary").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Page through past payout transactions.
    pub async fn payout_history(&self, query: &PayoutsQuery) -> Result<Page<Transaction>> {
        let url = format!("{}/api/v1/partner/earnings/payouts", self.base_url);
        debug!(url = %url, "Fetching payout history");

        let response = self
            .portal
            .http()
            .get(&url)
            .query(&query.query_pairs())
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "payout history").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }
}
