//! Partner profile endpoints.

use crate::client::{parse_envelope, PortalClient};
use crate::error::Result;
use crate::types::{OnboardingData, PasswordChangeRequest, ProfileUpdate};
use gurukul_core::types::PartnerUser;
use tracing::{debug, info};

/// Client for the partner's own profile.
pub struct ProfileClient<'a> {
    portal: &'a PortalClient,
    base_url: String,
    access_token: String,
}

impl<'a> ProfileClient<'a> {
    pub(crate) fn new(portal: &'a PortalClient, base_url: String, access_token: String) -> Self {
        Self {
            portal,
            base_url,
            access_token,
        }
    }

    /// Fetch the partner's profile.
    pub async fn get(&self) -> Result<PartnerUser> {
        let url = format!("{}/api/v1/partner/profile", self.base_url);
        debug!(url = %url, "Fetching profile");

        let response = self
            .portal
            .http()
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "profile").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Apply a partial update to the partner's profile.
    ///
    /// Phone numbers are normalized before sending, same as at login.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<PartnerUser> {
        let url = format!("{}/api/v1/partner/profile", self.base_url);
        debug!(url = %url, "Updating profile");

        let update = ProfileUpdate {
            phone: update
                .phone
                .as_deref()
                .map(crate::auth::normalize_phone),
            ..update.clone()
        };

        let response = self
            .portal
            .http()
            .patch(&url)
            .bearer_auth(&self.access_token)
            .json(&update)
            .send()
            .await?;

        if response.status().is_success() {
            let user: PartnerUser = parse_envelope(response, "updated profile").await?;
            info!(partner_id = %user.id, "Profile updated");
            Ok(user)
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Change the account password.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        let url = format!("{}/api/v1/partner/profile/password", self.base_url);
        debug!(url = %url, "Changing password");

        let request = PasswordChangeRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };

        let response = self
            .portal
            .http()
            .patch(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            info!("Password changed");
            Ok(())
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Fetch the review checklist shown while the application is pending.
    ///
    /// The backend may answer with an empty list; callers supply their own
    /// wording in that case.
    pub async fn onboarding_steps(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/v1/partner/onboarding", self.base_url);
        debug!(url = %url, "Fetching onboarding steps");

        let response = self
            .portal
            .http()
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            let data: OnboardingData = parse_envelope(response, "onboarding steps").await?;
            Ok(data.steps)
        } else {
            Err(self.portal.response_error(response).await)
        }
    }
}
