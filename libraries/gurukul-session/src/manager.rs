use crate::cache::{StaleCell, SESSION_STALE_AFTER};
use crate::error::Result;
use gurukul_core::guard::{decide_redirect, landing_route, RedirectTarget, SessionState};
use gurukul_core::types::PartnerUser;
use gurukul_portal_client::{PortalClient, ProfileUpdate};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Resolves and caches the signed-in partner, and evaluates the route
/// guard for navigations.
///
/// The session is one cache entry: the resolved account (or a resolved
/// "nobody is signed in") is trusted for [`SESSION_STALE_AFTER`] and then
/// re-verified. Login, logout and profile updates invalidate it
/// explicitly, and a server-side revocation consumed from the client does
/// too, so every navigation decision works from the most recently
/// confirmed state.
pub struct SessionManager {
    client: Arc<PortalClient>,
    cache: Mutex<StaleCell<Option<PartnerUser>>>,
}

impl SessionManager {
    /// Create a manager with the default staleness window.
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self::with_staleness(client, SESSION_STALE_AFTER)
    }

    /// Create a manager that re-verifies the session after `stale_after`.
    pub fn with_staleness(client: Arc<PortalClient>, stale_after: Duration) -> Self {
        Self {
            client,
            cache: Mutex::new(StaleCell::new(stale_after)),
        }
    }

    /// The underlying portal client.
    pub fn client(&self) -> &Arc<PortalClient> {
        &self.client
    }

    /// Resolve the current session, consulting the cache first.
    ///
    /// A fetch failure resolves to [`SessionState::Anonymous`] without
    /// caching the failure, so the next evaluation retries.
    pub async fn current(&self) -> SessionState {
        // Lock held across the fetch so concurrent evaluations coalesce
        // into a single request
        let mut cache = self.cache.lock().await;

        if let Some(cached) = cache.get() {
            return match cached {
                Some(user) => SessionState::Authenticated(user.clone()),
                None => SessionState::Anonymous,
            };
        }

        match self.client.current_user().await {
            Ok(user) => {
                cache.set(user.clone());
                match user {
                    Some(user) => SessionState::Authenticated(user),
                    None => SessionState::Anonymous,
                }
            }
            Err(e) => {
                warn!(error = %e, "Session fetch failed, treating as anonymous");
                SessionState::Anonymous
            }
        }
    }

    /// The last known state, without touching the network.
    ///
    /// [`SessionState::Loading`] until the first resolution; after that,
    /// the cached verdict even when it has gone stale.
    pub async fn snapshot(&self) -> SessionState {
        let cache = self.cache.lock().await;
        match cache.peek() {
            None => SessionState::Loading,
            Some(Some(user)) => SessionState::Authenticated(user.clone()),
            Some(None) => SessionState::Anonymous,
        }
    }

    /// Forget the cached session; the next evaluation re-fetches.
    pub async fn invalidate(&self) {
        self.cache.lock().await.invalidate();
        debug!("Session cache invalidated");
    }

    /// Sign in and return the route the partner should land on.
    pub async fn login(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<(PartnerUser, RedirectTarget)> {
        let session = self.client.login(phone, password).await?;
        self.invalidate().await;

        let landing = landing_route(&session.user);
        info!(
            partner_id = %session.user.id,
            landing = landing.path(),
            "Partner signed in"
        );
        Ok((session.user, landing))
    }

    /// Sign out and drop the cached session.
    pub async fn logout(&self) {
        self.client.logout().await;
        self.invalidate().await;
    }

    /// Update the partner's profile.
    ///
    /// The session record is the profile, so the cache is invalidated and
    /// the next evaluation sees the updated account.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<PartnerUser> {
        let user = self.client.profile().await?.update(update).await?;
        self.invalidate().await;
        Ok(user)
    }

    /// Evaluate the route guard for a navigation to `path`.
    ///
    /// Consumes a pending server-side revocation first: any number of
    /// rejected requests collapse into a single re-resolution, and only
    /// one navigation gets bounced to login. Safe to re-run on every
    /// navigation, since redirect targets never redirect away from
    /// themselves.
    pub async fn check_route(&self, path: &str) -> Option<RedirectTarget> {
        if self.client.take_session_revoked() {
            info!("Session revoked by the server, re-resolving");
            self.invalidate().await;
        }

        let session = self.current().await;
        decide_redirect(&session, path)
    }
}
