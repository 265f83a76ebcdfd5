//! Main portal client.

use crate::auth::AuthClient;
use crate::chat::ChatClient;
use crate::courses::CoursesClient;
use crate::earnings::EarningsClient;
use crate::error::{PortalClientError, Result};
use crate::events::EventsClient;
use crate::notifications::NotificationsClient;
use crate::profile::ProfileClient;
use crate::types::{AuthSession, Envelope, PortalConfig, RegisterPartner};
use crate::uploads::UploadsClient;
use gurukul_core::types::PartnerUser;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Main client for the Gurukul partner portal API.
///
/// The client owns the bearer credential and applies the portal's one
/// cross-cutting auth rule: any authenticated call answered with HTTP 401
/// clears the credential and arms a one-shot revocation flag, after which
/// further authenticated calls fail fast with [`PortalClientError::AuthRequired`]
/// instead of hitting the network again. The session layer consumes the
/// flag via [`PortalClient::take_session_revoked`] to trigger a single
/// redirect to login, so concurrent 401 responses can never cause a
/// redirect storm or a request loop.
///
/// # Example
///
/// ```ignore
/// use gurukul_portal_client::{PortalClient, PortalConfig};
///
/// let client = PortalClient::new(PortalConfig::from_env())?;
///
/// // Login stores the bearer token for subsequent requests
/// let session = client.login("98765 43210", "secret").await?;
/// println!("Signed in as {}", session.user.name);
///
/// // Resource clients require the stored credential
/// let courses = client.courses().await?.list().await?;
/// println!("Managing {} courses", courses.len());
/// ```
#[derive(Debug)]
pub struct PortalClient {
    http: Client,
    config: Arc<RwLock<PortalConfig>>,
    revoked: AtomicBool,
}

impl PortalClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PortalConfig) -> Result<Self> {
        // Validate URL
        if config.base_url.is_empty() {
            return Err(PortalClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(PortalClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = PortalConfig {
            base_url,
            access_token: config.access_token,
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("GurukulPortal/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PortalClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
            revoked: AtomicBool::new(false),
        })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(PortalConfig::from_env())
    }

    /// Get the backend base URL.
    pub async fn base_url(&self) -> String {
        self.config.read().await.base_url.clone()
    }

    /// Check if the client has an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Get the current access token.
    pub async fn token(&self) -> Option<String> {
        self.config.read().await.access_token.clone()
    }

    /// Store an access token directly (e.g., restored from the keychain).
    ///
    /// Also disarms any pending revocation flag: a fresh credential starts
    /// a fresh session.
    pub async fn set_token(&self, access_token: String) {
        let mut config = self.config.write().await;
        config.access_token = Some(access_token);
        self.revoked.store(false, Ordering::SeqCst);
    }

    /// Login with phone and password.
    ///
    /// On success, the access token is stored for subsequent requests.
    pub async fn login(&self, phone: &str, password: &str) -> Result<AuthSession> {
        let base_url = self.base_url().await;

        let auth_client = AuthClient::new(&self.http, &base_url);
        let session = auth_client.login(phone, password).await?;

        self.set_token(session.access_token.clone()).await;

        Ok(session)
    }

    /// Submit a partnership application.
    ///
    /// Does not store a credential: the signup flow completes with
    /// [`PortalClient::verify_register_otp`].
    pub async fn register(&self, input: RegisterPartner) -> Result<AuthSession> {
        let base_url = self.base_url().await;

        let auth_client = AuthClient::new(&self.http, &base_url);
        auth_client.register(input).await
    }

    /// Request a registration OTP for the given phone number.
    pub async fn send_register_otp(&self, phone: &str) -> Result<()> {
        let base_url = self.base_url().await;

        let auth_client = AuthClient::new(&self.http, &base_url);
        auth_client.send_register_otp(phone).await
    }

    /// Verify a registration OTP.
    ///
    /// On success, the access token is stored for subsequent requests.
    pub async fn verify_register_otp(&self, phone: &str, code: &str) -> Result<AuthSession> {
        let base_url = self.base_url().await;

        let auth_client = AuthClient::new(&self.http, &base_url);
        let session = auth_client.verify_register_otp(phone, code).await?;

        self.set_token(session.access_token.clone()).await;

        Ok(session)
    }

    /// Request a password-reset OTP for the given phone number.
    pub async fn send_reset_otp(&self, phone: &str) -> Result<()> {
        let base_url = self.base_url().await;

        let auth_client = AuthClient::new(&self.http, &base_url);
        auth_client.send_reset_otp(phone).await
    }

    /// Verify a password-reset OTP and set the new password.
    pub async fn verify_reset_otp(&self, phone: &str, code: &str, new_password: &str) -> Result<()> {
        let base_url = self.base_url().await;

        let auth_client = AuthClient::new(&self.http, &base_url);
        auth_client.verify_reset_otp(phone, code, new_password).await
    }

    /// Clear the stored credential (logout).
    ///
    /// Purely client-side: the portal has no logout endpoint.
    pub async fn logout(&self) {
        let mut config = self.config.write().await;
        config.access_token = None;
        self.revoked.store(false, Ordering::SeqCst);
        info!("Logged out");
    }

    /// Fetch the signed-in partner account.
    ///
    /// Resolves to `Ok(None)` when there is no usable session: either no
    /// credential is stored, or the backend rejected it with 401 (which
    /// also clears the credential per the global rule). Transport and
    /// parse failures surface as errors so callers can fail closed.
    pub async fn current_user(&self) -> Result<Option<PartnerUser>> {
        let config = self.config.read().await;
        let access_token = match &config.access_token {
            Some(t) => t.clone(),
            None => {
                debug!("No stored credential, session is anonymous");
                return Ok(None);
            }
        };
        let base_url = config.base_url.clone();
        drop(config);

        let auth_client = AuthClient::new(&self.http, &base_url);
        match auth_client.current_user(&access_token).await {
            Ok(user) => Ok(Some(user)),
            Err(PortalClientError::AuthRequired) => {
                self.revoke_credential().await;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Consume the pending session-revocation flag.
    ///
    /// Returns `true` exactly once after the backend revoked the session
    /// with a 401, no matter how many concurrent calls observed it. The
    /// session layer uses this to redirect to login a single time.
    pub fn take_session_revoked(&self) -> bool {
        self.revoked.swap(false, Ordering::SeqCst)
    }

    /// Get a client for course and playlist operations.
    ///
    /// Returns an error if not authenticated.
    pub async fn courses(&self) -> Result<CoursesClient<'_>> {
        let (base_url, access_token) = self.authed_parts().await?;
        Ok(CoursesClient::new(self, base_url, access_token))
    }

    /// Get a client for event operations.
    ///
    /// Returns an error if not authenticated.
    pub async fn events(&self) -> Result<EventsClient<'_>> {
        let (base_url, access_token) = self.authed_parts().await?;
        Ok(EventsClient::new(self, base_url, access_token))
    }

    /// Get a client for earnings queries.
    ///
    /// Returns an error if not authenticated.
    pub async fn earnings(&self) -> Result<EarningsClient<'_>> {
        let (base_url, access_token) = self.authed_parts().await?;
        Ok(EarningsClient::new(self, base_url, access_token))
    }

    /// Get a client for notification operations.
    ///
    /// Returns an error if not authenticated.
    pub async fn notifications(&self) -> Result<NotificationsClient<'_>> {
        let (base_url, access_token) = self.authed_parts().await?;
        Ok(NotificationsClient::new(self, base_url, access_token))
    }

    /// Get a client for chat operations.
    ///
    /// Returns an error if not authenticated.
    pub async fn chat(&self) -> Result<ChatClient<'_>> {
        let (base_url, access_token) = self.authed_parts().await?;
        Ok(ChatClient::new(self, base_url, access_token))
    }

    /// Get a client for profile operations.
    ///
    /// Returns an error if not authenticated.
    pub async fn profile(&self) -> Result<ProfileClient<'_>> {
        let (base_url, access_token) = self.authed_parts().await?;
        Ok(ProfileClient::new(self, base_url, access_token))
    }

    /// Get a client for file uploads.
    ///
    /// Returns an error if not authenticated.
    pub async fn uploads(&self) -> Result<UploadsClient<'_>> {
        let (base_url, access_token) = self.authed_parts().await?;
        Ok(UploadsClient::new(self, base_url, access_token))
    }

    /// Snapshot the base URL and credential, or fail fast when anonymous.
    async fn authed_parts(&self) -> Result<(String, String)> {
        let config = self.config.read().await;
        let access_token = config
            .access_token
            .clone()
            .ok_or(PortalClientError::AuthRequired)?;
        Ok((config.base_url.clone(), access_token))
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Clear the credential after a server-side 401.
    ///
    /// Arms the revocation flag only when a credential was actually
    /// present, so concurrent 401 responses collapse into one revocation
    /// and a failed login attempt never arms it.
    pub(crate) async fn revoke_credential(&self) {
        let mut config = self.config.write().await;
        if config.access_token.take().is_some() {
            self.revoked.store(true, Ordering::SeqCst);
            warn!("Session revoked by server, credential cleared");
        }
    }

    /// Map a non-success response to an error, applying the global 401 rule.
    pub(crate) async fn response_error(&self, response: Response) -> PortalClientError {
        let status = response.status();

        if status.as_u16() == 401 {
            self.revoke_credential().await;
            return PortalClientError::AuthRequired;
        }

        let message = read_error_message(response).await;
        PortalClientError::ServerError {
            status: status.as_u16(),
            message,
        }
    }
}

/// Unwrap a successful response's envelope and return its payload.
pub(crate) async fn parse_envelope<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T> {
    let envelope: Envelope<T> = response.json().await.map_err(|e| {
        PortalClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
    })?;
    Ok(envelope.data)
}

/// Pull the backend's error message out of a failed response body.
///
/// Error bodies are usually envelopes too; fall back to the raw text when
/// they are not.
pub(crate) async fn read_error_message(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<Envelope<Option<serde_json::Value>>>(&text) {
        Ok(envelope) if !envelope.message.is_empty() => envelope.message,
        _ => text,
    }
}
