//! Authentication endpoints for the portal backend.

use crate::client::{parse_envelope, read_error_message};
use crate::error::{PortalClientError, Result};
use crate::types::{
    AuthSession, LoginRequest, RegisterPartner, RegisterRequest, SendOtpRequest,
    VerifyRegisterOtpRequest, VerifyResetOtpRequest,
};
use gurukul_core::types::PartnerUser;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Normalize a phone number into E.164 form.
///
/// Numbers without a country code default to India: a leading `0` trunk
/// prefix is replaced by `+91`, and bare digits get `+91` prepended.
/// Already-prefixed numbers pass through untouched.
pub fn normalize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('+') {
        return trimmed.to_string();
    }
    if let Some(rest) = trimmed.strip_prefix('0') {
        return format!("+91{}", rest);
    }
    format!("+91{}", trimmed)
}

/// Authentication client for the portal backend.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with phone and password.
    ///
    /// Returns the established session on success.
    pub async fn login(&self, phone: &str, password: &str) -> Result<AuthSession> {
        let url = format!("{}/api/v1/auth/login", self.base_url);
        let phone = normalize_phone(phone);
        debug!(url = %url, phone = %phone, "Attempting login");

        let request = LoginRequest {
            phone,
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PortalClientError::ServerUnreachable(e.to_string())
                } else {
                    PortalClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let session: AuthSession = parse_envelope(response, "login").await?;

            info!(
                partner_id = %session.user.id,
                status = %session.user.status.as_str(),
                "Login successful"
            );

            Ok(session)
        } else if status.as_u16() == 401 {
            let message = read_error_message(response).await;
            warn!(status = %status, error = %message, "Login failed: invalid credentials");
            Err(PortalClientError::AuthFailed(
                "Invalid phone or password".to_string(),
            ))
        } else {
            let message = read_error_message(response).await;
            Err(PortalClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Submit a partnership application.
    pub async fn register(&self, input: RegisterPartner) -> Result<AuthSession> {
        let url = format!("{}/api/v1/auth/register", self.base_url);
        debug!(url = %url, "Submitting partner registration");

        let request = RegisterRequest {
            name: format!("{} {}", input.first_name, input.last_name)
                .trim()
                .to_string(),
            phone: normalize_phone(&input.phone),
            email: input.email,
            role: "partner",
            password: input.password,
            avatar: input.avatar,
            organization_name: input.organization_name,
            course_specialization: input.course_specialization,
            pincode: input.pincode,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PortalClientError::ServerUnreachable(e.to_string())
                } else {
                    PortalClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let session: AuthSession = parse_envelope(response, "registration").await?;

            info!(partner_id = %session.user.id, "Registration submitted");
            Ok(session)
        } else {
            let message = read_error_message(response).await;
            warn!(status = %status, error = %message, "Registration failed");
            Err(PortalClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Request a registration OTP.
    pub async fn send_register_otp(&self, phone: &str) -> Result<()> {
        let url = format!("{}/api/v1/auth/send-register-otp", self.base_url);
        self.send_otp(&url, phone, "registration OTP").await
    }

    /// Verify a registration OTP, establishing a session.
    pub async fn verify_register_otp(&self, phone: &str, code: &str) -> Result<AuthSession> {
        let url = format!("{}/api/v1/auth/verify-register-otp", self.base_url);
        debug!(url = %url, "Verifying registration OTP");

        let request = VerifyRegisterOtpRequest {
            phone: normalize_phone(phone),
            code: code.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PortalClientError::ServerUnreachable(e.to_string())
                } else {
                    PortalClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let session: AuthSession = parse_envelope(response, "OTP verification").await?;

            info!(partner_id = %session.user.id, "Registration OTP verified");
            Ok(session)
        } else if status.as_u16() == 401 {
            let message = read_error_message(response).await;
            warn!(status = %status, error = %message, "OTP verification failed");
            Err(PortalClientError::AuthFailed(
                "Invalid or expired OTP".to_string(),
            ))
        } else {
            let message = read_error_message(response).await;
            Err(PortalClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Request a password-reset OTP.
    pub async fn send_reset_otp(&self, phone: &str) -> Result<()> {
        let url = format!("{}/api/v1/auth/send-reset-otp", self.base_url);
        self.send_otp(&url, phone, "password-reset OTP").await
    }

    /// Verify a password-reset OTP and set the new password.
    pub async fn verify_reset_otp(&self, phone: &str, code: &str, new_password: &str) -> Result<()> {
        let url = format!("{}/api/v1/auth/verify-reset-otp", self.base_url);
        debug!(url = %url, "Verifying password-reset OTP");

        let request = VerifyResetOtpRequest {
            phone: normalize_phone(phone),
            code: code.to_string(),
            new_password: new_password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PortalClientError::ServerUnreachable(e.to_string())
                } else {
                    PortalClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            info!("Password reset complete");
            Ok(())
        } else if status.as_u16() == 401 {
            let message = read_error_message(response).await;
            warn!(status = %status, error = %message, "Password-reset OTP rejected");
            Err(PortalClientError::AuthFailed(
                "Invalid or expired OTP".to_string(),
            ))
        } else {
            let message = read_error_message(response).await;
            Err(PortalClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Fetch the account behind an access token.
    pub async fn current_user(&self, access_token: &str) -> Result<PartnerUser> {
        let url = format!("{}/api/v1/users/profile", self.base_url);
        debug!(url = %url, "Fetching current partner");

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PortalClientError::ServerUnreachable(e.to_string())
                } else {
                    PortalClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let user: PartnerUser = parse_envelope(response, "current user").await?;
            Ok(user)
        } else if status.as_u16() == 401 {
            Err(PortalClientError::AuthRequired)
        } else {
            let message = read_error_message(response).await;
            Err(PortalClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Shared POST for the two OTP-request endpoints.
    async fn send_otp(&self, url: &str, phone: &str, what: &str) -> Result<()> {
        debug!(url = %url, "Requesting {}", what);

        let request = SendOtpRequest {
            phone: normalize_phone(phone),
        };

        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PortalClientError::ServerUnreachable(e.to_string())
                } else {
                    PortalClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            debug!("{} sent", what);
            Ok(())
        } else {
            let message = read_error_message(response).await;
            Err(PortalClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
