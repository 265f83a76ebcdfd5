//! Partner account types

use super::ids::PartnerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a portal account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerRole {
    /// Applied for partnership, not yet approved
    PartnerRequest,
    /// Approved partner
    Partner,
}

impl PartnerRole {
    /// Convert role to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerRole::PartnerRequest => "partner_request",
            PartnerRole::Partner => "partner",
        }
    }

    /// Parse role from its wire string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "partner_request" => Some(PartnerRole::PartnerRequest),
            "partner" => Some(PartnerRole::Partner),
            _ => None,
        }
    }
}

/// Review status of a partner account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Account in good standing
    Active,
    /// Awaiting backend-side processing
    Pending,
    /// Temporarily disabled by an admin
    Suspended,
    /// Application submitted, under review
    PendingApproval,
    /// Application approved
    Approved,
    /// Application rejected
    Rejected,
}

impl AccountStatus {
    /// Convert status to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Pending => "pending",
            AccountStatus::Suspended => "suspended",
            AccountStatus::PendingApproval => "pending_approval",
            AccountStatus::Approved => "approved",
            AccountStatus::Rejected => "rejected",
        }
    }

    /// Parse status from its wire string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(AccountStatus::Active),
            "pending" => Some(AccountStatus::Pending),
            "suspended" => Some(AccountStatus::Suspended),
            "pending_approval" => Some(AccountStatus::PendingApproval),
            "approved" => Some(AccountStatus::Approved),
            "rejected" => Some(AccountStatus::Rejected),
            _ => None,
        }
    }
}

/// Partner account as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUser {
    /// Unique account identifier
    #[serde(rename = "_id")]
    pub id: PartnerId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone in E.164 form
    pub phone: Option<String>,

    /// Account role
    pub role: PartnerRole,

    /// Review status
    pub status: AccountStatus,

    /// Avatar image URL
    pub avatar: Option<String>,

    /// Account creation timestamp
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl PartnerUser {
    /// Whether this account still has to finish the onboarding flow.
    ///
    /// True while the application is under review or the account has not
    /// been promoted past the request role.
    pub fn requires_onboarding(&self) -> bool {
        self.status == AccountStatus::PendingApproval || self.role == PartnerRole::PartnerRequest
    }

    /// Whether this account's application was rejected.
    pub fn is_rejected(&self) -> bool {
        self.status == AccountStatus::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: PartnerRole, status: AccountStatus) -> PartnerUser {
        PartnerUser {
            id: PartnerId::new("p-1"),
            name: "Asha".to_string(),
            email: None,
            phone: None,
            role,
            status,
            avatar: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn role_string_conversion() {
        assert_eq!(PartnerRole::PartnerRequest.as_str(), "partner_request");
        assert_eq!(PartnerRole::from_str("partner"), Some(PartnerRole::Partner));
        assert_eq!(PartnerRole::from_str("admin"), None);
    }

    #[test]
    fn status_string_conversion() {
        assert_eq!(AccountStatus::PendingApproval.as_str(), "pending_approval");
        assert_eq!(
            AccountStatus::from_str("rejected"),
            Some(AccountStatus::Rejected)
        );
        assert_eq!(AccountStatus::from_str("unknown"), None);
    }

    #[test]
    fn onboarding_required_for_pending_approval_and_requests() {
        assert!(user(PartnerRole::Partner, AccountStatus::PendingApproval).requires_onboarding());
        assert!(user(PartnerRole::PartnerRequest, AccountStatus::Active).requires_onboarding());
        assert!(!user(PartnerRole::Partner, AccountStatus::Active).requires_onboarding());
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "_id": "64f1a2b3c4d5e6f7a8b9c0d1",
            "name": "Asha Verma",
            "email": "asha@example.com",
            "role": "partner",
            "status": "pending_approval",
            "createdAt": "2024-03-01T09:30:00.000Z"
        }"#;

        let user: PartnerUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "64f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(user.status, AccountStatus::PendingApproval);
        assert_eq!(user.phone, None);
        assert!(user.created_at.is_some());
        assert!(user.requires_onboarding());
    }
}
