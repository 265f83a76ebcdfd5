//! Route guard decision table
//!
//! Pure routing policy for the portal shell: given the resolved session and
//! the path being visited, decide where (if anywhere) the user must be sent.
//! The first matching rule wins:
//!
//! 1. Session still resolving: stay put.
//! 2. No session on a protected route: go to login.
//! 3. Account still in onboarding review: go to onboarding, unless already there.
//! 4. Rejected account: go to the rejection notice, unless already there.
//! 5. Signed-in account on a public route: go to the dashboard.
//! 6. Otherwise: stay put.
//!
//! Every redirect destination maps to "stay put" when re-evaluated there, so
//! repeated evaluation cannot oscillate. This is advisory UX routing only;
//! the backend remains the authority on every request.

use crate::types::PartnerUser;

/// Login page route
pub const LOGIN_ROUTE: &str = "/partner/login";
/// Registration page route
pub const REGISTER_ROUTE: &str = "/partner/register";
/// Onboarding/review status page route
pub const ONBOARDING_ROUTE: &str = "/partner/onboarding";
/// Password reset page route
pub const FORGOT_PASSWORD_ROUTE: &str = "/partner/forgot-password";
/// Rejection notice page route
pub const REJECTED_ROUTE: &str = "/partner/rejected";
/// Dashboard route
pub const DASHBOARD_ROUTE: &str = "/partner/dashboard";

/// Route prefixes reachable without a session
pub const PUBLIC_ROUTE_PREFIXES: [&str; 4] = [
    LOGIN_ROUTE,
    REGISTER_ROUTE,
    ONBOARDING_ROUTE,
    FORGOT_PASSWORD_ROUTE,
];

/// Whether a path is reachable without a session.
///
/// Prefix matching, so nested pages like `/partner/onboarding/documents`
/// inherit the exemption of their section.
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTE_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Resolved session state fed into the guard
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The session has not been resolved yet
    Loading,
    /// No session: no credential, or the session fetch failed
    Anonymous,
    /// A signed-in partner account
    Authenticated(PartnerUser),
}

impl SessionState {
    /// The signed-in account, if any.
    pub fn user(&self) -> Option<&PartnerUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Where the guard sends the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Send to the login page
    Login,
    /// Send to the onboarding/review page
    Onboarding,
    /// Send to the rejection notice
    Rejected,
    /// Send to the dashboard
    Dashboard,
}

impl RedirectTarget {
    /// The route this target points at.
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => LOGIN_ROUTE,
            RedirectTarget::Onboarding => ONBOARDING_ROUTE,
            RedirectTarget::Rejected => REJECTED_ROUTE,
            RedirectTarget::Dashboard => DASHBOARD_ROUTE,
        }
    }
}

/// Decide whether the current navigation must be redirected.
///
/// Returns `None` to stay put. Pure function of its inputs, so it is safe
/// to re-run on every navigation and session change.
pub fn decide_redirect(state: &SessionState, current_path: &str) -> Option<RedirectTarget> {
    let user = match state {
        SessionState::Loading => return None,
        SessionState::Anonymous => {
            if is_public_route(current_path) {
                return None;
            }
            return Some(RedirectTarget::Login);
        }
        SessionState::Authenticated(user) => user,
    };

    // Review gates come before the public-route bounce so an account that
    // is pending or rejected lands on its status page even from login.
    if user.requires_onboarding() {
        if current_path.starts_with(ONBOARDING_ROUTE) {
            return None;
        }
        return Some(RedirectTarget::Onboarding);
    }

    if user.is_rejected() {
        if current_path.starts_with(REJECTED_ROUTE) {
            return None;
        }
        return Some(RedirectTarget::Rejected);
    }

    if is_public_route(current_path) {
        return Some(RedirectTarget::Dashboard);
    }

    None
}

/// Where a freshly signed-in account should land.
///
/// Same policy as the guard, evaluated as if arriving from the login page.
pub fn landing_route(user: &PartnerUser) -> RedirectTarget {
    if user.requires_onboarding() {
        RedirectTarget::Onboarding
    } else if user.is_rejected() {
        RedirectTarget::Rejected
    } else {
        RedirectTarget::Dashboard
    }
}
