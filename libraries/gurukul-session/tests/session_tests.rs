//! Tests for session resolution, caching and route guard evaluation.
//!
//! These tests use mock servers to verify manager behavior without
//! requiring a real backend connection.

use gurukul_core::guard::{RedirectTarget, SessionState};
use gurukul_portal_client::{PortalClient, PortalConfig, ProfileUpdate};
use gurukul_session::SessionManager;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn partner_json(name: &str, role: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": "64f1a2b3c4d5e6f7a8b9c0d1",
        "name": name,
        "email": "asha@example.com",
        "phone": "+919876543210",
        "role": role,
        "status": status
    })
}

fn profile_response(name: &str, role: &str, status: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": true,
        "message": "OK",
        "data": partner_json(name, role, status)
    }))
}

fn login_response(name: &str, role: &str, status: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": true,
        "message": "Login successful",
        "data": {
            "user": partner_json(name, role, status),
            "accessToken": "token_abc",
            "refreshToken": null
        }
    }))
}

async fn authenticated_manager(mock_server: &MockServer) -> (Arc<PortalClient>, SessionManager) {
    let client = Arc::new(
        PortalClient::new(PortalConfig::with_token(mock_server.uri(), "valid_token")).unwrap(),
    );
    let manager = SessionManager::new(client.clone());
    (client, manager)
}

// =============================================================================
// Session Resolution Tests
// =============================================================================

mod resolution {
    use super::*;

    #[tokio::test]
    async fn test_fresh_cache_serves_without_refetching() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response("Asha Verma", "partner", "active"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (_, manager) = authenticated_manager(&mock_server).await;

        // Two evaluations inside the staleness window, one request
        let first = manager.current().await;
        let second = manager.current().await;

        assert_eq!(first.user().unwrap().name, "Asha Verma");
        assert_eq!(second.user().unwrap().name, "Asha Verma");
    }

    #[tokio::test]
    async fn test_stale_session_is_reverified() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response("Asha Verma", "partner", "active"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = Arc::new(
            PortalClient::new(PortalConfig::with_token(mock_server.uri(), "valid_token"))
                .unwrap(),
        );
        // Zero staleness window: every evaluation re-verifies
        let manager = SessionManager::with_staleness(client, Duration::ZERO);

        assert!(manager.current().await.user().is_some());
        assert!(manager.current().await.user().is_some());
    }

    #[tokio::test]
    async fn test_anonymous_without_credential_needs_no_network() {
        // No mocks mounted: a network call would fail the test
        let mock_server = MockServer::start().await;
        let client =
            Arc::new(PortalClient::new(PortalConfig::new(mock_server.uri())).unwrap());
        let manager = SessionManager::new(client);

        assert!(matches!(manager.current().await, SessionState::Anonymous));
    }

    #[tokio::test]
    async fn test_fetch_failure_resolves_anonymous_without_caching() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let (_, manager) = authenticated_manager(&mock_server).await;

        // Both evaluations fail closed; the failure is not cached, so the
        // second one retries the backend
        assert!(matches!(manager.current().await, SessionState::Anonymous));
        assert!(matches!(manager.current().await, SessionState::Anonymous));
    }

    #[tokio::test]
    async fn test_snapshot_is_loading_until_first_resolution() {
        let mock_server = MockServer::start().await;
        let client =
            Arc::new(PortalClient::new(PortalConfig::new(mock_server.uri())).unwrap());
        let manager = SessionManager::new(client);

        assert!(matches!(manager.snapshot().await, SessionState::Loading));

        manager.current().await;
        assert!(matches!(manager.snapshot().await, SessionState::Anonymous));
    }
}

// =============================================================================
// Guard Evaluation Tests
// =============================================================================

mod guard_evaluation {
    use super::*;

    #[tokio::test]
    async fn test_active_partner_passes_private_routes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response("Asha Verma", "partner", "active"))
            .mount(&mock_server)
            .await;

        let (_, manager) = authenticated_manager(&mock_server).await;

        assert_eq!(manager.check_route("/partner/dashboard").await, None);
        assert_eq!(manager.check_route("/partner/courses/c1").await, None);
    }

    #[tokio::test]
    async fn test_anonymous_is_sent_to_login_from_private_routes_only() {
        let mock_server = MockServer::start().await;
        let client =
            Arc::new(PortalClient::new(PortalConfig::new(mock_server.uri())).unwrap());
        let manager = SessionManager::new(client);

        assert_eq!(
            manager.check_route("/partner/dashboard").await,
            Some(RedirectTarget::Login)
        );
        assert_eq!(manager.check_route("/partner/login").await, None);
        assert_eq!(manager.check_route("/partner/forgot-password").await, None);
    }

    #[tokio::test]
    async fn test_onboarding_account_is_held_at_onboarding() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response(
                "Asha Verma",
                "partner_request",
                "pending_approval",
            ))
            .mount(&mock_server)
            .await;

        let (_, manager) = authenticated_manager(&mock_server).await;

        assert_eq!(
            manager.check_route("/partner/dashboard").await,
            Some(RedirectTarget::Onboarding)
        );
        assert_eq!(manager.check_route("/partner/onboarding").await, None);
        assert_eq!(manager.check_route("/partner/onboarding/step-2").await, None);
    }

    #[tokio::test]
    async fn test_server_revocation_forces_one_reresolution() {
        let mock_server = MockServer::start().await;

        // The session resolves once; after the revocation the manager must
        // not consult this endpoint again (the credential is gone)
        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response("Asha Verma", "partner", "active"))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/partner/courses"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "success": false,
                "message": "Token expired",
                "data": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, manager) = authenticated_manager(&mock_server).await;

        // Session resolves and is cached as authenticated
        assert!(manager.current().await.user().is_some());
        assert_eq!(manager.check_route("/partner/dashboard").await, None);

        // A data call hits the expired token; the client revokes the session
        let courses = client.courses().await.unwrap();
        assert!(courses.list().await.is_err());

        // The cached session is still fresh, but the revocation overrides
        // it: the next navigation re-resolves and bounces to login
        assert_eq!(
            manager.check_route("/partner/dashboard").await,
            Some(RedirectTarget::Login)
        );

        // At the login route the anonymous verdict holds without looping
        assert_eq!(manager.check_route("/partner/login").await, None);
        assert_eq!(
            manager.check_route("/partner/dashboard").await,
            Some(RedirectTarget::Login)
        );
    }
}

// =============================================================================
// Session Lifecycle Tests
// =============================================================================

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn test_login_returns_landing_route_and_refreshes_session() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(login_response("Asha Verma", "partner", "active"))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response("Asha Verma", "partner", "active"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            Arc::new(PortalClient::new(PortalConfig::new(mock_server.uri())).unwrap());
        let manager = SessionManager::new(client);

        // Resolves (and caches) the anonymous verdict
        assert!(matches!(manager.current().await, SessionState::Anonymous));

        let (user, landing) = manager.login("9876543210", "secret123").await.unwrap();
        assert_eq!(user.name, "Asha Verma");
        assert_eq!(landing, RedirectTarget::Dashboard);

        // The login invalidated the anonymous verdict
        assert!(manager.current().await.user().is_some());
    }

    #[tokio::test]
    async fn test_login_of_pending_application_lands_on_onboarding() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(login_response(
                "Asha Verma",
                "partner_request",
                "pending_approval",
            ))
            .mount(&mock_server)
            .await;

        let client =
            Arc::new(PortalClient::new(PortalConfig::new(mock_server.uri())).unwrap());
        let manager = SessionManager::new(client);

        let (user, landing) = manager.login("9876543210", "secret123").await.unwrap();
        assert!(user.requires_onboarding());
        assert_eq!(landing, RedirectTarget::Onboarding);
    }

    #[tokio::test]
    async fn test_logout_drops_the_session_immediately() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response("Asha Verma", "partner", "active"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (_, manager) = authenticated_manager(&mock_server).await;

        assert!(manager.current().await.user().is_some());

        manager.logout().await;

        // Credential gone and cache invalidated: anonymous without a fetch
        assert!(matches!(manager.current().await, SessionState::Anonymous));
        assert_eq!(
            manager.check_route("/partner/dashboard").await,
            Some(RedirectTarget::Login)
        );
    }

    #[tokio::test]
    async fn test_profile_update_invalidates_the_session() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/profile"))
            .respond_with(profile_response("Asha Verma", "partner", "active"))
            .expect(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("PATCH"))
            .and(path("/api/v1/partner/profile"))
            .respond_with(profile_response("Asha V", "partner", "active"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (_, manager) = authenticated_manager(&mock_server).await;

        assert!(manager.current().await.user().is_some());

        let updated = manager
            .update_profile(&ProfileUpdate {
                name: Some("Asha V".to_string()),
                ..ProfileUpdate::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.name, "Asha V");

        // The cached session was dropped, so this resolves again (the
        // profile mock's second allowed call)
        assert!(manager.current().await.user().is_some());
    }
}
