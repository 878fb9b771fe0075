//! Tests for the session store's state transitions
//!
//! The storage- and network-facing halves of the session store run only in a
//! browser; these tests cover the pure transition logic they drive.

#[cfg(test)]
mod tests {
    use crate::session::Session;
    use shared::models::{LoginResponse, Role, User};
    use uuid::Uuid;

    fn user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Morgan Reyes".to_string(),
            email: "morgan@example.com".to_string(),
            role,
        }
    }

    /// A fresh session is loading and unauthenticated.
    #[test]
    fn default_session_is_loading() {
        let session = Session::default();
        assert!(session.loading);
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    /// Hydration from a valid persisted pair authenticates exactly once and
    /// ends the loading phase.
    #[test]
    fn hydration_populates_session() {
        let mut session = Session::default();
        let persisted = user(Role::Manager);
        session.authenticated(persisted.clone(), "T".to_string());

        assert!(!session.loading);
        assert!(session.is_authenticated());
        assert_eq!(session.user, Some(persisted));
        assert_eq!(session.token.as_deref(), Some("T"));
    }

    /// Failed hydration leaves the session unauthenticated with loading done.
    #[test]
    fn failed_hydration_clears_session() {
        let mut session = Session::default();
        session.cleared();

        assert!(!session.loading);
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    /// Logout from any prior state resets everything.
    #[test]
    fn logout_is_total() {
        let mut session = Session::default();
        session.authenticated(user(Role::Ceo), "T".to_string());
        session.cleared();

        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.is_authenticated());
        assert!(!session.loading);
    }

    /// Logout when already logged out is a no-op beyond the epoch bump.
    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::default();
        session.cleared();
        let first = session.clone();
        session.cleared();

        assert_eq!(session.user, first.user);
        assert_eq!(session.token, first.token);
        assert_eq!(session.loading, first.loading);
    }

    /// Clearing bumps the epoch, so an in-flight login started before the
    /// clear can detect it is stale and discard its result.
    #[test]
    fn cleared_session_invalidates_inflight_login() {
        let mut session = Session::default();
        let started_epoch = session.epoch;
        session.cleared();
        assert_ne!(session.epoch, started_epoch);
    }

    /// Permission requires authentication and role membership.
    #[test]
    fn has_permission_truth_table() {
        let mut session = Session::default();
        session.authenticated(user(Role::Manager), "T".to_string());

        assert!(session.has_permission(&[Role::Manager, Role::Ceo]));
        assert!(!session.has_permission(&[Role::Hr]));
        // An empty required set never grants access.
        assert!(!session.has_permission(&[]));

        session.cleared();
        assert!(!session.has_permission(&[Role::Manager]));
        assert!(!session.has_permission(&Role::ALL));
    }

    /// A token alone (the force-reset state) never authenticates.
    #[test]
    fn pending_reset_keeps_session_unauthenticated() {
        let mut session = Session::default();
        session.pending_reset("T".to_string());

        assert!(session.user.is_none());
        assert_eq!(session.token.as_deref(), Some("T"));
        assert!(!session.is_authenticated());
        assert!(!session.has_permission(&Role::ALL));
    }

    /// The two documented 2xx login shapes map to distinct, mutually
    /// exclusive transitions, and only the success shape sets the user.
    #[test]
    fn login_response_shapes_apply_exclusively() {
        let success: LoginResponse = serde_json::from_str(
            r#"{
                "user": {
                    "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
                    "name": "Morgan Reyes",
                    "email": "morgan@example.com",
                    "role": "hr"
                },
                "token": "T1"
            }"#,
        )
        .unwrap();
        let reset: LoginResponse = serde_json::from_str(r#"{"forceReset":true,"token":"T2"}"#).unwrap();

        let mut session = Session::default();
        assert!(!success.force_reset);
        session.authenticated(success.user.unwrap(), success.token);
        assert!(session.is_authenticated());
        assert_eq!(session.user.as_ref().unwrap().role, Role::Hr);

        let mut session = Session::default();
        assert!(reset.force_reset && reset.user.is_none());
        session.pending_reset(reset.token);
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
    }
}
