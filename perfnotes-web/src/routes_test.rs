//! Tests for the routing system
//!
//! Validates route definitions and path mappings for the application's
//! routing infrastructure.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, landing_route};
    use shared::models::Role;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests route-to-path mappings
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::Notes.to_path(), "/notes");
        assert_eq!(MainRoute::AddNote.to_path(), "/notes/new");
        assert_eq!(MainRoute::AdminUsers.to_path(), "/admin/users");
        assert_eq!(MainRoute::ResetPassword.to_path(), "/reset-password");
        assert_eq!(MainRoute::Unauthorized.to_path(), "/unauthorized");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests the post-login landing screen per role
    #[test]
    fn test_landing_route_is_role_aware() {
        assert_eq!(landing_route(Role::Admin), MainRoute::AdminUsers);
        for role in [
            Role::Employee,
            Role::Manager,
            Role::Hr,
            Role::SuperAdmin,
            Role::Ceo,
        ] {
            assert_eq!(landing_route(role), MainRoute::Dashboard, "role {role}");
        }
    }

    /// Tests that every route's path is recognized back to the same route
    #[test]
    fn test_route_recognition_roundtrip() {
        for route in MainRoute::iter() {
            let recognized = MainRoute::recognize(&route.to_path());
            assert_eq!(recognized, Some(route.clone()), "path {}", route.to_path());
        }
    }

    /// Tests the not-found fallback
    #[test]
    fn test_unknown_path_falls_back() {
        assert_eq!(
            MainRoute::recognize("/definitely-not-a-route"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests route equality and cloning
    #[test]
    fn test_route_equality() {
        let route1 = MainRoute::Dashboard;
        let route2 = MainRoute::Dashboard;
        assert_eq!(route1, route2);
        assert_ne!(MainRoute::Login, MainRoute::Unauthorized);

        let cloned = route1.clone();
        assert_eq!(route1, cloned);
    }

    /// Tests Debug output for diagnostics logging
    #[test]
    fn test_route_debug() {
        assert!(format!("{:?}", MainRoute::ResetPassword).contains("ResetPassword"));
        assert!(format!("{:?}", MainRoute::NotFound).contains("NotFound"));
    }
}
