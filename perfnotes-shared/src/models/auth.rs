use serde::{Deserialize, Serialize};

use super::user::User;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Response body from the auth service on a 2xx login.
///
/// Two shapes share this type: a normal login carries `user` and `token`;
/// a forced password reset carries `forceReset: true` and `token` only, so
/// the reset flow can authenticate its follow-up call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// The authenticated user. Absent when a password reset is forced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Opaque bearer credential for subsequent requests.
    pub token: String,

    /// True when the account must reset its password before normal use.
    #[serde(default, rename = "forceReset")]
    pub force_reset: bool,
}

/// Request body for `POST /api/auth/forceResetPassword`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForceResetRequest {
    /// The replacement password.
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// An account offered on the login screen for one-click sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickLoginUser {
    /// The account's email address.
    pub email: String,

    /// Role label shown next to the email.
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn login_response_with_user() {
        let payload = r#"{
            "user": {
                "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
                "name": "Morgan Reyes",
                "email": "morgan@example.com",
                "role": "manager"
            },
            "token": "opaque-token"
        }"#;

        let response: LoginResponse = serde_json::from_str(payload).unwrap();
        assert!(!response.force_reset);
        assert_eq!(response.token, "opaque-token");
        let user = response.user.expect("user present");
        assert_eq!(user.role, Role::Manager);
    }

    #[test]
    fn login_response_force_reset_omits_user() {
        let payload = r#"{"forceReset": true, "token": "T"}"#;
        let response: LoginResponse = serde_json::from_str(payload).unwrap();
        assert!(response.force_reset);
        assert!(response.user.is_none());
        assert_eq!(response.token, "T");
    }

    #[test]
    fn force_reset_request_wire_name() {
        let request = ForceResetRequest {
            new_password: "s3cret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"newPassword":"s3cret"}"#);
    }

    #[test]
    fn quick_login_user_roundtrip() {
        let payload = r#"[{"email":"ceo@example.com","role":"ceo"}]"#;
        let users: Vec<QuickLoginUser> = serde_json::from_str(payload).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "ceo@example.com");
    }
}
