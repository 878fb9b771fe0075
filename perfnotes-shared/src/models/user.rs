use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;
use uuid::Uuid;

use super::errors::ModelError;

/// Access level assigned to a user account.
///
/// The role set is closed: permission checks and role-gated routing dispatch
/// exhaustively over these variants. The login response is the only source
/// of a user's role; tokens are never decoded client-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Employee,
    Manager,
    Hr,
    Admin,
    SuperAdmin,
    Ceo,
}

impl Role {
    /// Every role, in ascending order of privilege.
    pub const ALL: [Self; 6] = [
        Self::Employee,
        Self::Manager,
        Self::Hr,
        Self::Admin,
        Self::SuperAdmin,
        Self::Ceo,
    ];

    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Hr => "hr",
            Self::Admin => "admin",
            Self::SuperAdmin => "super-admin",
            Self::Ceo => "ceo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            "hr" => Ok(Self::Hr),
            "admin" => Ok(Self::Admin),
            "super-admin" => Ok(Self::SuperAdmin),
            "ceo" => Ok(Self::Ceo),
            other => Err(ModelError::UnknownRole(other.to_string())),
        }
    }
}

/// Represents a user in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's access level.
    pub role: Role,
}

/// A user account as listed by the admin management endpoint. Distinct from
/// [`User`]: management rows are keyed by the backend's numeric account id
/// and carry no display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    /// Numeric account identifier.
    pub id: i64,

    /// The account's email address.
    pub email: String,

    /// The account's current access level.
    pub role: Role,
}

/// Payload for reassigning a user's role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignRoleRequest {
    /// The role to assign.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn role_roundtrip() {
        for (text, role) in [
            ("employee", Role::Employee),
            ("manager", Role::Manager),
            ("hr", Role::Hr),
            ("admin", Role::Admin),
            ("super-admin", Role::SuperAdmin),
            ("ceo", Role::Ceo),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("intern").is_err());
    }

    #[test]
    fn role_all_is_exhaustive() {
        assert_eq!(Role::ALL.len(), Role::iter().count());
        for role in Role::iter() {
            assert!(Role::ALL.contains(&role));
        }
    }

    #[test]
    fn role_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"super-admin\"");
        let role: Role = serde_json::from_str("\"ceo\"").unwrap();
        assert_eq!(role, Role::Ceo);
    }

    #[test]
    fn user_serialization() {
        let id = Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
        let user = User {
            id,
            name: "Morgan Reyes".to_string(),
            email: "morgan@example.com".to_string(),
            role: Role::Manager,
        };

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, user);
        assert_eq!(deserialized.role, Role::Manager);
    }

    #[test]
    fn admin_user_list_deserializes() {
        let payload = r#"[
            {"id":1,"email":"dana@example.com","role":"admin"},
            {"id":2,"email":"sam@example.com","role":"super-admin"}
        ]"#;
        let users: Vec<AdminUser> = serde_json::from_str(payload).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(users[1].role, Role::SuperAdmin);
    }

    #[test]
    fn assign_role_request_wire_shape() {
        let request = AssignRoleRequest { role: Role::Manager };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"role":"manager"}"#
        );
    }

    #[test]
    fn user_rejects_unknown_role() {
        let payload = r#"{"id":"f47ac10b-58cc-4372-a567-0e02b2c3d479","name":"X","email":"x@example.com","role":"overlord"}"#;
        assert!(serde_json::from_str::<User>(payload).is_err());
    }
}
