use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User role. Admins see the full directory and can delete accounts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// A directory entry. `password` is stored as submitted; the session
/// marker and everything handed to the UI after login carries `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Copy of this user with the password removed.
    pub fn stripped(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }
}

/// Input for creating a user at signup.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripped_removes_only_the_password() {
        let user = User {
            id: "u1".to_string(),
            name: "Gabriel".to_string(),
            email: Some("gabriel@example.com".to_string()),
            password: Some("123456".to_string()),
            role: Role::User,
        };
        let safe = user.stripped();
        assert_eq!(safe.id, user.id);
        assert_eq!(safe.email, user.email);
        assert_eq!(safe.role, user.role);
        assert!(safe.password.is_none());
    }

    #[test]
    fn stripped_user_serializes_without_password_field() {
        let user = User {
            id: "u1".to_string(),
            name: "Gabriel".to_string(),
            email: Some("gabriel@example.com".to_string()),
            password: Some("123456".to_string()),
            role: Role::User,
        };
        let json = serde_json::to_string(&user.stripped()).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"role\":\"USER\""));
    }

    #[test]
    fn role_defaults_to_user_when_absent() {
        let user: User = serde_json::from_str(r#"{"id":"x","name":"X"}"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.email.is_none());
    }
}
