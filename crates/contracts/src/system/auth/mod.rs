use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::shared::api::ApiError;
use crate::shared::serde_helpers::lenient_string;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub expiration_time: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl LoginResponse {
    /// Splits a successful login into what gets persisted client side.
    pub fn into_session(self) -> Result<AuthSession, ApiError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Invalid("No token received".to_string()))?;
        if self.user_id.is_empty() || self.user_id == "0" {
            return Err(ApiError::Invalid("No user ID received".to_string()));
        }
        Ok(AuthSession {
            token,
            user_id: self.user_id,
            user: AuthUser {
                username: self.username.unwrap_or_default(),
                name: self.name.unwrap_or_default(),
                role: UserRole::parse(self.role.as_deref().unwrap_or_default()),
            },
        })
    }
}

/// Profile persisted under the `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_staff(&self) -> bool {
        self.role == UserRole::Staff
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.matches(role)
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user_id: String,
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_becomes_session() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"status":200,"userId":5,"message":"ok","token":"abc","role":"ADMIN",
                "expirationTime":"24Hrs","username":"jdoe","name":"John"}"#,
        )
        .unwrap();
        let session = resp.into_session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user_id, "5");
        assert!(session.user.is_admin());
        assert!(!session.user.is_staff());
        assert_eq!(session.user.display_name(), "John");
    }

    #[test]
    fn missing_token_or_user_is_rejected() {
        let resp: LoginResponse = serde_json::from_str(r#"{"userId":5}"#).unwrap();
        assert_eq!(
            resp.into_session().unwrap_err().to_string(),
            "No token received"
        );

        let resp: LoginResponse = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(
            resp.into_session().unwrap_err().to_string(),
            "No user ID received"
        );
    }

    #[test]
    fn stored_user_round_trips() {
        let user = AuthUser {
            username: "ann".into(),
            name: String::new(),
            role: UserRole::Staff,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert_eq!(back.display_name(), "ann");
        assert!(back.has_role("STAFF"));
    }
}
