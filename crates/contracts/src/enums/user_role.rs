use serde::{Deserialize, Serialize};

/// Role string as issued by the backend, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Staff,
    Other(String),
}

impl UserRole {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "staff" => UserRole::Staff,
            _ => UserRole::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Other(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Staff => "Staff",
            UserRole::Other(raw) => raw,
        }
    }

    pub fn matches(&self, role: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(role.trim())
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        UserRole::parse(&value)
    }
}

impl From<UserRole> for String {
    fn from(value: UserRole) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(UserRole::parse("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::parse(" Staff "), UserRole::Staff);
        assert_eq!(
            UserRole::parse("Auditor"),
            UserRole::Other("Auditor".into())
        );
        assert!(UserRole::parse("Auditor").matches("auditor"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let role: UserRole = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"admin\"");
    }
}
