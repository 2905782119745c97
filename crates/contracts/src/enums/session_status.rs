use serde::{Deserialize, Serialize};

/// Lifecycle of a stocktaking session on the server. Only `Active -> Completed` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    Active,
    Completed,
}

impl SessionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SessionStatus::Active => "ACTIVE",
            SessionStatus::Completed => "COMPLETED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SessionStatus::Active => "Active",
            SessionStatus::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_upper_case() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
        let s: SessionStatus = serde_json::from_str("\"ACTIVE\"").unwrap();
        assert_eq!(s, SessionStatus::Active);
    }
}
