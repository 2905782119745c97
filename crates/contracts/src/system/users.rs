use serde::{Deserialize, Serialize};

use crate::enums::{UserRole, WorkingShift};
use crate::shared::api::ApiError;
use crate::shared::serde_helpers::{lenient_string, null_as_empty};

/// Employee row as returned by `get-all-users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    pub role: UserRole,
    #[serde(default)]
    pub working_shift: WorkingShift,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeDto {
    pub name: String,
    pub username: String,
    pub password: String,
    pub working_shift: WorkingShift,
}

impl RegisterEmployeeDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Invalid("Name is required".into()));
        }
        if self.username.trim().is_empty() {
            return Err(ApiError::Invalid("Username is required".into()));
        }
        if self.password.is_empty() {
            return Err(ApiError::Invalid("Password is required".into()));
        }
        Ok(())
    }
}

/// Current user as returned by `current-user` (no envelope).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub working_shift: Option<WorkingShift>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub username: String,
    pub password: String,
    pub working_shift: WorkingShift,
}

impl UpdateProfileDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().len() < 6 {
            return Err(ApiError::Invalid(
                "Username must be at least 6 characters.".into(),
            ));
        }
        if self.password.len() < 6 {
            return Err(ApiError::Invalid(
                "Password must be at least 6 characters.".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_accepts_numeric_id() {
        let e: Employee = serde_json::from_str(
            r#"{"id":3,"name":"Mai","role":"staff","workingShift":"Night"}"#,
        )
        .unwrap();
        assert_eq!(e.id, "3");
        assert_eq!(e.role, UserRole::Staff);
        assert_eq!(e.working_shift, WorkingShift::Night);
        assert_eq!(e.username, "");
    }

    #[test]
    fn register_requires_credentials() {
        let dto = RegisterEmployeeDto {
            name: "Mai".into(),
            username: " ".into(),
            ..Default::default()
        };
        assert_eq!(
            dto.validate().unwrap_err().to_string(),
            "Username is required"
        );
    }

    #[test]
    fn profile_update_enforces_lengths() {
        let mut dto = UpdateProfileDto {
            username: "mai_nguyen".into(),
            password: "12345".into(),
            working_shift: WorkingShift::Morning,
        };
        assert!(dto.validate().is_err());
        dto.password = "123456".into();
        assert!(dto.validate().is_ok());
    }
}
