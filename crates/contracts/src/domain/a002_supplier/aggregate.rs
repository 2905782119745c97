use serde::{Deserialize, Serialize};

use crate::shared::api::ApiError;
use crate::shared::serde_helpers::null_as_empty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    pub name: String,
    pub phone_number: String,
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            phone_number: s.phone_number.clone(),
        }
    }
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Invalid("Supplier name is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_prefill_round_trips() {
        let supplier: Supplier =
            serde_json::from_str(r#"{"id":2,"name":"Acme","phoneNumber":null}"#).unwrap();
        assert_eq!(supplier.phone_number, "");

        let dto = SupplierDto::from(&supplier);
        assert!(dto.validate().is_ok());
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"name":"Acme","phoneNumber":""}"#
        );
        assert!(SupplierDto::default().validate().is_err());
    }
}
