use serde::{Deserialize, Serialize};

use crate::enums::TransactionType;
use crate::shared::api::ApiError;
use crate::shared::serde_helpers::{lenient_f64, null_as_empty};

/// Row of `all-transactions`. The list endpoint and the create endpoint disagree on the
/// name of the type field, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_number: String,
    #[serde(alias = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_date: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<TransactionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    pub quantity: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub unit_price: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_price: f64,
}

/// `GET /api/v1/transaction/{id}` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedTransaction {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_date: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(alias = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub products: Vec<DetailedTransactionProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedTransactionProduct {
    pub product_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supplier: String,
    pub quantity: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub price_at_transaction: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position_shelves: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position_row_and_column: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_location: String,
}

/// Body of the import and export endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportExportRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub notes: String,
}

impl ImportExportRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.product_id <= 0 {
            return Err(ApiError::Invalid("Please select a product".into()));
        }
        if self.quantity <= 0 {
            return Err(ApiError::Invalid("Quantity must be greater than 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_row_accepts_either_type_field_and_string_amounts() {
        let t: Transaction = serde_json::from_str(
            r#"{"id":1,"transactionNumber":"TX-1","transactionType":"IMPORT",
                "transactionDate":"2024-05-01T10:00:00","totalAmount":"1500.50"}"#,
        )
        .unwrap();
        assert_eq!(t.transaction_type, TransactionType::Import);
        assert_eq!(t.total_amount, 1500.5);
        assert!(t.items.is_empty());

        let t: Transaction = serde_json::from_str(
            r#"{"id":2,"type":"SALE","totalAmount":20,
                "items":[{"productId":3,"quantity":2,"unitPrice":"10","totalPrice":"20"}]}"#,
        )
        .unwrap();
        assert_eq!(t.transaction_type, TransactionType::Sale);
        assert_eq!(t.items[0].total_price, 20.0);
    }

    #[test]
    fn movement_requires_product_and_quantity() {
        let req = ImportExportRequest {
            product_id: 1,
            quantity: 0,
            notes: String::new(),
        };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "Quantity must be greater than 0"
        );
    }
}
