use serde::{Deserialize, Serialize};

use crate::shared::api::ApiError;
use crate::shared::serde_helpers::{lenient_f64, null_as_empty};

/// Storage slot on a shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shelves: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub row_and_column: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_location: String,
}

/// A product placed at a position, with both its total stock and the share kept there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionProduct {
    pub product_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub product_price: f64,
    pub total_product_quantity: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supplier: String,
    pub position_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shelves: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub row_and_column: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_location: String,
    pub quantity_at_position: i64,
}

/// Payload returned by `move-product`; same shape as a position product row.
pub type MoveProductData = PositionProduct;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDetails {
    pub total_quantity: i64,
    pub total_products: i64,
    pub position: Position,
    #[serde(default)]
    pub products: Vec<PositionProduct>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveProductRequest {
    pub product_id: i64,
    pub position_id: i64,
    pub quantity: i64,
}

impl MoveProductRequest {
    /// Builds a request from raw inputs; unparseable text counts as zero.
    pub fn from_inputs(product_id: &str, position_id: &str, quantity: &str) -> Self {
        let num = |s: &str| s.trim().parse::<i64>().unwrap_or(0);
        Self {
            product_id: num(product_id),
            position_id: num(position_id),
            quantity: num(quantity),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.product_id <= 0 {
            return Err(ApiError::Invalid("Please enter a valid Product ID".into()));
        }
        if self.position_id <= 0 {
            return Err(ApiError::Invalid("Please enter a valid Position ID".into()));
        }
        if self.quantity <= 0 {
            return Err(ApiError::Invalid("Please enter a valid quantity".into()));
        }
        Ok(())
    }
}

impl PositionProduct {
    /// Rejects a move the backend reported as successful but which leaves more units
    /// at the position than the product has in total.
    pub fn verify(self, requested: i64) -> Result<Self, ApiError> {
        if self.quantity_at_position > self.total_product_quantity {
            return Err(ApiError::Contradiction(format!(
                "Cannot move {} units. This would result in {} units at position, \
                 which exceeds the total product quantity of {}.",
                requested, self.quantity_at_position, self.total_product_quantity
            )));
        }
        Ok(self)
    }
}

/// Message shown when the move call itself failed.
pub fn explain_move_failure(err: &ApiError) -> String {
    let message = err.to_string();
    if message.contains("quantity") || message.contains("exceed") {
        format!(
            "{}. Please check that the quantity doesn't exceed the total available product quantity.",
            message
        )
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(at_position: i64, total: i64) -> MoveProductData {
        serde_json::from_value(serde_json::json!({
            "productId": 1, "productName": "Bolt", "productPrice": "2.5",
            "totalProductQuantity": total, "category": "Hardware", "supplier": "Acme",
            "positionId": 3, "shelves": "A", "rowAndColumn": "1-2", "fullLocation": "A 1-2",
            "quantityAtPosition": at_position
        }))
        .unwrap()
    }

    #[test]
    fn position_above_total_is_a_contradiction() {
        let err = moved(15, 10).verify(5).unwrap_err();
        assert_eq!(
            err,
            ApiError::Contradiction(
                "Cannot move 5 units. This would result in 15 units at position, \
                 which exceeds the total product quantity of 10."
                    .into()
            )
        );
    }

    #[test]
    fn consistent_move_passes() {
        let data = moved(10, 10).verify(4).unwrap();
        assert_eq!(data.product_price, 2.5);
        assert_eq!(data.full_location, "A 1-2");
    }

    #[test]
    fn request_validation_order() {
        let req = MoveProductRequest::from_inputs("x", "2", "3");
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "Please enter a valid Product ID"
        );
        let req = MoveProductRequest::from_inputs("1", "2", "0");
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "Please enter a valid quantity"
        );
        assert!(MoveProductRequest::from_inputs("1", "2", "3").validate().is_ok());
    }

    #[test]
    fn failure_hint_mentions_quantity() {
        let err = ApiError::Http {
            status: 400,
            message: "quantity too large".into(),
        };
        assert!(explain_move_failure(&err).ends_with("total available product quantity."));
        assert_eq!(explain_move_failure(&ApiError::Unauthorized), ApiError::Unauthorized.to_string());
    }
}
