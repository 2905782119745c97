//! Multi-item sale built from the product picker.

use serde::{Deserialize, Serialize};

use crate::domain::a001_product::Product;
use crate::enums::TransactionType;
use crate::shared::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct SaleLine {
    pub product: Product,
    pub quantity: i64,
}

impl SaleLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Selected products with quantities, in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleCart {
    lines: Vec<SaleLine>,
}

impl SaleCart {
    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.lines.iter().any(|l| l.product.id == product_id)
    }

    pub fn quantity_of(&self, product_id: i64) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Adds the product with quantity 1, or removes it if already selected.
    pub fn toggle(&mut self, product: &Product) {
        if let Some(idx) = self.lines.iter().position(|l| l.product.id == product.id) {
            self.lines.remove(idx);
        } else {
            self.lines.push(SaleLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity.max(0);
        }
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(SaleLine::line_total).sum()
    }

    pub fn to_request(&self) -> Result<NewSaleRequest, ApiError> {
        if self.lines.is_empty() {
            return Err(ApiError::Invalid("Select at least one product".into()));
        }
        if let Some(line) = self.lines.iter().find(|l| l.quantity <= 0) {
            return Err(ApiError::Invalid(format!(
                "Quantity for {} must be greater than 0",
                line.product.product_name
            )));
        }

        let items: Vec<SaleItem> = self
            .lines
            .iter()
            .map(|l| SaleItem {
                product_id: l.product.id,
                quantity: l.quantity,
                unit_price: l.product.price.to_string(),
                total_price: l.line_total().to_string(),
            })
            .collect();

        Ok(NewSaleRequest {
            transaction_type: TransactionType::Sale,
            items,
            total_amount: self.total().to_string(),
            notes: "Multiple items sale".to_string(),
        })
    }
}

/// Body of `POST /api/transactions/create`; money travels as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSaleRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub items: Vec<SaleItem>,
    pub total_amount: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: String,
    pub total_price: String,
}

/// Banner text for a rejected sale.
pub fn sale_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if message.contains("Insufficient stock") => {
            message.clone()
        }
        ApiError::Status { .. } => "Not enough stock for the selected products".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            product_name: format!("P{}", id),
            price,
            quantity: 100,
            category: String::new(),
            supplier: String::new(),
        }
    }

    #[test]
    fn request_totals_lines() {
        let mut cart = SaleCart::default();
        cart.toggle(&product(1, 2.5));
        cart.toggle(&product(2, 10.0));
        cart.set_quantity(1, 4);

        let req = cart.to_request().unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "SALE");
        assert_eq!(json["notes"], "Multiple items sale");
        assert_eq!(json["totalAmount"], "20");
        assert_eq!(json["items"][0]["unitPrice"], "2.5");
        assert_eq!(json["items"][0]["totalPrice"], "10");
        assert_eq!(json["items"][1]["quantity"], 1);
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut cart = SaleCart::default();
        let p = product(1, 1.0);
        cart.toggle(&p);
        assert_eq!(cart.quantity_of(1), 1);
        cart.toggle(&p);
        assert!(cart.is_empty());
        assert!(matches!(cart.to_request(), Err(ApiError::Invalid(_))));
    }

    #[test]
    fn zero_quantity_line_is_rejected() {
        let mut cart = SaleCart::default();
        cart.toggle(&product(5, 1.0));
        cart.set_quantity(5, 0);
        assert_eq!(
            cart.to_request().unwrap_err().to_string(),
            "Quantity for P5 must be greater than 0"
        );
    }

    #[test]
    fn failure_messages() {
        let insufficient = ApiError::Status {
            status: 200,
            message: "Insufficient stock for product P1".into(),
        };
        assert_eq!(
            sale_failure_message(&insufficient),
            "Insufficient stock for product P1"
        );
        let other = ApiError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(
            sale_failure_message(&other),
            "Not enough stock for the selected products"
        );
        assert_eq!(
            sale_failure_message(&ApiError::Network("offline".into())),
            "Failed to send request: offline"
        );
    }
}
