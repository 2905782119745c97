use serde::{Deserialize, Serialize};

use crate::shared::api::ApiError;
use crate::shared::serde_helpers::{lenient_f64, null_as_empty};

// ============================================================================
// Aggregate
// ============================================================================

/// Product as listed by `GET /api/v1/product/getAll`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    pub quantity: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supplier: String,
}

impl Product {
    /// Case-insensitive match against name, category and supplier.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.product_name.to_lowercase().contains(&q)
            || self.category.to_lowercase().contains(&q)
            || self.supplier.to_lowercase().contains(&q)
    }
}

// ============================================================================
// DTO / Form
// ============================================================================

/// Request body for create (`POST`) and full update (`PUT`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
    pub supplier: String,
}

/// Dialog state, kept as typed text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub supplier: String,
}

impl From<&Product> for ProductForm {
    fn from(p: &Product) -> Self {
        Self {
            name: p.product_name.clone(),
            price: p.price.to_string(),
            quantity: p.quantity.to_string(),
            category: p.category.clone(),
            supplier: p.supplier.clone(),
        }
    }
}

impl ProductForm {
    pub fn to_dto(&self) -> Result<ProductDto, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Invalid("Product name is required".into()));
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| ApiError::Invalid(format!("Invalid price: {}", self.price)))?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|q| *q >= 0)
            .ok_or_else(|| ApiError::Invalid(format!("Invalid quantity: {}", self.quantity)))?;

        Ok(ProductDto {
            product_name: name.to_string(),
            price,
            quantity,
            category: self.category.trim().to_string(),
            supplier: self.supplier.trim().to_string(),
        })
    }
}

impl ProductDto {
    /// What a refetch should show after the backend accepted this body.
    pub fn apply_to(&self, id: i64) -> Product {
        Product {
            id,
            product_name: self.product_name.clone(),
            price: self.price,
            quantity: self.quantity,
            category: self.category.clone(),
            supplier: self.supplier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        serde_json::from_str(
            r#"{"id":4,"productName":"Bolt M8","price":"0.35","quantity":120,
                "category":"Hardware","supplier":"Acme"}"#,
        )
        .unwrap()
    }

    #[test]
    fn unchanged_edit_reproduces_the_record() {
        let product = sample();
        let dto = ProductForm::from(&product).to_dto().unwrap();
        assert_eq!(dto.apply_to(product.id), product);

        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body["productName"], "Bolt M8");
        assert_eq!(body["quantity"], 120);
    }

    #[test]
    fn form_rejects_bad_numbers() {
        let mut form = ProductForm::from(&sample());
        form.quantity = "12.5".into();
        assert_eq!(
            form.to_dto().unwrap_err().to_string(),
            "Invalid quantity: 12.5"
        );

        form.quantity = "3".into();
        form.price = "abc".into();
        assert!(matches!(form.to_dto(), Err(ApiError::Invalid(_))));

        let empty = ProductForm::default();
        assert_eq!(
            empty.to_dto().unwrap_err().to_string(),
            "Product name is required"
        );
    }

    #[test]
    fn search_covers_category_and_supplier() {
        let p = sample();
        assert!(p.matches("bolt"));
        assert!(p.matches("acme"));
        assert!(p.matches(""));
        assert!(!p.matches("nail"));
    }
}
