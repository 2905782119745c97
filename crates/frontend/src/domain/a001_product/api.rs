use contracts::domain::a001_product::Product;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::ApiClient;

/// Fetch all products
pub async fn fetch_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    client
        .get("/api/v1/product/getAll")
        .await
        .map_err(|e| e.or_message("Failed to fetch product data"))?
        .field("products")
}
