use contracts::domain::a001_product::ProductDto;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::ApiClient;

/// Create (`id == None`) or fully replace a product.
pub async fn save_product(
    client: &ApiClient,
    id: Option<i64>,
    dto: &ProductDto,
) -> Result<(), ApiError> {
    let result = match id {
        Some(id) => client.put(&format!("/api/v1/product/{}", id), dto).await,
        None => client.post("/api/v1/product", dto).await,
    };
    let fallback = if id.is_some() {
        "Failed to update product"
    } else {
        "Failed to add product"
    };
    result.map_err(|e| e.or_message(fallback))?;
    Ok(())
}

pub async fn delete_product(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .delete(&format!("/api/v1/product/{}", id))
        .await
        .map_err(|e| e.or_message("Failed to delete product"))?;
    Ok(())
}
