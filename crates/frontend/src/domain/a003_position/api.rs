use contracts::domain::a003_position::{
    MoveProductData, MoveProductRequest, Position, PositionDetails,
};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_positions(client: &ApiClient) -> Result<Vec<Position>, ApiError> {
    client
        .get("/api/v1/positions")
        .await
        .map_err(|e| e.or_message("Failed to fetch positions"))?
        .field("data")
}

pub async fn fetch_position_details(
    client: &ApiClient,
    id: i64,
) -> Result<PositionDetails, ApiError> {
    client
        .get(&format!("/api/v1/positions/{}/details", id))
        .await
        .map_err(|e| e.or_message("Failed to fetch position details"))?
        .field("data")
}

/// Moves stock and rejects a response that contradicts the product's total quantity.
pub async fn move_product(
    client: &ApiClient,
    request: MoveProductRequest,
) -> Result<MoveProductData, ApiError> {
    request.validate()?;
    let data: MoveProductData = client
        .post("/api/v1/positions/move-product", &request)
        .await
        .map_err(|e| e.or_message("Failed to move product"))?
        .field("data")?;
    data.verify(request.quantity)
}

pub async fn remove_product(
    client: &ApiClient,
    product_id: i64,
    position_id: i64,
) -> Result<(), ApiError> {
    client
        .delete(&format!(
            "/api/v1/positions/remove-product/{}/{}",
            product_id, position_id
        ))
        .await
        .map_err(|e| e.or_message("Failed to remove product from position"))?;
    Ok(())
}
