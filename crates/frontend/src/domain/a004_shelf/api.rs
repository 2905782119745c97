use contracts::domain::a004_shelf::{
    AddLocationDto, LocationFilter, NewShelfDto, ProductLocation, Shelf, UpdateQuantityDto,
    UpdateShelfDto,
};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::ApiClient;

// ============================================================================
// Shelves
// ============================================================================

pub async fn fetch_shelves(client: &ApiClient) -> Result<Vec<Shelf>, ApiError> {
    client
        .get("/api/shelves/all")
        .await
        .map_err(|e| e.or_message("Failed to fetch shelves"))?
        .field("shelves")
}

pub async fn add_shelf(client: &ApiClient, dto: &NewShelfDto) -> Result<(), ApiError> {
    dto.validate()?;
    client
        .post("/api/shelves/add", dto)
        .await
        .map_err(|e| e.or_message("Failed to add shelf"))?;
    Ok(())
}

pub async fn update_shelf(client: &ApiClient, dto: &UpdateShelfDto) -> Result<(), ApiError> {
    client
        .put("/api/shelves", dto)
        .await
        .map_err(|e| e.or_message("Failed to update shelf"))?;
    Ok(())
}

pub async fn delete_shelf(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .delete(&format!("/api/shelves/delete/{}", id))
        .await
        .map_err(|e| e.or_message("Failed to delete shelf"))?;
    Ok(())
}

// ============================================================================
// Product locations
// ============================================================================

pub async fn fetch_locations(
    client: &ApiClient,
    filter: &LocationFilter,
) -> Result<Vec<ProductLocation>, ApiError> {
    let envelope = client
        .get(&format!("/api/positions/{}", filter.path()))
        .await
        .map_err(|e| e.or_message("Failed to fetch positions"))?;
    Ok(envelope.optional_field("positions")?.unwrap_or_default())
}

pub async fn add_location(client: &ApiClient, dto: &AddLocationDto) -> Result<(), ApiError> {
    dto.validate()?;
    client
        .post("/api/positions/add", dto)
        .await
        .map_err(|e| e.or_message("Failed to add position"))?;
    Ok(())
}

pub async fn update_location_quantity(
    client: &ApiClient,
    id: i64,
    quantity: i64,
) -> Result<(), ApiError> {
    if quantity < 0 {
        return Err(ApiError::Invalid("Quantity cannot be negative".into()));
    }
    client
        .put(
            &format!("/api/positions/{}/quantity", id),
            &UpdateQuantityDto { quantity },
        )
        .await
        .map_err(|e| e.or_message("Failed to update quantity"))?;
    Ok(())
}

pub async fn delete_location(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .delete(&format!("/api/positions/delete/{}", id))
        .await
        .map_err(|e| e.or_message("Failed to delete position"))?;
    Ok(())
}
