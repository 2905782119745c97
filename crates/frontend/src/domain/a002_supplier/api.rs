use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_suppliers(client: &ApiClient) -> Result<Vec<Supplier>, ApiError> {
    client
        .get("/suppliers/getAll")
        .await
        .map_err(|e| e.or_message("Failed to fetch suppliers"))?
        .optional_field("suppliers")?
        .ok_or_else(|| ApiError::Parse("Invalid data format received from server".to_string()))
}

pub async fn create_supplier(client: &ApiClient, dto: &SupplierDto) -> Result<(), ApiError> {
    dto.validate()?;
    client
        .post("/suppliers", dto)
        .await
        .map_err(|e| e.or_message("Failed to add supplier"))?;
    Ok(())
}

pub async fn update_supplier(
    client: &ApiClient,
    id: i64,
    dto: &SupplierDto,
) -> Result<(), ApiError> {
    dto.validate()?;
    client
        .put(&format!("/api/suppliers/update/{}", id), dto)
        .await
        .map_err(|e| e.or_message("Failed to update supplier"))?;
    Ok(())
}

pub async fn delete_supplier(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .delete(&format!("/suppliers/{}", id))
        .await
        .map_err(|e| e.or_message("Failed to delete supplier"))?;
    Ok(())
}
