use contracts::domain::a005_transaction::{
    DetailedTransaction, ImportExportRequest, NewSaleRequest, Transaction,
};
use contracts::enums::TransactionType;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_transactions(client: &ApiClient) -> Result<Vec<Transaction>, ApiError> {
    let envelope = client
        .get("/api/transactions/all-transactions")
        .await
        .map_err(|e| e.or_message("Failed to fetch transactions"))?;
    Ok(envelope.optional_field("transactions")?.unwrap_or_default())
}

pub async fn fetch_transaction(
    client: &ApiClient,
    id: i64,
) -> Result<DetailedTransaction, ApiError> {
    client
        .get(&format!("/api/v1/transaction/{}", id))
        .await
        .map_err(|e| e.or_message("Failed to load transaction details"))?
        .field("data")
}

/// Records an import or export and returns the server's confirmation message.
pub async fn record_movement(
    client: &ApiClient,
    kind: TransactionType,
    request: &ImportExportRequest,
) -> Result<String, ApiError> {
    let path = kind
        .movement_path()
        .ok_or_else(|| ApiError::Invalid("Sales are recorded through the sale form".into()))?;
    request.validate()?;
    let action = path.to_string();
    let envelope = client
        .post(&format!("/api/v1/transaction/{}", path), request)
        .await
        .map_err(|e| e.or_message(&format!("Failed to {} product", action)))?;
    Ok(envelope.message_or(&format!("Product {}ed successfully", action)))
}

pub async fn create_sale(client: &ApiClient, request: &NewSaleRequest) -> Result<(), ApiError> {
    client.post("/api/transactions/create", request).await?;
    Ok(())
}
