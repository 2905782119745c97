//! REST implementation of the stocktaking gateway.

use async_trait::async_trait;
use contracts::domain::a006_stocktaking::{
    NewSessionRequest, SessionUpdate, StocktakingGateway, StocktakingProduct, StocktakingSession,
};
use contracts::shared::api::ApiError;
use serde::Serialize;

use crate::shared::api_utils::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountBody {
    counted_quantity: i64,
}

pub struct HttpStocktakingGateway {
    client: ApiClient,
}

impl HttpStocktakingGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl StocktakingGateway for HttpStocktakingGateway {
    async fn fetch_active_session(&self) -> Result<Option<StocktakingSession>, ApiError> {
        self.client
            .get("/api/v1/stocktaking/sessions/active")
            .await?
            .optional_field("data")
    }

    async fn fetch_sessions(&self) -> Result<Vec<StocktakingSession>, ApiError> {
        let envelope = self
            .client
            .get("/api/v1/stocktaking/getAllSessions")
            .await
            .map_err(|e| e.or_message("Failed to fetch sessions"))?;
        Ok(envelope.optional_field("data")?.unwrap_or_default())
    }

    async fn fetch_session(&self, id: i64) -> Result<StocktakingSession, ApiError> {
        self.client
            .get(&format!("/api/v1/stocktaking/sessions/{}", id))
            .await
            .map_err(|e| e.or_message("Failed to fetch session details"))?
            .field("data")
    }

    async fn fetch_session_products(&self, id: i64) -> Result<Vec<StocktakingProduct>, ApiError> {
        let envelope = self
            .client
            .get(&format!("/api/v1/stocktaking-products/session/{}", id))
            .await
            .map_err(|e| e.or_message("Failed to fetch session products"))?;
        Ok(envelope.optional_field("data")?.unwrap_or_default())
    }

    async fn create_session(
        &self,
        req: &NewSessionRequest,
    ) -> Result<StocktakingSession, ApiError> {
        self.client
            .post("/api/v1/stocktaking/createSession", req)
            .await
            .map_err(|e| e.or_message("Failed to create session"))?
            .field("data")
    }

    async fn update_session(&self, id: i64, update: &SessionUpdate) -> Result<(), ApiError> {
        let fallback = if update.status.is_some() {
            "Failed to complete session"
        } else {
            "Failed to update session"
        };
        self.client
            .put(&format!("/api/v1/stocktaking/sessions/{}", id), update)
            .await
            .map_err(|e| e.or_message(fallback))?;
        Ok(())
    }

    async fn update_product_count(
        &self,
        session_id: i64,
        product_id: i64,
        counted: i64,
    ) -> Result<(), ApiError> {
        self.client
            .put(
                &format!(
                    "/api/v1/stocktaking/sessions/{}/products/{}",
                    session_id, product_id
                ),
                &CountBody {
                    counted_quantity: counted,
                },
            )
            .await
            .map_err(|e| e.or_message("Failed to update product count"))?;
        Ok(())
    }

    async fn delete_session(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/api/v1/stocktaking/sessions/{}", id))
            .await
            .map_err(|e| e.or_message("Failed to delete session"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_body_shape() {
        let body = serde_json::to_string(&CountBody { counted_quantity: 12 }).unwrap();
        assert_eq!(body, r#"{"countedQuantity":12}"#);
    }
}
