use contracts::dashboards::d400_metrics::DashboardMetrics;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::ApiClient;

/// Sales metrics computed by the server.
pub async fn fetch_metrics(client: &ApiClient) -> Result<DashboardMetrics, ApiError> {
    client
        .get("/api/dashboard/metrics")
        .await
        .map_err(|e| e.or_message("Failed to fetch metrics"))?
        .field("metrics")
}
