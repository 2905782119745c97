use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::{lenient_f64, null_as_empty};

/// Sales metrics computed by the server (`GET /api/dashboard/metrics`, field `metrics`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Sum of all transactions
    #[serde(deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
    pub total_transactions: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub average_transaction_value: f64,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub top_sellers: Vec<TopSeller>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    pub total_quantity: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_name: String,
    pub total_transactions: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
}

impl DashboardMetrics {
    /// Share of total revenue held by a product, in percent.
    pub fn revenue_share(&self, product: &TopProduct) -> f64 {
        if self.total_revenue <= 0.0 {
            0.0
        } else {
            product.total_revenue / self.total_revenue * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiEnvelope;

    #[test]
    fn metrics_envelope_with_string_money() {
        let env = ApiEnvelope::from_http(
            200,
            r#"{"status":200,"message":"ok","metrics":{
                "totalRevenue":"1000.00","totalTransactions":4,"averageTransactionValue":"250",
                "topProducts":[{"productName":"Bolt","totalQuantity":30,"totalRevenue":"250.5"}],
                "topSellers":[{"userName":"ann","totalTransactions":3,"totalRevenue":750}]}}"#,
        )
        .unwrap();
        let m: DashboardMetrics = env.field("metrics").unwrap();
        assert_eq!(m.total_revenue, 1000.0);
        assert_eq!(m.average_transaction_value, 250.0);
        assert_eq!(m.top_sellers[0].total_revenue, 750.0);
        assert!((m.revenue_share(&m.top_products[0]) - 25.05).abs() < 1e-9);
    }
}
