//! Stocktaking session held on the client until completion.
//!
//! A session starts LOCAL (client generated id, product snapshot taken from the product
//! list) and only reaches the server when it is completed. Sessions fetched from the
//! server are REMOTE; every count on them is persisted one PUT at a time.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::Product;
use crate::enums::SessionStatus;
use crate::shared::api::ApiError;
use crate::shared::serde_helpers::null_as_empty;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StocktakingError {
    #[error("Session is completed and can no longer be changed")]
    ReadOnly,

    #[error("Product {0} is not part of this session")]
    UnknownProduct(i64),

    #[error("Counted quantity cannot be negative")]
    NegativeCount,

    #[error("Session name is required")]
    EmptyName,

    #[error(transparent)]
    Api(#[from] ApiError),
}

// ============================================================================
// Product line
// ============================================================================

/// One product of a session. `discrepancy` is derived from `counted` and is never
/// accepted from the outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProductLine")]
pub struct StocktakingProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub supplier: String,
    /// Stock on record when the session was created.
    #[serde(rename = "currentQuantity")]
    pub recorded_quantity: i64,
    #[serde(rename = "countedQuantity")]
    counted: Option<i64>,
    discrepancy: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductLine {
    #[serde(default)]
    id: Option<i64>,
    product_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    product_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    supplier: String,
    #[serde(default)]
    current_quantity: i64,
    #[serde(default)]
    counted_quantity: Option<i64>,
}

impl From<ProductLine> for StocktakingProduct {
    fn from(line: ProductLine) -> Self {
        let mut product = StocktakingProduct {
            id: line.id,
            product_id: line.product_id,
            product_name: line.product_name,
            category: line.category,
            supplier: line.supplier,
            recorded_quantity: line.current_quantity,
            counted: None,
            discrepancy: None,
        };
        product.set_counted(line.counted_quantity);
        product
    }
}

impl StocktakingProduct {
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: None,
            product_id: product.id,
            product_name: product.product_name.clone(),
            category: product.category.clone(),
            supplier: product.supplier.clone(),
            recorded_quantity: product.quantity,
            counted: None,
            discrepancy: None,
        }
    }

    pub fn counted(&self) -> Option<i64> {
        self.counted
    }

    pub fn discrepancy(&self) -> Option<i64> {
        self.discrepancy
    }

    pub fn status(&self) -> DiscrepancyStatus {
        DiscrepancyStatus::from_discrepancy(self.discrepancy)
    }

    fn set_counted(&mut self, counted: Option<i64>) {
        self.counted = counted;
        self.discrepancy = counted.map(|c| c - self.recorded_quantity);
    }
}

// ============================================================================
// Discrepancy policy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscrepancyStatus {
    NotCounted,
    Correct,
    Surplus(i64),
    Shortage(i64),
}

impl DiscrepancyStatus {
    pub fn from_discrepancy(discrepancy: Option<i64>) -> Self {
        match discrepancy {
            None => DiscrepancyStatus::NotCounted,
            Some(0) => DiscrepancyStatus::Correct,
            Some(d) if d > 0 => DiscrepancyStatus::Surplus(d),
            Some(d) => DiscrepancyStatus::Shortage(d),
        }
    }
}

impl fmt::Display for DiscrepancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscrepancyStatus::NotCounted => write!(f, "Not Counted"),
            DiscrepancyStatus::Correct => write!(f, "Correct"),
            DiscrepancyStatus::Surplus(d) => write!(f, "Surplus +{}", d),
            DiscrepancyStatus::Shortage(d) => write!(f, "Shortage {}", d),
        }
    }
}

/// Difference column text: `+2`, `0`, `-3`, or `-` when not counted.
pub fn format_difference(discrepancy: Option<i64>) -> String {
    match discrepancy {
        None => "-".to_string(),
        Some(d) if d > 0 => format!("+{}", d),
        Some(d) => d.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscrepancySummary {
    pub total: usize,
    pub counted: usize,
    pub surplus: usize,
    pub shortage: usize,
    pub missing: usize,
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Exists only in this browser.
    Local,
    #[default]
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LocalActive,
    RemoteActive,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StocktakingSession {
    pub id: i64,
    #[serde(rename = "sessionName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "sessionDate", default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(rename = "sessionNotes", default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default)]
    products: Vec<StocktakingProduct>,
    #[serde(skip)]
    origin: SessionOrigin,
}

impl StocktakingSession {
    /// Starts a client-only session over a snapshot of `products`.
    pub fn new_local(
        name: &str,
        notes: &str,
        products: &[Product],
        now: DateTime<Utc>,
    ) -> Result<Self, StocktakingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StocktakingError::EmptyName);
        }
        Ok(Self {
            id: now.timestamp_millis(),
            name: name.to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            notes: Some(notes.to_string()),
            status: SessionStatus::Active,
            products: products.iter().map(StocktakingProduct::snapshot).collect(),
            origin: SessionOrigin::Local,
        })
    }

    pub fn origin(&self) -> SessionOrigin {
        self.origin
    }

    pub fn is_local(&self) -> bool {
        self.origin == SessionOrigin::Local
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.status, self.origin) {
            (SessionStatus::Completed, _) => SessionPhase::Completed,
            (SessionStatus::Active, SessionOrigin::Local) => SessionPhase::LocalActive,
            (SessionStatus::Active, SessionOrigin::Remote) => SessionPhase::RemoteActive,
        }
    }

    pub fn products(&self) -> &[StocktakingProduct] {
        &self.products
    }

    pub fn product(&self, product_id: i64) -> Option<&StocktakingProduct> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }

    /// Products list for a remote session fetched without its lines.
    pub fn with_products(mut self, products: Vec<StocktakingProduct>) -> Self {
        self.products = products;
        self
    }

    /// Checks a count without applying it.
    pub fn check_count(&self, product_id: i64, counted: i64) -> Result<(), StocktakingError> {
        if self.status == SessionStatus::Completed {
            return Err(StocktakingError::ReadOnly);
        }
        if counted < 0 {
            return Err(StocktakingError::NegativeCount);
        }
        if self.product(product_id).is_none() {
            return Err(StocktakingError::UnknownProduct(product_id));
        }
        Ok(())
    }

    /// Copy of the session with one product counted.
    pub fn with_count(&self, product_id: i64, counted: i64) -> Result<Self, StocktakingError> {
        self.check_count(product_id, counted)?;
        let mut next = self.clone();
        for p in next.products.iter_mut().filter(|p| p.product_id == product_id) {
            p.set_counted(Some(counted));
        }
        Ok(next)
    }

    pub fn renamed(&self, name: &str, notes: &str) -> Result<Self, StocktakingError> {
        if self.status == SessionStatus::Completed {
            return Err(StocktakingError::ReadOnly);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(StocktakingError::EmptyName);
        }
        let mut next = self.clone();
        next.name = name.to_string();
        next.notes = Some(notes.to_string());
        Ok(next)
    }

    pub fn counted_products(&self) -> impl Iterator<Item = &StocktakingProduct> {
        self.products.iter().filter(|p| p.counted.is_some())
    }

    pub fn summary(&self) -> DiscrepancySummary {
        self.products
            .iter()
            .fold(DiscrepancySummary::default(), |mut acc, p| {
                acc.total += 1;
                match p.status() {
                    DiscrepancyStatus::NotCounted => acc.missing += 1,
                    DiscrepancyStatus::Correct => acc.counted += 1,
                    DiscrepancyStatus::Surplus(_) => {
                        acc.counted += 1;
                        acc.surplus += 1;
                    }
                    DiscrepancyStatus::Shortage(_) => {
                        acc.counted += 1;
                        acc.shortage += 1;
                    }
                }
                acc
            })
    }

    pub fn new_session_request(&self) -> NewSessionRequest {
        NewSessionRequest {
            session_name: self.name.clone(),
            session_notes: self.notes_text().to_string(),
        }
    }

    pub fn update(&self, status: Option<SessionStatus>) -> SessionUpdate {
        SessionUpdate {
            session_name: self.name.clone(),
            session_notes: self.notes_text().to_string(),
            status,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionRequest {
    pub session_name: String,
    pub session_notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub session_name: String,
    pub session_notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
}

// ============================================================================
// Cancelled ids
// ============================================================================

/// Session ids hidden from this browser, persisted as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CancelledSessions(BTreeSet<i64>);

impl CancelledSessions {
    /// Parses the stored array; anything unreadable starts a fresh list.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable cancelled session list: {}", e);
            Self::default()
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    pub fn insert(&mut self, id: i64) -> bool {
        self.0.insert(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(id: i64, quantity: i64) -> Product {
        Product {
            id,
            product_name: format!("P{}", id),
            price: 1.0,
            quantity,
            category: "C".into(),
            supplier: "S".into(),
        }
    }

    fn local() -> StocktakingSession {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        StocktakingSession::new_local(
            "March count",
            "",
            &[product(1, 10), product(2, 5)],
            now,
        )
        .unwrap()
    }

    #[test]
    fn new_session_snapshots_products() {
        let s = local();
        assert_eq!(s.id, 1_709_285_400_000);
        assert_eq!(s.date, "2024-03-01T09:30:00.000Z");
        assert_eq!(s.phase(), SessionPhase::LocalActive);
        assert_eq!(s.products().len(), 2);
        assert_eq!(s.products()[0].recorded_quantity, 10);
        assert!(s.products().iter().all(|p| p.counted().is_none()));
        assert!(s.products().iter().all(|p| p.discrepancy().is_none()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = StocktakingSession::new_local("  ", "", &[], Utc::now()).unwrap_err();
        assert_eq!(err, StocktakingError::EmptyName);
    }

    #[test]
    fn counts_yield_discrepancies_and_badges() {
        let s = local().with_count(1, 12).unwrap().with_count(2, 5).unwrap();
        let discrepancies: Vec<_> = s.products().iter().map(|p| p.discrepancy()).collect();
        assert_eq!(discrepancies, vec![Some(2), Some(0)]);
        let badges: Vec<_> = s.products().iter().map(|p| p.status().to_string()).collect();
        assert_eq!(badges, vec!["Surplus +2", "Correct"]);
    }

    #[test]
    fn with_count_leaves_original_untouched() {
        let s = local();
        let next = s.with_count(2, 3).unwrap();
        assert_eq!(s.product(2).unwrap().counted(), None);
        assert_eq!(next.product(2).unwrap().discrepancy(), Some(-2));
        assert_eq!(next.product(2).unwrap().status().to_string(), "Shortage -2");
    }

    #[test]
    fn invalid_counts() {
        let s = local();
        assert_eq!(s.with_count(9, 1).unwrap_err(), StocktakingError::UnknownProduct(9));
        assert_eq!(s.with_count(1, -1).unwrap_err(), StocktakingError::NegativeCount);

        let mut done = s.clone();
        done.status = SessionStatus::Completed;
        assert_eq!(done.phase(), SessionPhase::Completed);
        assert_eq!(done.with_count(1, 1).unwrap_err(), StocktakingError::ReadOnly);
        assert_eq!(done.renamed("x", "").unwrap_err(), StocktakingError::ReadOnly);
    }

    #[test]
    fn badge_mapping() {
        assert_eq!(DiscrepancyStatus::from_discrepancy(None).to_string(), "Not Counted");
        assert_eq!(DiscrepancyStatus::from_discrepancy(Some(0)).to_string(), "Correct");
        assert_eq!(DiscrepancyStatus::from_discrepancy(Some(4)).to_string(), "Surplus +4");
        assert_eq!(DiscrepancyStatus::from_discrepancy(Some(-3)).to_string(), "Shortage -3");
        assert_eq!(format_difference(Some(2)), "+2");
        assert_eq!(format_difference(Some(0)), "0");
        assert_eq!(format_difference(Some(-3)), "-3");
        assert_eq!(format_difference(None), "-");
    }

    #[test]
    fn summary_counts_each_state() {
        let s = local().with_count(1, 12).unwrap();
        assert_eq!(
            s.summary(),
            DiscrepancySummary {
                total: 2,
                counted: 1,
                surplus: 1,
                shortage: 0,
                missing: 1,
            }
        );
    }

    #[test]
    fn server_discrepancy_is_recomputed() {
        let json = r#"{"id":7,"sessionName":"Q1","sessionDate":"2024-01-01","sessionNotes":null,
            "status":"ACTIVE","products":[
              {"id":70,"productId":1,"productName":"A","category":"C","supplier":"S",
               "currentQuantity":10,"countedQuantity":8,"discrepancy":99},
              {"productId":2,"productName":"B","currentQuantity":4,"countedQuantity":null,"discrepancy":3}
            ]}"#;
        let s: StocktakingSession = serde_json::from_str(json).unwrap();
        assert_eq!(s.phase(), SessionPhase::RemoteActive);
        assert_eq!(s.products()[0].discrepancy(), Some(-2));
        assert_eq!(s.products()[1].discrepancy(), None);
        assert_eq!(s.notes_text(), "");
    }

    #[test]
    fn requests_serialize_with_wire_names() {
        let s = local();
        let body = serde_json::to_value(s.update(Some(SessionStatus::Completed))).unwrap();
        assert_eq!(body["sessionName"], "March count");
        assert_eq!(body["status"], "COMPLETED");
        let body = serde_json::to_value(s.update(None)).unwrap();
        assert!(body.get("status").is_none());
        let body = serde_json::to_value(s.new_session_request()).unwrap();
        assert_eq!(body["sessionNotes"], "");
    }

    #[test]
    fn cancelled_ids_persist_as_array() {
        let mut ids = CancelledSessions::from_json("[3, 1]");
        assert!(ids.insert(2));
        assert!(!ids.insert(3));
        assert_eq!(ids.to_json(), "[1,2,3]");
        assert!(CancelledSessions::from_json("not json").is_empty());
    }
}
