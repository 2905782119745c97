//! Remote side of the stocktaking flow, expressed against a gateway so it can run
//! over HTTP in the browser and over an in-memory fake in tests.

use async_trait::async_trait;

use super::aggregate::{
    CancelledSessions, NewSessionRequest, SessionUpdate, StocktakingError, StocktakingProduct,
    StocktakingSession,
};
use crate::enums::SessionStatus;
use crate::shared::api::ApiError;

#[async_trait(?Send)]
pub trait StocktakingGateway {
    /// `None` when the server reports no active session.
    async fn fetch_active_session(&self) -> Result<Option<StocktakingSession>, ApiError>;
    async fn fetch_sessions(&self) -> Result<Vec<StocktakingSession>, ApiError>;
    async fn fetch_session(&self, id: i64) -> Result<StocktakingSession, ApiError>;
    async fn fetch_session_products(&self, id: i64) -> Result<Vec<StocktakingProduct>, ApiError>;
    async fn create_session(&self, req: &NewSessionRequest)
        -> Result<StocktakingSession, ApiError>;
    async fn update_session(&self, id: i64, update: &SessionUpdate) -> Result<(), ApiError>;
    async fn update_product_count(
        &self,
        session_id: i64,
        product_id: i64,
        counted: i64,
    ) -> Result<(), ApiError>;
    async fn delete_session(&self, id: i64) -> Result<(), ApiError>;
}

/// Finds the session to resume: the server's active session unless this browser
/// cancelled it, otherwise the first ACTIVE, non-cancelled one from the full list.
pub async fn load_current_session<G>(
    gateway: &G,
    cancelled: &CancelledSessions,
) -> Result<Option<StocktakingSession>, StocktakingError>
where
    G: StocktakingGateway + ?Sized,
{
    let active = match gateway.fetch_active_session().await {
        Ok(session) => session.filter(|s| !cancelled.contains(s.id)),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => {
            log::debug!("active session lookup failed, scanning list: {}", e);
            None
        }
    };

    let found = match active {
        Some(session) => Some(session),
        None => gateway
            .fetch_sessions()
            .await?
            .into_iter()
            .find(|s| s.status == SessionStatus::Active && !cancelled.contains(s.id)),
    };

    match found {
        Some(session) if session.products().is_empty() => {
            let products = gateway.fetch_session_products(session.id).await?;
            Ok(Some(session.with_products(products)))
        }
        other => Ok(other),
    }
}

/// All sessions the server knows, minus the ones cancelled in this browser.
pub async fn list_sessions<G>(
    gateway: &G,
    cancelled: &CancelledSessions,
) -> Result<Vec<StocktakingSession>, StocktakingError>
where
    G: StocktakingGateway + ?Sized,
{
    let sessions = gateway.fetch_sessions().await?;
    Ok(sessions
        .into_iter()
        .filter(|s| !cancelled.contains(s.id))
        .collect())
}

/// Session header plus its product lines, for the history details view.
pub async fn session_details<G>(
    gateway: &G,
    id: i64,
) -> Result<StocktakingSession, StocktakingError>
where
    G: StocktakingGateway + ?Sized,
{
    let session = gateway.fetch_session(id).await?;
    let products = gateway.fetch_session_products(id).await?;
    Ok(session.with_products(products))
}

/// Applies one count. Remote sessions are only updated after the server accepted the
/// value, so a failed PUT leaves `session` as it was.
pub async fn record_count<G>(
    gateway: &G,
    session: &StocktakingSession,
    product_id: i64,
    counted: i64,
) -> Result<StocktakingSession, StocktakingError>
where
    G: StocktakingGateway + ?Sized,
{
    let next = session.with_count(product_id, counted)?;
    if !session.is_local() {
        log::debug!(
            "saving count {} for product {} in session {}",
            counted,
            product_id,
            session.id
        );
        gateway
            .update_product_count(session.id, product_id, counted)
            .await?;
    }
    Ok(next)
}

/// Edits name and notes. Local sessions change in memory only.
pub async fn rename_session<G>(
    gateway: &G,
    session: &StocktakingSession,
    name: &str,
    notes: &str,
) -> Result<StocktakingSession, StocktakingError>
where
    G: StocktakingGateway + ?Sized,
{
    let next = session.renamed(name, notes)?;
    if !session.is_local() {
        gateway.update_session(session.id, &next.update(None)).await?;
    }
    Ok(next)
}

/// Completes the session and returns its server id.
///
/// A local session is created first, then every counted product is saved, then the
/// status is switched to COMPLETED. Steps are not rolled back: when one fails the
/// server may keep an ACTIVE session with part of the counts, and the last error seen
/// is returned.
pub async fn complete_session<G>(
    gateway: &G,
    session: &StocktakingSession,
) -> Result<i64, StocktakingError>
where
    G: StocktakingGateway + ?Sized,
{
    if session.status == SessionStatus::Completed {
        return Err(StocktakingError::ReadOnly);
    }
    let completion = session.update(Some(SessionStatus::Completed));

    if !session.is_local() {
        gateway.update_session(session.id, &completion).await?;
        return Ok(session.id);
    }

    let created = gateway
        .create_session(&session.new_session_request())
        .await?;
    log::debug!("local session {} saved as {}", session.id, created.id);

    let mut last_error: Option<ApiError> = None;
    for product in session.counted_products() {
        let Some(counted) = product.counted() else {
            continue;
        };
        if let Err(e) = gateway
            .update_product_count(created.id, product.product_id, counted)
            .await
        {
            log::warn!(
                "count for product {} not saved in session {}: {}",
                product.product_id,
                created.id,
                e
            );
            last_error = Some(e);
        }
    }

    if let Err(e) = gateway.update_session(created.id, &completion).await {
        log::warn!("session {} left ACTIVE: {}", created.id, e);
        last_error = Some(e);
    }

    match last_error {
        Some(e) => Err(e.into()),
        None => Ok(created.id),
    }
}

/// Hides the session from this browser. Nothing is sent to the server.
pub fn cancel_session(session: &StocktakingSession, cancelled: &mut CancelledSessions) {
    cancelled.insert(session.id);
}

pub async fn delete_session<G>(gateway: &G, id: i64) -> Result<(), StocktakingError>
where
    G: StocktakingGateway + ?Sized,
{
    gateway.delete_session(id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;
    use chrono::Utc;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Active,
        List,
        Get(i64),
        Products(i64),
        Create(String),
        Update(i64, Option<SessionStatus>),
        Count(i64, i64, i64),
        Delete(i64),
    }

    #[derive(Default)]
    struct FakeGateway {
        calls: RefCell<Vec<Call>>,
        active: Option<StocktakingSession>,
        sessions: Vec<StocktakingSession>,
        lines: Vec<StocktakingProduct>,
        fail_counts_for: Option<i64>,
        fail_update: bool,
        fail_create: bool,
    }

    fn http_error(message: &str) -> ApiError {
        ApiError::Http {
            status: 500,
            message: message.to_string(),
        }
    }

    #[async_trait(?Send)]
    impl StocktakingGateway for FakeGateway {
        async fn fetch_active_session(&self) -> Result<Option<StocktakingSession>, ApiError> {
            self.calls.borrow_mut().push(Call::Active);
            Ok(self.active.clone())
        }

        async fn fetch_sessions(&self) -> Result<Vec<StocktakingSession>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            Ok(self.sessions.clone())
        }

        async fn fetch_session(&self, id: i64) -> Result<StocktakingSession, ApiError> {
            self.calls.borrow_mut().push(Call::Get(id));
            self.sessions
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or_else(|| http_error("not found"))
        }

        async fn fetch_session_products(
            &self,
            id: i64,
        ) -> Result<Vec<StocktakingProduct>, ApiError> {
            self.calls.borrow_mut().push(Call::Products(id));
            Ok(self.lines.clone())
        }

        async fn create_session(
            &self,
            req: &NewSessionRequest,
        ) -> Result<StocktakingSession, ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Create(req.session_name.clone()));
            if self.fail_create {
                return Err(http_error("create failed"));
            }
            Ok(remote(500, SessionStatus::Active))
        }

        async fn update_session(&self, id: i64, update: &SessionUpdate) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Update(id, update.status));
            if self.fail_update {
                return Err(http_error("update failed"));
            }
            Ok(())
        }

        async fn update_product_count(
            &self,
            session_id: i64,
            product_id: i64,
            counted: i64,
        ) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Count(session_id, product_id, counted));
            if self.fail_counts_for == Some(product_id) {
                return Err(http_error("count rejected"));
            }
            Ok(())
        }

        async fn delete_session(&self, id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id));
            Ok(())
        }
    }

    fn product(id: i64, quantity: i64) -> Product {
        Product {
            id,
            product_name: format!("P{}", id),
            price: 1.0,
            quantity,
            category: String::new(),
            supplier: String::new(),
        }
    }

    fn remote(id: i64, status: SessionStatus) -> StocktakingSession {
        let json = serde_json::json!({
            "id": id,
            "sessionName": format!("S{}", id),
            "sessionDate": "2024-01-01T00:00:00Z",
            "sessionNotes": "",
            "status": status,
            "products": [
                {"productId": 1, "productName": "P1", "currentQuantity": 10, "countedQuantity": null},
                {"productId": 2, "productName": "P2", "currentQuantity": 5, "countedQuantity": null}
            ]
        });
        serde_json::from_value(json).unwrap()
    }

    fn local() -> StocktakingSession {
        StocktakingSession::new_local("Local", "n", &[product(1, 10), product(2, 5)], Utc::now())
            .unwrap()
    }

    #[tokio::test]
    async fn local_counts_stay_in_memory() {
        let gw = FakeGateway::default();
        let s = record_count(&gw, &local(), 1, 12).await.unwrap();
        let s = record_count(&gw, &s, 2, 5).await.unwrap();
        assert_eq!(s.product(1).unwrap().discrepancy(), Some(2));
        assert_eq!(s.product(2).unwrap().discrepancy(), Some(0));
        assert!(gw.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn remote_count_failure_keeps_previous_values() {
        let gw = FakeGateway {
            fail_counts_for: Some(2),
            ..Default::default()
        };
        let session = record_count(&gw, &remote(9, SessionStatus::Active), 1, 7)
            .await
            .unwrap();

        let err = record_count(&gw, &session, 2, 1).await.unwrap_err();
        assert!(matches!(err, StocktakingError::Api(ApiError::Http { .. })));
        assert_eq!(session.product(1).unwrap().counted(), Some(7));
        assert_eq!(session.product(2).unwrap().counted(), None);
        assert_eq!(session.product(2).unwrap().discrepancy(), None);
        assert_eq!(
            *gw.calls.borrow(),
            vec![Call::Count(9, 1, 7), Call::Count(9, 2, 1)]
        );
    }

    #[tokio::test]
    async fn invalid_count_never_reaches_server() {
        let gw = FakeGateway::default();
        let err = record_count(&gw, &remote(9, SessionStatus::Active), 1, -4)
            .await
            .unwrap_err();
        assert_eq!(err, StocktakingError::NegativeCount);
        assert!(gw.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn completing_local_session_creates_then_updates() {
        let gw = FakeGateway::default();
        let s = local().with_count(2, 4).unwrap();
        let id = complete_session(&gw, &s).await.unwrap();
        assert_eq!(id, 500);
        assert_eq!(
            *gw.calls.borrow(),
            vec![
                Call::Create("Local".into()),
                Call::Count(500, 2, 4),
                Call::Update(500, Some(SessionStatus::Completed)),
            ]
        );
    }

    #[tokio::test]
    async fn partial_failure_reports_last_error_without_rollback() {
        let gw = FakeGateway {
            fail_counts_for: Some(1),
            ..Default::default()
        };
        let s = local().with_count(1, 3).unwrap().with_count(2, 5).unwrap();
        let err = complete_session(&gw, &s).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: count rejected");
        assert_eq!(
            *gw.calls.borrow(),
            vec![
                Call::Create("Local".into()),
                Call::Count(500, 1, 3),
                Call::Count(500, 2, 5),
                Call::Update(500, Some(SessionStatus::Completed)),
            ]
        );
    }

    #[tokio::test]
    async fn failed_create_stops_completion() {
        let gw = FakeGateway {
            fail_create: true,
            ..Default::default()
        };
        let s = local().with_count(1, 3).unwrap();
        assert!(complete_session(&gw, &s).await.is_err());
        assert_eq!(*gw.calls.borrow(), vec![Call::Create("Local".into())]);
    }

    #[tokio::test]
    async fn completing_remote_session_is_one_put() {
        let gw = FakeGateway::default();
        let id = complete_session(&gw, &remote(9, SessionStatus::Active))
            .await
            .unwrap();
        assert_eq!(id, 9);
        assert_eq!(
            *gw.calls.borrow(),
            vec![Call::Update(9, Some(SessionStatus::Completed))]
        );

        let err = complete_session(&gw, &remote(9, SessionStatus::Completed))
            .await
            .unwrap_err();
        assert_eq!(err, StocktakingError::ReadOnly);
    }

    #[tokio::test]
    async fn cancelled_session_is_never_resurfaced() {
        let active = remote(4, SessionStatus::Active);
        let gw = FakeGateway {
            active: Some(active.clone()),
            sessions: vec![active.clone(), remote(3, SessionStatus::Completed)],
            ..Default::default()
        };
        let mut cancelled = CancelledSessions::default();
        assert_eq!(
            load_current_session(&gw, &cancelled).await.unwrap().map(|s| s.id),
            Some(4)
        );

        cancel_session(&active, &mut cancelled);
        assert!(load_current_session(&gw, &cancelled).await.unwrap().is_none());
        let ids: Vec<_> = list_sessions(&gw, &cancelled)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }

    #[tokio::test]
    async fn cancelled_local_session_is_blocked_by_id() {
        let session = local();
        let mut cancelled = CancelledSessions::default();
        cancel_session(&session, &mut cancelled);
        assert!(cancelled.contains(session.id));
        assert_eq!(cancelled.len(), 1);

        let restored = CancelledSessions::from_json(&cancelled.to_json());
        assert!(restored.contains(session.id));

        let same_id = remote(session.id, SessionStatus::Active);
        let gw = FakeGateway {
            active: Some(same_id.clone()),
            sessions: vec![same_id, remote(3, SessionStatus::Completed)],
            ..Default::default()
        };
        assert!(load_current_session(&gw, &restored).await.unwrap().is_none());
        let ids: Vec<_> = list_sessions(&gw, &restored)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }

    #[tokio::test]
    async fn falls_back_to_list_and_loads_lines() {
        let bare = remote(6, SessionStatus::Active).with_products(Vec::new());
        let gw = FakeGateway {
            active: None,
            sessions: vec![remote(5, SessionStatus::Completed), bare],
            lines: remote(6, SessionStatus::Active).products().to_vec(),
            ..Default::default()
        };
        let session = load_current_session(&gw, &CancelledSessions::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.id, 6);
        assert_eq!(session.products().len(), 2);
        assert_eq!(
            *gw.calls.borrow(),
            vec![Call::Active, Call::List, Call::Products(6)]
        );
    }

    #[tokio::test]
    async fn rename_is_local_until_persisted() {
        let gw = FakeGateway::default();
        let s = rename_session(&gw, &local(), "Renamed", "notes").await.unwrap();
        assert_eq!(s.name, "Renamed");
        assert!(gw.calls.borrow().is_empty());

        let s = rename_session(&gw, &remote(2, SessionStatus::Active), "R", "")
            .await
            .unwrap();
        assert_eq!(s.name, "R");
        assert_eq!(*gw.calls.borrow(), vec![Call::Update(2, None)]);
    }

    #[tokio::test]
    async fn failed_remote_rename_is_reported() {
        let gw = FakeGateway {
            fail_update: true,
            ..Default::default()
        };
        let original = remote(2, SessionStatus::Active);
        assert!(rename_session(&gw, &original, "R", "").await.is_err());
        assert_eq!(original.name, "S2");
    }

    #[tokio::test]
    async fn details_and_delete() {
        let gw = FakeGateway {
            sessions: vec![remote(3, SessionStatus::Completed).with_products(Vec::new())],
            lines: remote(3, SessionStatus::Completed).products().to_vec(),
            ..Default::default()
        };
        let s = session_details(&gw, 3).await.unwrap();
        assert_eq!(s.products().len(), 2);
        delete_session(&gw, 3).await.unwrap();
        assert_eq!(
            *gw.calls.borrow(),
            vec![Call::Get(3), Call::Products(3), Call::Delete(3)]
        );
    }
}
