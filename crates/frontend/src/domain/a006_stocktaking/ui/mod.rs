//! Stocktaking page.
//!
//! A new session lives only in this browser until it is completed; counts on a
//! session loaded from the server are saved one by one as they are entered.

mod count_table;
mod history;
mod session_form;

use contracts::domain::a001_product::Product;
use contracts::domain::a006_stocktaking::workflow::{
    cancel_session, complete_session, delete_session, list_sessions, load_current_session,
    record_count, rename_session,
};
use contracts::domain::a006_stocktaking::{CancelledSessions, SessionPhase, StocktakingSession};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::count_table::CountTable;
use self::history::{completed_history, SessionDetailsModal, SessionHistory};
use self::session_form::SessionFormDialog;
use crate::domain::a001_product::api::fetch_products;
use crate::domain::a006_stocktaking::api::HttpStocktakingGateway;
use crate::shared::date_utils::{format_datetime, now_utc};
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, Modal, SuccessAlert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::context::use_api;
use crate::system::auth::storage;

fn phase_badge(phase: SessionPhase) -> (BadgeColor, &'static str) {
    match phase {
        SessionPhase::LocalActive => (BadgeColor::Warning, "Local"),
        SessionPhase::RemoteActive => (BadgeColor::Brand, "Active"),
        SessionPhase::Completed => (BadgeColor::Subtle, "Completed"),
    }
}

/// A local session exists only on this page and leaves it through Complete or
/// Cancel, never through a reload.
fn keeps_current_on_reload(current: Option<&StocktakingSession>) -> bool {
    current.is_some_and(StocktakingSession::is_local)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Dialog {
    NewSession,
    EditSession,
    CancelSession,
}

#[component]
pub fn StocktakingPage() -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let current: RwSignal<Option<StocktakingSession>> = RwSignal::new(None);
    let sessions: RwSignal<Vec<StocktakingSession>> = RwSignal::new(Vec::new());
    let cancelled = StoredValue::new(storage::load_cancelled_sessions());

    let (error, set_error) = signal::<Option<String>>(None);
    let (dialog_error, set_dialog_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);

    let dialog: RwSignal<Option<Dialog>> = RwSignal::new(None);
    let details: RwSignal<Option<i64>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<StocktakingSession>> = RwSignal::new(None);

    let client = StoredValue::new(use_api());
    let gateway = move || HttpStocktakingGateway::new(client.get_value());

    let reload_sessions = move || {
        let gateway = gateway();
        let blocked = cancelled.get_value();
        spawn_local(async move {
            match list_sessions(&gateway, &blocked).await {
                Ok(list) => sessions.set(list),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let load_all = move || {
        set_loading.set(true);
        set_error.set(None);
        let client_value = client.get_value();
        let gateway = gateway();
        let blocked = cancelled.get_value();
        let keep_current = current.with_untracked(|c| keeps_current_on_reload(c.as_ref()));
        spawn_local(async move {
            match fetch_products(&client_value).await {
                Ok(list) => products.set(list),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            if !keep_current {
                match load_current_session(&gateway, &blocked).await {
                    Ok(session) => current.set(session),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            }
            match list_sessions(&gateway, &blocked).await {
                Ok(list) => sessions.set(list),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };
    load_all();

    let close_dialog = Callback::new(move |_| {
        dialog.set(None);
        set_dialog_error.set(None);
    });

    let on_create = Callback::new(move |(name, notes): (String, String)| {
        let snapshot = products.get_untracked();
        match StocktakingSession::new_local(&name, &notes, &snapshot, now_utc()) {
            Ok(session) => {
                log::info!("local session {} started with {} products", session.id, snapshot.len());
                current.set(Some(session));
                close_dialog.run(());
            }
            Err(e) => set_dialog_error.set(Some(e.to_string())),
        }
    });

    let on_rename = Callback::new(move |(name, notes): (String, String)| {
        let Some(session) = current.get_untracked() else {
            return;
        };
        set_busy.set(true);
        let gateway = gateway();
        spawn_local(async move {
            match rename_session(&gateway, &session, &name, &notes).await {
                Ok(next) => {
                    current.set(Some(next));
                    close_dialog.run(());
                }
                Err(e) => set_dialog_error.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    });

    let on_count = Callback::new(move |(product_id, counted): (i64, i64)| {
        let Some(session) = current.get_untracked() else {
            return;
        };
        set_busy.set(true);
        set_error.set(None);
        let gateway = gateway();
        spawn_local(async move {
            match record_count(&gateway, &session, product_id, counted).await {
                Ok(next) => current.set(Some(next)),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    // Inputs fall back to the unchanged counts.
                    current.update(|_| {});
                }
            }
            set_busy.set(false);
        });
    });

    let on_complete = move |_| {
        let Some(session) = current.get_untracked() else {
            return;
        };
        set_busy.set(true);
        set_error.set(None);
        set_notice.set(None);
        let gateway = gateway();
        spawn_local(async move {
            match complete_session(&gateway, &session).await {
                Ok(id) => {
                    log::info!("stocktaking session {} completed", id);
                    current.set(None);
                    set_notice.set(Some("Session completed successfully".to_string()));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            reload_sessions();
            set_busy.set(false);
        });
    };

    let on_cancel_session = move |_| {
        let Some(session) = current.get_untracked() else {
            return;
        };
        let mut blocked: CancelledSessions = cancelled.get_value();
        cancel_session(&session, &mut blocked);
        storage::save_cancelled_sessions(&blocked);
        cancelled.set_value(blocked);
        current.set(None);
        dialog.set(None);
        log::info!("stocktaking session {} cancelled locally", session.id);
    };

    let on_confirm_delete = move |_| {
        let Some(session) = pending_delete.get_untracked() else {
            return;
        };
        set_busy.set(true);
        let gateway = gateway();
        spawn_local(async move {
            match delete_session(&gateway, session.id).await {
                Ok(()) => {
                    if current.with_untracked(|c| c.as_ref().map(|c| c.id)) == Some(session.id) {
                        current.set(None);
                    }
                    reload_sessions();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            pending_delete.set(None);
            set_busy.set(false);
        });
    };

    let has_current = move || current.with(|c| c.is_some());
    let has_history = move || sessions.with(|s| !completed_history(s).is_empty());

    view! {
        <PageFrame page_id="a006_stocktaking--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stocktaking"</h1>
                    <span class="page__subtitle">"Create and manage inventory count sessions"</span>
                </div>
                <div class="page__header-right">
                    <Show when=move || !has_current()>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| dialog.set(Some(Dialog::NewSession))
                            disabled=Signal::derive(move || loading.get())
                        >
                            {icon("plus")}
                            " New Session"
                        </Button>
                    </Show>
                </div>
            </div>

            <div class="page__content">
                <SuccessAlert message=notice />
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">
                        {move || error.get().unwrap_or_default()}
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| load_all()>
                            "Retry"
                        </Button>
                    </div>
                </Show>

                <Show when=move || loading.get()>
                    <div class="page__loading">
                        <Spinner />
                        <p>"Loading stocktaking data..."</p>
                    </div>
                </Show>

                {move || current.get().map(|session| {
                    let (color, label) = phase_badge(session.phase());
                    let summary = session.summary();
                    let notes = session.notes_text().to_string();
                    view! {
                        <div class="card session-card">
                            <div class="card__header">
                                <h2 class="card__title">{session.name.clone()}</h2>
                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                    <Badge appearance=BadgeAppearance::Filled color=color>{label}</Badge>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| dialog.set(Some(Dialog::EditSession))
                                        disabled=Signal::derive(move || busy.get())
                                    >
                                        {icon("edit")}
                                        " Edit"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| dialog.set(Some(Dialog::CancelSession))
                                        disabled=Signal::derive(move || busy.get())
                                    >
                                        {icon("x")}
                                        " Cancel"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=on_complete
                                        disabled=Signal::derive(move || busy.get())
                                    >
                                        {move || if busy.get() { "Saving..." } else { "Complete Session" }}
                                    </Button>
                                </Flex>
                            </div>
                            <div class="card__subtitle">
                                {format!("Started: {}", format_datetime(&session.date))}
                            </div>
                            {(!notes.is_empty()).then(|| view! {
                                <div class="session-card__notes"><b>"Notes: "</b>{notes}</div>
                            })}
                        </div>

                        <div class="summary-cards">
                            <div class="summary-card">
                                <div class="summary-card__value">{summary.total}</div>
                                <div class="summary-card__label">"Total Products"</div>
                            </div>
                            <div class="summary-card summary-card--success">
                                <div class="summary-card__value">{summary.counted}</div>
                                <div class="summary-card__label">"Counted"</div>
                            </div>
                            <div class="summary-card summary-card--info">
                                <div class="summary-card__value">{summary.surplus}</div>
                                <div class="summary-card__label">"Surplus Items"</div>
                            </div>
                            <div class="summary-card summary-card--danger">
                                <div class="summary-card__value">{summary.shortage}</div>
                                <div class="summary-card__label">"Shortage Items"</div>
                            </div>
                        </div>
                    }
                })}

                <Show when=has_current>
                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Product Count"</h2>
                            <span class="card__subtitle">"Enter the counted quantity for each product"</span>
                        </div>
                        <CountTable session=current on_count=on_count saving=busy />
                    </div>
                </Show>

                <Show when=move || !has_current() && has_history()>
                    <SessionHistory
                        sessions=sessions
                        on_open=Callback::new(move |id| details.set(Some(id)))
                        on_delete=Callback::new(move |s| pending_delete.set(Some(s)))
                    />
                </Show>

                <Show when=move || !loading.get() && !has_current() && !has_history()>
                    <div class="empty-state">
                        {icon("stocktaking")}
                        <h3>"No Stocktaking Sessions"</h3>
                        <p>"Create your first stocktaking session to start counting inventory"</p>
                    </div>
                </Show>

                {move || match dialog.get() {
                    Some(Dialog::NewSession) => view! {
                        <SessionFormDialog
                            title="Create New Stocktaking Session"
                            submit_label="Create Session"
                            busy=busy
                            error=dialog_error
                            on_submit=on_create
                            on_close=close_dialog
                        />
                    }.into_any(),
                    Some(Dialog::EditSession) => {
                        let (name, notes) = current.with_untracked(|c| {
                            c.as_ref()
                                .map(|s| (s.name.clone(), s.notes_text().to_string()))
                                .unwrap_or_default()
                        });
                        view! {
                            <SessionFormDialog
                                title="Edit Stocktaking Session"
                                submit_label="Save Changes"
                                initial_name=name
                                initial_notes=notes
                                busy=busy
                                error=dialog_error
                                on_submit=on_rename
                                on_close=close_dialog
                            />
                        }.into_any()
                    }
                    Some(Dialog::CancelSession) => view! {
                        <Modal
                            title="Cancel Stocktaking Session".to_string()
                            on_close=close_dialog
                            footer=move || view! {
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_dialog.run(())>
                                    "Keep Session"
                                </Button>
                                <Button appearance=ButtonAppearance::Primary on_click=on_cancel_session>
                                    "Cancel Session"
                                </Button>
                            }
                        >
                            <p>
                                "Are you sure you want to cancel this stocktaking session? "
                                "This action cannot be undone and all progress will be lost."
                            </p>
                            {move || current.get().map(|s| view! {
                                <div class="session-card__notes">
                                    <b>{s.name.clone()}</b>
                                    <div>{format!("Started: {}", format_datetime(&s.date))}</div>
                                </div>
                            })}
                        </Modal>
                    }.into_any(),
                    None => ().into_any(),
                }}

                {move || details.get().map(|id| view! {
                    <SessionDetailsModal session_id=id on_close=Callback::new(move |_| details.set(None)) />
                })}

                {move || pending_delete.get().map(|s| view! {
                    <ConfirmDialog
                        message=format!("Delete session \"{}\"?", s.name)
                        busy=busy
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                        on_confirm=Callback::new(on_confirm_delete)
                    />
                })}

            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_and_remote_badges_differ() {
        assert_eq!(phase_badge(SessionPhase::LocalActive).1, "Local");
        assert_eq!(phase_badge(SessionPhase::RemoteActive).1, "Active");
    }

    #[test]
    fn reload_keeps_only_local_sessions() {
        let local = StocktakingSession::new_local("Morning count", "", &[], chrono::Utc::now())
            .unwrap();
        assert!(keeps_current_on_reload(Some(&local)));

        let remote: StocktakingSession = serde_json::from_value(serde_json::json!({
            "id": 9,
            "sessionName": "Server",
            "sessionDate": "2024-01-01T00:00:00Z",
            "sessionNotes": "",
            "status": "ACTIVE",
            "products": []
        }))
        .unwrap();
        assert!(!keeps_current_on_reload(Some(&remote)));
        assert!(!keeps_current_on_reload(None));
    }
}
