use contracts::domain::a006_stocktaking::workflow::session_details;
use contracts::domain::a006_stocktaking::StocktakingSession;
use contracts::enums::SessionStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::count_table::CountTable;
use crate::domain::a006_stocktaking::api::HttpStocktakingGateway;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::{ErrorAlert, Modal};
use crate::system::auth::context::use_api;

/// Completed sessions, newest first.
pub fn completed_history(sessions: &[StocktakingSession]) -> Vec<StocktakingSession> {
    let mut completed: Vec<StocktakingSession> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed)
        .cloned()
        .collect();
    completed.sort_by(|a, b| b.date.cmp(&a.date));
    completed
}

#[component]
pub fn SessionHistory(
    #[prop(into)] sessions: Signal<Vec<StocktakingSession>>,
    on_open: Callback<i64>,
    on_delete: Callback<StocktakingSession>,
) -> impl IntoView {
    let rows = move || sessions.with(|s| completed_history(s));

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Previous Sessions"</h2>
                <span class="card__subtitle">"View completed stocktaking sessions"</span>
            </div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=160.0>"Session Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Date"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=200.0>"Notes"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=rows
                        key=|s| s.id
                        children=move |session| {
                            let id = session.id;
                            let for_delete = session.clone();
                            let notes = if session.notes_text().is_empty() {
                                "-".to_string()
                            } else {
                                session.notes_text().to_string()
                            };
                            view! {
                                <TableRow on:click=move |_| on_open.run(id) attr:style="cursor: pointer;">
                                    <TableCell><b>{session.name.clone()}</b></TableCell>
                                    <TableCell>{format_date(&session.date)}</TableCell>
                                    <TableCell>
                                        <Badge appearance=BadgeAppearance::Outline>"Completed"</Badge>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{notes}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |ev: leptos::ev::MouseEvent| {
                                                ev.stop_propagation();
                                                on_delete.run(for_delete.clone());
                                            }
                                            attr:title="Delete session"
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

/// Products of one past session.
#[component]
pub fn SessionDetailsModal(session_id: i64, on_close: Callback<()>) -> impl IntoView {
    let session: RwSignal<Option<StocktakingSession>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let gateway = HttpStocktakingGateway::new(use_api());

    spawn_local(async move {
        match session_details(&gateway, session_id).await {
            Ok(s) => session.set(Some(s)),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    });

    let title = Signal::derive(move || {
        session.with(|s| match s {
            Some(s) => format!("{} - Products", s.name),
            None => "Session Details".to_string(),
        })
    });

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            <ErrorAlert error=error />
            {move || session.with(|s| s.as_ref().map(|s| view! {
                <div class="details-grid">
                    <div><b>"Date: "</b>{format_date(&s.date)}</div>
                    {(!s.notes_text().is_empty()).then(|| view! {
                        <div><b>"Notes: "</b>{s.notes_text().to_string()}</div>
                    })}
                </div>
            }))}
            <CountTable session=session />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: i64, status: &str, date: &str) -> StocktakingSession {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "sessionName": format!("S{}", id),
            "sessionDate": date,
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn history_keeps_completed_newest_first() {
        let sessions = vec![
            session(1, "COMPLETED", "2024-01-10T08:00:00Z"),
            session(2, "ACTIVE", "2024-02-01T08:00:00Z"),
            session(3, "COMPLETED", "2024-03-05T08:00:00Z"),
        ];
        let ids: Vec<i64> = completed_history(&sessions).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
