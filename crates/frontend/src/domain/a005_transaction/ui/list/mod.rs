use contracts::domain::a005_transaction::Transaction;
use contracts::enums::TransactionType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::TransactionDetails;
use super::movement::MovementDialog;
use crate::domain::a005_transaction::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_f64, cmp_text, create_list_state, filter_and_sort, Searchable, Sortable,
    SortableHeaderCell,
};
use crate::shared::modal::ErrorAlert;
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_api;

impl Searchable for Transaction {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.transaction_number.to_lowercase().contains(&filter)
            || self.transaction_type.code().to_lowercase().contains(&filter)
            || self
                .user_name
                .as_deref()
                .is_some_and(|u| u.to_lowercase().contains(&filter))
            || self
                .notes
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&filter))
    }
}

impl Sortable for Transaction {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "type" => self.transaction_type.code().cmp(other.transaction_type.code()),
            "user" => cmp_text(
                self.user_name.as_deref().unwrap_or(""),
                other.user_name.as_deref().unwrap_or(""),
            ),
            "total" => cmp_f64(self.total_amount, other.total_amount),
            "date" => self.transaction_date.cmp(&other.transaction_date),
            _ => self.id.cmp(&other.id),
        }
    }
}

fn status_appearance(status: Option<&str>) -> BadgeAppearance {
    if status == Some("COMPLETED") {
        BadgeAppearance::Tint
    } else {
        BadgeAppearance::Filled
    }
}

#[component]
pub fn TransactionList() -> impl IntoView {
    let state = create_list_state("date");
    let transactions: RwSignal<Vec<Transaction>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let selected: RwSignal<Option<Transaction>> = RwSignal::new(None);
    let movement: RwSignal<Option<TransactionType>> = RwSignal::new(None);
    let client = StoredValue::new(use_api());

    state.update(|s| s.sort_ascending = false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_transactions(&client).await {
                Ok(data) => {
                    transactions.set(data);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let rows = move || {
        let query = search.get();
        state.with(|s| transactions.with(|items| filter_and_sort(items, &query, &s.sort_field, s.sort_ascending)))
    };

    view! {
        <PageFrame page_id="a005_transaction--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Transactions"</h1>
                    <span class="page__subtitle">"Manage inventory imports, exports, and sales transactions"</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| movement.set(Some(TransactionType::Import))
                        attr:class="button--import"
                    >
                        "Import"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| movement.set(Some(TransactionType::Export))
                        attr:class="button--export"
                    >
                        "Export"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorAlert error=error />

                <div class="filter-panel">
                    <div style="max-width: 320px;">
                        <Input value=search placeholder="Search transactions..." />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Type" field="type" state=state min_width=90.0 />
                                <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                                <SortableHeaderCell label="Date" field="date" state=state min_width=140.0 />
                                <SortableHeaderCell label="Username" field="user" state=state />
                                <SortableHeaderCell label="Total Amount" field="total" state=state min_width=130.0 />
                                <TableHeaderCell min_width=200.0>"Notes"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|t| (t.id, t.status.clone())
                                children=move |t| {
                                    let for_details = t.clone();
                                    let status = t.status.clone();
                                    view! {
                                        <TableRow
                                            on:click=move |_| selected.set(Some(for_details.clone()))
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Outline>{t.transaction_type.code()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=status_appearance(status.as_deref())>
                                                    {status.clone().unwrap_or_default()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{format_datetime(&t.transaction_date)}</TableCell>
                                            <TableCell>{t.user_name.clone().unwrap_or_default()}</TableCell>
                                            <TableCell>{format_vnd(t.total_amount)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{t.notes.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && rows().is_empty()>
                        <div class="table__empty">"No transactions found"</div>
                    </Show>
                </div>

                {move || selected.get().map(|t| view! {
                    <TransactionDetails
                        transaction=t
                        on_close=Callback::new(move |_| selected.set(None))
                    />
                })}

                {move || movement.get().map(|kind| view! {
                    <MovementDialog
                        kind=kind
                        on_close=Callback::new(move |_| movement.set(None))
                        on_recorded=Callback::new(move |_| load_data())
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, user: Option<&str>, total: f64, date: &str) -> Transaction {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "transactionNumber": format!("TX-{}", id),
            "type": "SALE",
            "transactionDate": date,
            "userName": user,
            "totalAmount": total,
        }))
        .unwrap()
    }

    #[test]
    fn search_covers_user_and_number() {
        let t = tx(7, Some("Alice"), 10.0, "2024-01-01T00:00:00");
        assert!(t.matches_filter("alice"));
        assert!(t.matches_filter("tx-7"));
        assert!(t.matches_filter("sale"));
        assert!(!t.matches_filter("bob"));
    }

    #[test]
    fn newest_first_by_date() {
        let mut items = vec![
            tx(1, None, 5.0, "2024-01-01T00:00:00"),
            tx(2, None, 50.0, "2024-03-01T00:00:00"),
        ];
        crate::shared::list_utils::sort_list(&mut items, "date", false);
        assert_eq!(items[0].id, 2);
        crate::shared::list_utils::sort_list(&mut items, "total", true);
        assert_eq!(items[0].id, 1);
    }
}
