use contracts::domain::a003_position::Position;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::PositionDetailsModal;
use super::move_product::MoveProductModal;
use crate::domain::a003_position::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_text, create_list_state, filter_and_sort, Searchable, Sortable, SortableHeaderCell,
};
use crate::shared::modal::ErrorAlert;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_api;

impl Searchable for Position {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.full_location.to_lowercase().contains(&filter)
            || self.shelves.to_lowercase().contains(&filter)
            || self.row_and_column.to_lowercase().contains(&filter)
    }
}

impl Sortable for Position {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "shelves" => cmp_text(&self.shelves, &other.shelves),
            "row_and_column" => cmp_text(&self.row_and_column, &other.row_and_column),
            "full_location" => cmp_text(&self.full_location, &other.full_location),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
pub fn PositionList() -> impl IntoView {
    let state = create_list_state("id");
    let positions: RwSignal<Vec<Position>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let selected: RwSignal<Option<i64>> = RwSignal::new(None);
    let moving: RwSignal<Option<Option<i64>>> = RwSignal::new(None);
    let client = StoredValue::new(use_api());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_positions(&client).await {
                Ok(data) => {
                    positions.set(data);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let rows = move || {
        let query = search.get();
        state.with(|s| positions.with(|items| filter_and_sort(items, &query, &s.sort_field, s.sort_ascending)))
    };

    view! {
        <PageFrame page_id="a003_position--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Positions"</h1>
                    <Badge>{move || positions.with(|p| p.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| moving.set(Some(None))
                    >
                        {icon("move")}
                        " Move Product"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorAlert error=error />

                <div class="filter-panel">
                    <div style="max-width: 320px;">
                        <Input value=search placeholder="Search by location..." />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" state=state min_width=60.0 />
                                <SortableHeaderCell label="Shelves" field="shelves" state=state />
                                <SortableHeaderCell label="Row & Column" field="row_and_column" state=state />
                                <SortableHeaderCell label="Full Location" field="full_location" state=state min_width=180.0 />
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|p| (p.id, p.full_location.clone())
                                children=move |position| {
                                    let id = position.id;
                                    view! {
                                        <TableRow on:click=move |_| selected.set(Some(id))>
                                            <TableCell><TableCellLayout>{position.id}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{position.shelves.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{position.row_and_column.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{position.full_location.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |ev: leptos::ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                        moving.set(Some(Some(id)));
                                                    }
                                                    attr:title="Move product here"
                                                >
                                                    {icon("move")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && rows().is_empty()>
                        <div class="table__empty">"No positions found"</div>
                    </Show>
                </div>

                {move || selected.get().map(|position_id| view! {
                    <PositionDetailsModal
                        position_id=position_id
                        on_close=Callback::new(move |_| selected.set(None))
                        on_changed=Callback::new(move |_| load_data())
                    />
                })}

                {move || moving.get().map(|target| view! {
                    <MoveProductModal
                        position_id=target
                        on_close=Callback::new(move |_| moving.set(None))
                        on_moved=Callback::new(move |_| load_data())
                    />
                })}
            </div>
        </PageFrame>
    }
}
