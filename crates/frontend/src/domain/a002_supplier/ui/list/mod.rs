use contracts::domain::a002_supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::SupplierForm;
use crate::domain::a002_supplier::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_text, create_list_state, filter_and_sort, Searchable, Sortable, SortableHeaderCell,
};
use crate::shared::modal::{ConfirmDialog, ErrorAlert, SuccessAlert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_api;

impl Searchable for Supplier {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter) || self.phone_number.contains(&filter)
    }
}

impl Sortable for Supplier {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "phone_number" => self.phone_number.cmp(&other.phone_number),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let state = create_list_state("id");
    let all_suppliers: RwSignal<Vec<Supplier>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<Option<Supplier>>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<Supplier>> = RwSignal::new(None);
    let (deleting, set_deleting) = signal(false);

    let client = StoredValue::new(use_api());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_suppliers(&client).await {
                Ok(data) => {
                    all_suppliers.set(data);
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

    let confirm_delete = move |_| {
        let Some(supplier) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        set_notice.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::delete_supplier(&client, supplier.id).await {
                Ok(()) => {
                    set_notice.set(Some("Supplier deleted successfully".to_string()));
                    load_data();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            pending_delete.set(None);
            set_deleting.set(false);
        });
    };

    let rows = move || {
        let query = search.get();
        state.with(|s| {
            all_suppliers.with(|items| filter_and_sort(items, &query, &s.sort_field, s.sort_ascending))
        })
    };

    view! {
        <PageFrame page_id="a002_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Suppliers"</h1>
                    <Badge>{move || all_suppliers.with(|s| s.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " Add Supplier"
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
                <SuccessAlert message=notice />

                <div class="filter-panel">
                    <div style="max-width: 320px;">
                        <Input value=search placeholder="Search by name or phone..." />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" state=state min_width=60.0 />
                                <SortableHeaderCell label="Name" field="name" state=state min_width=200.0 />
                                <SortableHeaderCell label="Phone Number" field="phone_number" state=state />
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|s| (s.id, s.name.clone(), s.phone_number.clone())
                                children=move |supplier| {
                                    let for_edit = supplier.clone();
                                    let for_delete = supplier.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{supplier.id}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{supplier.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{supplier.phone_number.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                    attr:title="Delete"
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
                    <Show when=move || state.with(|s| s.is_loaded) && rows().is_empty()>
                        <div class="table__empty">"No suppliers found"</div>
                    </Show>
                </div>

                {move || editing.get().map(|supplier| view! {
                    <SupplierForm
                        supplier=supplier
                        on_saved=Callback::new(move |message: String| {
                            editing.set(None);
                            set_notice.set(Some(message));
                            load_data();
                        })
                        on_close=Callback::new(move |_| editing.set(None))
                    />
                })}

                {move || pending_delete.get().map(|supplier| view! {
                    <ConfirmDialog
                        message=format!("Delete supplier \"{}\"?", supplier.name)
                        busy=deleting
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                        on_confirm=Callback::new(confirm_delete)
                    />
                })}
            </div>
        </PageFrame>
    }
}
