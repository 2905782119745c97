use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::ProductDetails;
use crate::domain::a001_product::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_f64, cmp_text, create_list_state, filter_and_sort, Searchable, Sortable, SortableHeaderCell,
};
use crate::shared::modal::ErrorAlert;
use crate::shared::number_format::{format_count, format_vnd};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_api;

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches(filter)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "price" => cmp_f64(self.price, other.price),
            "quantity" => self.quantity.cmp(&other.quantity),
            "category" => cmp_text(&self.category, &other.category),
            "supplier" => cmp_text(&self.supplier, &other.supplier),
            _ => cmp_text(&self.product_name, &other.product_name),
        }
    }
}

/// Which dialog is open: `Some(None)` is "new", `Some(Some(p))` edits `p`.
type Editing = Option<Option<Product>>;

#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_list_state("id");
    let all_products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Editing> = RwSignal::new(None);

    let client = StoredValue::new(use_api());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_products(&client).await {
                Ok(data) => {
                    all_products.set(data);
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
        state.with(|s| {
            all_products.with(|items| filter_and_sort(items, &query, &s.sort_field, s.sort_ascending))
        })
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || all_products.with(|p| p.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " New Product"
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
                        <Input value=search placeholder="Search by name, category or supplier..." />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" state=state min_width=60.0 />
                                <SortableHeaderCell label="Product Name" field="product_name" state=state min_width=200.0 />
                                <SortableHeaderCell label="Price" field="price" state=state />
                                <SortableHeaderCell label="Quantity" field="quantity" state=state />
                                <SortableHeaderCell label="Category" field="category" state=state />
                                <SortableHeaderCell label="Supplier" field="supplier" state=state />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|p| (p.id, p.product_name.clone(), p.price.to_bits(), p.quantity)
                                children=move |product| {
                                    let for_edit = product.clone();
                                    view! {
                                        <TableRow
                                            class="table__row--clickable"
                                            on:click=move |_| editing.set(Some(Some(for_edit.clone())))
                                        >
                                            <TableCell><TableCellLayout>{product.id}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product.product_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{format_vnd(product.price)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_count(product.quantity)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{product.category.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{product.supplier.clone()}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && rows().is_empty()>
                        <div class="table__empty">"No products found"</div>
                    </Show>
                </div>

                {move || editing.get().map(|product| view! {
                    <ProductDetails
                        product=product
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            load_data();
                        })
                        on_close=Callback::new(move |_| editing.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
