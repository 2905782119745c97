//! Multi-item sale: pick products, set quantities, submit one SALE transaction.

use contracts::domain::a001_product::Product;
use contracts::domain::a005_transaction::{sale_failure_message, SaleCart};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api::fetch_products;
use crate::domain::a005_transaction::api;
use crate::shared::icons::icon;
use crate::shared::modal::{ErrorAlert, SuccessAlert};
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::context::use_api;

#[component]
pub fn NewSalePage() -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let cart = RwSignal::new(SaleCart::default());
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let client = StoredValue::new(use_api());

    let load_products = move || {
        set_loading.set(true);
        let client = client.get_value();
        spawn_local(async move {
            match fetch_products(&client).await {
                Ok(data) => products.set(data),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };
    load_products();

    let on_submit = move |_| {
        let request = match cart.with_untracked(SaleCart::to_request) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_submitting.set(true);
        set_error.set(None);
        set_notice.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::create_sale(&client, &request).await {
                Ok(()) => {
                    log::info!("sale recorded: {} line(s), total {}", request.items.len(), request.total_amount);
                    cart.set(SaleCart::default());
                    set_notice.set(Some("Sale created successfully".to_string()));
                    load_products();
                }
                Err(e) => set_error.set(Some(sale_failure_message(&e))),
            }
            set_submitting.set(false);
        });
    };

    let visible = move || {
        let query = search.get();
        products.with(|items| {
            items
                .iter()
                .filter(|p| p.matches(&query))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id="a005_sale--new" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Add New Transaction"</h1>
                    <span class="page__subtitle">"Select products and quantities for a sale"</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_products()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorAlert error=error />
                <SuccessAlert message=notice />

                <div class="filter-panel">
                    <div style="max-width: 320px;">
                        <Input value=search placeholder="Search products..." />
                    </div>
                </div>

                <div class="sale-picker">
                    <For
                        each=visible
                        key=|p| (p.id, p.quantity)
                        children=move |product| {
                            let id = product.id;
                            let for_toggle = product.clone();
                            let checked = move || cart.with(|c| c.contains(id));
                            view! {
                                <div class="sale-picker__row" class:sale-picker__row--selected=checked>
                                    <label class="sale-picker__product">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| cart.update(|c| c.toggle(&for_toggle))
                                        />
                                        <span class="sale-picker__name">{product.product_name.clone()}</span>
                                        <span class="sale-picker__meta">
                                            {format!("{} | in stock: {}", format_vnd(product.price), product.quantity)}
                                        </span>
                                    </label>
                                    <Show when=checked>
                                        <label class="sale-picker__qty">
                                            "Quantity: "
                                            <input
                                                type="number"
                                                min="1"
                                                class="form__input form__input--small"
                                                prop:value=move || cart.with(|c| c.quantity_of(id)).to_string()
                                                on:input=move |ev| {
                                                    let qty = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                                                    cart.update(|c| c.set_quantity(id, qty));
                                                }
                                            />
                                        </label>
                                    </Show>
                                </div>
                            }
                        }
                    />
                    <Show when=move || !loading.get() && products.with(|p| p.is_empty())>
                        <div class="table__empty">"No products available"</div>
                    </Show>
                </div>

                <div class="sale-summary">
                    <span>
                        {move || format!("{} item(s) selected", cart.with(|c| c.lines().len()))}
                    </span>
                    <span class="sale-summary__total">
                        "Total: "
                        {move || format_vnd(cart.with(SaleCart::total))}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=Signal::derive(move || submitting.get() || cart.with(SaleCart::is_empty))
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create Sale" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
