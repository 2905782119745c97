use contracts::domain::a001_product::Product;
use contracts::domain::a005_transaction::ImportExportRequest;
use contracts::enums::TransactionType;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api::fetch_products;
use crate::domain::a005_transaction::api;
use crate::shared::modal::{ErrorAlert, Modal, SuccessAlert};
use crate::system::auth::context::use_api;

const CLOSE_AFTER_MS: u32 = 2_000;

/// Import (stock in) or export (stock out) of a single product.
#[component]
pub fn MovementDialog(
    kind: TransactionType,
    on_close: Callback<()>,
    on_recorded: Callback<()>,
) -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let product_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let client = StoredValue::new(use_api());

    {
        let client = client.get_value();
        spawn_local(async move {
            match fetch_products(&client).await {
                Ok(data) => products.set(data),
                Err(e) => {
                    log::error!("products for movement dialog: {}", e);
                    set_error.set(Some("Failed to fetch products".to_string()));
                }
            }
        });
    }

    let selected = move || {
        let id = product_id.get().parse::<i64>().ok()?;
        products.with(|items| items.iter().find(|p| p.id == id).cloned())
    };

    let on_submit = move |_| {
        let request = ImportExportRequest {
            product_id: product_id.get_untracked().parse().unwrap_or(0),
            quantity: quantity.get_untracked().trim().parse().unwrap_or(0),
            notes: notes.get_untracked().trim().to_string(),
        };
        set_saving.set(true);
        set_error.set(None);
        set_success.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::record_movement(&client, kind, &request).await {
                Ok(message) => {
                    set_success.set(Some(message));
                    product_id.set(String::new());
                    quantity.set(String::new());
                    notes.set(String::new());
                    on_recorded.run(());
                    set_saving.set(false);
                    TimeoutFuture::new(CLOSE_AFTER_MS).await;
                    on_close.run(());
                    return;
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    let (title, action, placeholder) = match kind {
        TransactionType::Import => ("Import Product", "Import", "e.g., New stock arrival"),
        _ => ("Export Product", "Export", "e.g., Customer order"),
    };
    let is_export = kind == TransactionType::Export;

    view! {
        <Modal
            title=title.to_string()
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Processing..." } else { action }}
                </Button>
            }
        >
            <ErrorAlert error=error />
            <SuccessAlert message=success />
            <div class="form__group">
                <Label>"Product"</Label>
                <Select value=product_id>
                    <option value="" disabled=true>"Select a product"</option>
                    <For
                        each=move || products.get()
                        key=|p| p.id
                        children=move |p| view! {
                            <option value=p.id.to_string()>{p.product_name.clone()}</option>
                        }
                    />
                </Select>
            </div>
            <Show when=move || is_export && selected().is_some()>
                <div class="form__hint">
                    {move || format!("Available stock: {}", selected().map(|p| p.quantity).unwrap_or(0))}
                </div>
            </Show>
            <div class="form__group">
                <Label>"Quantity"</Label>
                <Input value=quantity input_type=InputType::Number />
            </div>
            <div class="form__group">
                <Label>"Notes"</Label>
                <Textarea value=notes placeholder=placeholder />
            </div>
        </Modal>
    }
}
