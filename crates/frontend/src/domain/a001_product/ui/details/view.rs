use super::view_model::ProductDetailsViewModel;
use contracts::domain::a001_product::{Product, ProductForm};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::{ErrorAlert, Modal};
use crate::system::auth::context::use_api;

/// Create/edit dialog. Delete is offered in edit mode only.
#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(use_api());
    vm.load(product.as_ref());

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit Product".to_string()
        } else {
            "Add New Product".to_string()
        }
    });

    let text_field = move |label: &'static str,
                           get: fn(&ProductForm) -> String,
                           set: fn(&mut ProductForm, String),
                           input_type: &'static str| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    class="form__input"
                    type=input_type
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                    disabled=move || vm.busy.get()
                />
            </div>
        }
    };

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=move || view! {
                <Show when=move || vm.is_edit_mode()>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.delete_command(on_saved)
                        disabled=Signal::derive(move || vm.busy.get())
                    >
                        {icon("trash")}
                        " Delete"
                    </Button>
                </Show>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || vm.busy.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.busy.get() || !vm.is_form_valid())
                >
                    {move || match (vm.busy.get(), vm.is_edit_mode()) {
                        (true, _) => "Saving...",
                        (false, true) => "Save Changes",
                        (false, false) => "Add Product",
                    }}
                </Button>
            }
        >
            <ErrorAlert error=vm.error />
            {text_field("Product Name", |f| f.name.clone(), |f, v| f.name = v, "text")}
            {text_field("Price", |f| f.price.clone(), |f, v| f.price = v, "number")}
            {text_field("Quantity", |f| f.quantity.clone(), |f, v| f.quantity = v, "number")}
            {text_field("Category", |f| f.category.clone(), |f, v| f.category = v, "text")}
            {text_field("Supplier", |f| f.supplier.clone(), |f, v| f.supplier = v, "text")}
        </Modal>
    }
}
