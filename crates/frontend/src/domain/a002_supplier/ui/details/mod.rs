use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_supplier::api;
use crate::shared::modal::{ErrorAlert, Modal};
use crate::system::auth::context::use_api;

/// Add (`supplier == None`) or edit dialog.
#[component]
pub fn SupplierForm(
    supplier: Option<Supplier>,
    on_saved: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = supplier.as_ref().map(|s| s.id);
    let initial = supplier.as_ref().map(SupplierDto::from).unwrap_or_default();
    let name = RwSignal::new(initial.name);
    let phone_number = RwSignal::new(initial.phone_number);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let client = StoredValue::new(use_api());

    let on_save = move |_| {
        let dto = SupplierDto {
            name: name.get_untracked().trim().to_string(),
            phone_number: phone_number.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_supplier(&client, id, &dto).await,
                None => api::create_supplier(&client, &dto).await,
            };
            match result {
                Ok(()) => on_saved.run(if id.is_some() {
                    "Supplier updated successfully".to_string()
                } else {
                    "Supplier added successfully".to_string()
                }),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    let title = if id.is_some() { "Edit Supplier" } else { "Add New Supplier" };

    view! {
        <Modal
            title=title.to_string()
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            }
        >
            <ErrorAlert error=error />
            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=name disabled=Signal::derive(move || saving.get()) />
            </div>
            <div class="form__group">
                <Label>"Phone Number"</Label>
                <Input
                    value=phone_number
                    input_type=InputType::Tel
                    disabled=Signal::derive(move || saving.get())
                />
            </div>
        </Modal>
    }
}
