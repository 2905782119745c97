use contracts::domain::a003_position::{explain_move_failure, MoveProductData, MoveProductRequest};
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_position::api;
use crate::shared::modal::{ErrorAlert, Modal};
use crate::shared::number_format::format_vnd;
use crate::system::auth::context::use_api;

/// Message for a failed move. A contradiction or a local validation failure is
/// already worded for the user; transport errors get the quantity hint.
fn move_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Contradiction(message) | ApiError::Invalid(message) => message.clone(),
        other => explain_move_failure(other),
    }
}

#[component]
pub fn MoveProductModal(
    position_id: Option<i64>,
    on_close: Callback<()>,
    on_moved: Callback<()>,
) -> impl IntoView {
    let product_id = RwSignal::new(String::new());
    let target_position = RwSignal::new(position_id.map(|id| id.to_string()).unwrap_or_default());
    let quantity = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let moved: RwSignal<Option<MoveProductData>> = RwSignal::new(None);
    let (moving, set_moving) = signal(false);
    let client = StoredValue::new(use_api());

    let on_submit = move |_| {
        let request = MoveProductRequest::from_inputs(
            &product_id.get_untracked(),
            &target_position.get_untracked(),
            &quantity.get_untracked(),
        );
        if let Err(e) = request.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_moving.set(true);
        set_error.set(None);
        moved.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::move_product(&client, request).await {
                Ok(data) => {
                    log::info!(
                        "moved product {} to position {}",
                        data.product_id,
                        data.position_id
                    );
                    moved.set(Some(data));
                    on_moved.run(());
                }
                Err(e) => set_error.set(Some(move_error_message(&e))),
            }
            set_moving.set(false);
        });
    };

    view! {
        <Modal
            title="Move Product to Position".to_string()
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || moving.get())
                >
                    {move || if moving.get() { "Moving Product..." } else { "Move Product" }}
                </Button>
            }
        >
            <ErrorAlert error=error />
            {move || moved.get().map(|data| view! {
                <div class="alert alert--success move-result">
                    <h3>"Product Moved Successfully!"</h3>
                    <div class="move-result__grid">
                        <div><b>"Product: "</b>{data.product_name.clone()}</div>
                        <div><b>"Category: "</b>{data.category.clone()}</div>
                        <div><b>"Supplier: "</b>{data.supplier.clone()}</div>
                        <div><b>"Price: "</b>{format_vnd(data.product_price)}</div>
                        <div><b>"New Location: "</b>{data.full_location.clone()}</div>
                        <div>
                            <b>"Quantity Moved: "</b>
                            <Badge appearance=BadgeAppearance::Outline>{data.quantity_at_position}</Badge>
                        </div>
                        <div>
                            <b>"Total Product Quantity: "</b>
                            <Badge appearance=BadgeAppearance::Tint>{data.total_product_quantity}</Badge>
                        </div>
                    </div>
                </div>
            })}
            <div class="form__group">
                <Label>"Product ID"</Label>
                <Input value=product_id input_type=InputType::Number placeholder="Enter product ID" />
            </div>
            <div class="form__group">
                <Label>"Position ID"</Label>
                <Input value=target_position input_type=InputType::Number placeholder="Enter position ID" />
            </div>
            <div class="form__group">
                <Label>"Quantity"</Label>
                <Input value=quantity input_type=InputType::Number placeholder="Enter quantity" />
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contradiction_is_shown_verbatim() {
        let err = ApiError::Contradiction("Cannot move 5 units.".into());
        assert_eq!(move_error_message(&err), "Cannot move 5 units.");
    }

    #[test]
    fn quantity_failures_get_a_hint() {
        let err = ApiError::Http {
            status: 400,
            message: "quantity too large".into(),
        };
        assert!(move_error_message(&err).ends_with(
            "Please check that the quantity doesn't exceed the total available product quantity."
        ));
    }
}
