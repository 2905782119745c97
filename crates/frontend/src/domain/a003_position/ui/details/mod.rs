use contracts::domain::a003_position::PositionDetails;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_position::api;
use crate::shared::icons::icon;
use crate::shared::modal::{ErrorAlert, Modal};
use crate::shared::number_format::{format_count, format_vnd};
use crate::system::auth::context::use_api;

fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

/// Products stored at one position, with a per-row remove action.
#[component]
pub fn PositionDetailsModal(
    position_id: i64,
    on_close: Callback<()>,
    /// Fired after a product was removed so the caller can refetch.
    on_changed: Callback<()>,
) -> impl IntoView {
    let details: RwSignal<Option<PositionDetails>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (removing, set_removing) = signal::<Option<i64>>(None);
    let client = StoredValue::new(use_api());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_position_details(&client, position_id).await {
                Ok(data) => details.set(Some(data)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };
    load();

    let remove = move |product_id: i64| {
        set_removing.set(Some(product_id));
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::remove_product(&client, product_id, position_id).await {
                Ok(()) => {
                    on_changed.run(());
                    load();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_removing.set(None);
        });
    };

    let title = Signal::derive(move || {
        details.with(|d| match d {
            Some(d) if !d.position.full_location.is_empty() => {
                format!("Position Details - {}", d.position.full_location)
            }
            _ => "Position Details".to_string(),
        })
    });

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            <ErrorAlert error=error />
            <Show when=move || loading.get() && details.with(|d| d.is_none())>
                <div class="modal__loading"><Spinner /></div>
            </Show>
            {move || details.get().map(|d| {
                let products = d.products.clone();
                let count = products.len();
                view! {
                    <div class="summary-cards">
                        <div class="summary-card">
                            <div class="summary-card__label">"Location"</div>
                            <div class="summary-card__value">{or_na(&d.position.full_location)}</div>
                            <div class="summary-card__hint">
                                {format!(
                                    "Shelf: {} | Position: {}",
                                    or_na(&d.position.shelves),
                                    or_na(&d.position.row_and_column),
                                )}
                            </div>
                        </div>
                        <div class="summary-card">
                            <div class="summary-card__label">"Total Products"</div>
                            <div class="summary-card__value">{format_count(d.total_products)}</div>
                            <div class="summary-card__hint">"Different product types"</div>
                        </div>
                        <div class="summary-card">
                            <div class="summary-card__label">"Total Quantity"</div>
                            <div class="summary-card__value">{format_count(d.total_quantity)}</div>
                            <div class="summary-card__hint">"Total items in position"</div>
                        </div>
                    </div>

                    <h3 class="section__title">
                        "Products in this Position "
                        <Badge appearance=BadgeAppearance::Tint>
                            {format!("{} {}", count, if count == 1 { "product" } else { "products" })}
                        </Badge>
                    </h3>
                    {if products.is_empty() {
                        view! { <div class="table__empty">"No products found in this position"</div> }.into_any()
                    } else {
                        view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=100.0>"Product ID"</TableHeaderCell>
                                        <TableHeaderCell min_width=200.0>"Product Name"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Supplier"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Quantity at Position"</TableHeaderCell>
                                        <TableHeaderCell min_width=160.0>"Total Product Quantity"</TableHeaderCell>
                                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {products.into_iter().map(|p| {
                                        let product_id = p.product_id;
                                        view! {
                                            <TableRow>
                                                <TableCell>{p.product_id}</TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {if p.product_name.is_empty() { "Unknown Product".to_string() } else { p.product_name.clone() }}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>{or_na(&p.category)}</TableCell>
                                                <TableCell>{or_na(&p.supplier)}</TableCell>
                                                <TableCell class="text-right">{format_vnd(p.product_price)}</TableCell>
                                                <TableCell class="text-right">
                                                    <Badge appearance=BadgeAppearance::Outline>{p.quantity_at_position}</Badge>
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    <Badge appearance=BadgeAppearance::Tint>{p.total_product_quantity}</Badge>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| remove(product_id)
                                                        disabled=Signal::derive(move || removing.get().is_some())
                                                        attr:title="Remove from position"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        }.into_any()
                    }}
                }
            })}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::or_na;

    #[test]
    fn blank_values_show_na() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("  "), "N/A");
        assert_eq!(or_na("A-01"), "A-01");
    }
}
