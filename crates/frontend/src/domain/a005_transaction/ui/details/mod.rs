use contracts::domain::a005_transaction::{DetailedTransaction, Transaction};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_transaction::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_vnd;
use crate::system::auth::context::use_api;

#[component]
pub fn TransactionDetails(transaction: Transaction, on_close: Callback<()>) -> impl IntoView {
    let detail: RwSignal<Option<DetailedTransaction>> = RwSignal::new(None);
    let (loading, set_loading) = signal(true);
    let client = use_api();
    let id = transaction.id;

    spawn_local(async move {
        match api::fetch_transaction(&client, id).await {
            Ok(data) => detail.set(Some(data)),
            Err(e) => log::error!("transaction {} details: {}", id, e),
        }
        set_loading.set(false);
    });

    view! {
        <Modal
            title=format!("Transaction Details - {}", transaction.transaction_number)
            on_close=on_close
            class="modal--wide"
        >
            {move || {
                if loading.get() {
                    return view! {
                        <div class="modal__loading">"Loading transaction details..."</div>
                    }.into_any();
                }
                match detail.get() {
                    None => view! {
                        <div class="modal__loading">"Failed to load transaction details"</div>
                    }.into_any(),
                    Some(d) => view! {
                        <div class="details-grid">
                            <div><b>"Transaction Type: "</b>{d.transaction_type.display_name()}</div>
                            <div><b>"Transaction Date: "</b>{format_datetime(&d.transaction_date)}</div>
                            <div><b>"Total Amount: "</b>{format_vnd(d.total_amount)}</div>
                        </div>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=200.0>"Product Name"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Supplier"</TableHeaderCell>
                                    <TableHeaderCell>"Location"</TableHeaderCell>
                                    <TableHeaderCell min_width=80.0>"Quantity"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {d.products.into_iter().map(|p| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{p.product_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{p.category}</TableCell>
                                        <TableCell>{p.supplier}</TableCell>
                                        <TableCell>{p.full_location}</TableCell>
                                        <TableCell>{p.quantity}</TableCell>
                                        <TableCell>{format_vnd(p.price_at_transaction)}</TableCell>
                                        <TableCell>{format_vnd(p.total_price)}</TableCell>
                                    </TableRow>
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any(),
                }
            }}
        </Modal>
    }
}
