use contracts::dashboards::d400_metrics::DashboardMetrics;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_metrics::api;
use crate::shared::icons::icon;
use crate::shared::modal::ErrorAlert;
use crate::shared::number_format::{format_count, format_percent, format_vnd};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_api;

/// Revenue overview, best selling products and top sellers.
#[component]
pub fn MetricsDashboard() -> impl IntoView {
    let (metrics, set_metrics) = signal(None::<DashboardMetrics>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let client = StoredValue::new(use_api());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_metrics(&client).await {
                Ok(data) => set_metrics.set(Some(data)),
                Err(e) => {
                    log::error!("Error fetching metrics: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };
    load();

    view! {
        <PageFrame page_id="d400_metrics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorAlert error=error />
                <Show when=move || loading.get() && metrics.with(|m| m.is_none())>
                    <div class="page__loading">"Loading metrics..."</div>
                </Show>

                {move || metrics.get().map(|m| {
                    let products = m.top_products.iter().map(|p| {
                        (p.product_name.clone(), p.total_quantity, p.total_revenue, m.revenue_share(p))
                    }).collect::<Vec<_>>();
                    let sellers = m.top_sellers.clone();
                    view! {
                        <div class="card">
                            <div class="card__header">
                                <h2 class="card__title">"Revenue Overview"</h2>
                                <span class="card__subtitle">"Total and average transaction values"</span>
                            </div>
                            <div class="summary-cards">
                                <div class="summary-card">
                                    <div class="summary-card__label">"Total Revenue"</div>
                                    <div class="summary-card__value">{format_vnd(m.total_revenue)}</div>
                                </div>
                                <div class="summary-card">
                                    <div class="summary-card__label">"Total Transactions"</div>
                                    <div class="summary-card__value">{format_count(m.total_transactions)}</div>
                                </div>
                                <div class="summary-card">
                                    <div class="summary-card__label">"Average Transaction Value"</div>
                                    <div class="summary-card__value">{format_vnd(m.average_transaction_value)}</div>
                                </div>
                            </div>
                        </div>

                        <div class="dashboard__grid">
                            <div class="card">
                                <div class="card__header">
                                    <h2 class="card__title">"Best Selling Products"</h2>
                                    <span class="card__subtitle">"Products with highest sales volume"</span>
                                </div>
                                <Table>
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell min_width=180.0>"Product"</TableHeaderCell>
                                            <TableHeaderCell>"Quantity"</TableHeaderCell>
                                            <TableHeaderCell>"Revenue"</TableHeaderCell>
                                            <TableHeaderCell>"Share"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {products.into_iter().map(|(name, qty, revenue, share)| view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{name}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>{format_count(qty)}</TableCell>
                                                <TableCell>{format_vnd(revenue)}</TableCell>
                                                <TableCell>{format_percent(share, 100.0)}</TableCell>
                                            </TableRow>
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>

                            <div class="card">
                                <div class="card__header">
                                    <h2 class="card__title">"Top Sellers"</h2>
                                    <span class="card__subtitle">"Users with highest sales"</span>
                                </div>
                                <Table>
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell min_width=160.0>"User"</TableHeaderCell>
                                            <TableHeaderCell>"Transactions"</TableHeaderCell>
                                            <TableHeaderCell>"Revenue"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {sellers.into_iter().map(|s| view! {
                                            <TableRow>
                                                <TableCell>{s.user_name}</TableCell>
                                                <TableCell>{format_count(s.total_transactions)}</TableCell>
                                                <TableCell>{format_vnd(s.total_revenue)}</TableCell>
                                            </TableRow>
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
