//! Tab content registry: tab.key -> View.

use crate::dashboards::d400_metrics::ui::MetricsDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_position::ui::list::PositionList;
use crate::domain::a004_shelf::ui::locations::ProductLocationList;
use crate::domain::a004_shelf::ui::shelves::ShelfList;
use crate::domain::a005_transaction::ui::list::TransactionList;
use crate::domain::a005_transaction::ui::sale::NewSalePage;
use crate::domain::a006_stocktaking::ui::StocktakingPage;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::personal::PersonalPage;
use crate::system::users::ui::list::EmployeesListPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab by key; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_metrics" => view! { <MetricsDashboard /> }.into_any(),

        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_supplier" => view! { <SupplierList /> }.into_any(),
        "a003_position" => view! { <PositionList /> }.into_any(),
        "a004_shelf" => view! { <ShelfList /> }.into_any(),
        "a004_location" => view! { <ProductLocationList /> }.into_any(),
        "a005_transaction" => view! { <TransactionList /> }.into_any(),
        "a005_sale" => view! { <NewSalePage /> }.into_any(),
        "a006_stocktaking" => view! {
            <RequireAdmin message="Stocktaking is restricted to administrators only.">
                <StocktakingPage />
            </RequireAdmin>
        }
        .into_any(),

        "sys_users" => view! { <EmployeesListPage /> }.into_any(),
        "sys_personal" => view! { <PersonalPage /> }.into_any(),

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
