pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;
pub mod workspace;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;
use workspace::Workspace;

/// Authenticated application frame: header on top, collapsible navigation on
/// the left, open tabs filling the rest.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <nav class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </nav>
                <main class="app-main">
                    <Workspace />
                </main>
            </div>
        </div>
    }
}
