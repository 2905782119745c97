use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Tab opened when the workspace comes up with nothing restored from the URL.
const HOME_TAB: (&str, &str) = ("d400_metrics", "Dashboard");

#[component]
fn Workbench() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();
    if ctx.opened.with_untracked(Vec::is_empty) {
        ctx.open_tab(HOME_TAB.0, HOME_TAB.1);
    }

    view! { <Shell /> }
}

/// Login page until a token is present, then the tabbed workspace.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let signed_in = move || auth_state.with(|s| s.access_token.is_some());

    view! {
        <Show when=signed_in fallback=|| view! { <LoginPage /> }>
            <Workbench />
        </Show>
    }
}
