use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` for admins only; everyone else sees the access notice.
#[component]
pub fn RequireAdmin(
    /// Explanation shown to non-admins.
    #[prop(optional, into)]
    message: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let message = message
        .unwrap_or_else(|| "This page is restricted to administrators only.".to_string());

    view! {
        <Show
            when=move || auth_state.get().is_admin()
            fallback=move || view! { <AccessRestricted message=message.clone() /> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn AccessRestricted(message: String) -> impl IntoView {
    view! {
        <div class="page page--restricted">
            <div class="access-restricted">
                <h2>"Access Restricted"</h2>
                <p>{message}</p>
            </div>
        </div>
    }
}
