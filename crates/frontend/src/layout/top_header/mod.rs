//! Top navigation bar: sidebar toggle, title, signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_api, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let client = StoredValue::new(use_api());

    let logout = move |_| do_logout(client.get_value(), set_auth_state);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Warehouse Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user" on:click=move |_| ctx.open_tab("sys_personal", "Personal Information")>
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.display_name())}</span>
                    {move || auth_state.with(|s| s.user.as_ref().map(|u| {
                        let role = u.role.display_name().to_string();
                        view! { <span class="badge badge--neutral">{role}</span> }
                    }))}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
