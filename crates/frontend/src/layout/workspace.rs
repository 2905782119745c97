//! Open-tab workspace: a strip of tab headers and one mounted page per tab.
//! Pages of inactive tabs stay mounted and are only hidden, so a half-filled
//! form survives switching to another section and back.

use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::layout::tabs::registry::render_tab_content;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;

fn is_active(ctx: AppGlobalContext, key: &str) -> bool {
    ctx.active.with(|active| active.as_deref() == Some(key))
}

#[component]
pub fn Workspace() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHeader tab=tab ctx=ctx /> }
                />
            </div>
            <div class="tab-content">
                <Show when=move || ctx.opened.with(|t| t.is_empty())>
                    <div class="tab-content__empty">"Select a section in the menu"</div>
                </Show>
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabBody tab=tab ctx=ctx /> }
                />
            </div>
        </div>
    }
}

#[component]
fn TabHeader(tab: Tab, ctx: AppGlobalContext) -> impl IntoView {
    let Tab { key, title } = tab;
    let active_key = key.clone();
    let click_key = key.clone();

    let close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key);
    };

    view! {
        <div
            class="tab"
            class:active=move || is_active(ctx, &active_key)
            on:click=move |_| ctx.activate_tab(&click_key)
        >
            <span>{title}</span>
            <button class="tab-close" title="Close" on:click=close>{icon("x")}</button>
        </div>
    }
}

#[component]
fn TabBody(tab: Tab, ctx: AppGlobalContext) -> impl IntoView {
    let key = tab.key;
    log!("tab mounted: {}", key);
    let dropped = key.clone();
    on_cleanup(move || log!("tab unmounted: {}", dropped));

    let content = render_tab_content(&key);
    let active_key = key.clone();

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active(ctx, &active_key)
            data-tab-key=key
        >
            {content}
        </div>
    }
}
