//! Overlay dialog used by every create/edit/details form.
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Buttons rendered in the footer (Save, Cancel, ...)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Extra class on the dialog box, e.g. `modal--wide`
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener is removed with the modal.
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let dialog_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=dialog_class on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}

/// Inline error banner; renders nothing while `error` is `None`.
#[component]
pub fn ErrorAlert(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// Inline success banner.
#[component]
pub fn SuccessAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert--success">{move || message.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: String,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            title="Are you sure?".to_string()
            on_close=on_cancel
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                >
                    {move || if busy.get() { "Deleting..." } else { "Delete" }}
                </Button>
            }
        >
            <p>{message}</p>
        </Modal>
    }
}
