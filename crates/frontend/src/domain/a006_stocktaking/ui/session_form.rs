use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::{ErrorAlert, Modal};

const NOTES_PLACEHOLDER: &str = "Any additional information about this count...";

/// Name + notes dialog shared by "new session" and "edit session".
#[component]
pub fn SessionFormDialog(
    #[prop(into)] title: String,
    submit_label: &'static str,
    #[prop(optional, into)] initial_name: String,
    #[prop(optional, into)] initial_notes: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<(String, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(initial_name);
    let notes = RwSignal::new(initial_notes);

    let submit = move |_| {
        let value = name.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        on_submit.run((value, notes.get_untracked()));
    };

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || busy.get() || name.with(|n| n.trim().is_empty()))
                >
                    {submit_label}
                </Button>
            }
        >
            <ErrorAlert error=error />
            <div class="form__group">
                <Label>"Session Name"</Label>
                <Input value=name placeholder="e.g., Monthly count - June" />
            </div>
            <div class="form__group">
                <Label>"Notes (Optional)"</Label>
                <Textarea value=notes placeholder=NOTES_PLACEHOLDER />
            </div>
        </Modal>
    }
}
