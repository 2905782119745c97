use contracts::enums::WorkingShift;
use contracts::system::users::RegisterEmployeeDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::modal::{ErrorAlert, Modal};
use crate::system::auth::context::use_api;
use crate::system::users::api;

/// Options of the working-shift select.
#[component]
pub fn ShiftOptions() -> impl IntoView {
    WorkingShift::all()
        .into_iter()
        .map(|shift| {
            let code = shift.code().to_string();
            let label = shift.display_name().to_string();
            view! { <option value=code>{label}</option> }
        })
        .collect_view()
}

#[component]
pub fn RegisterEmployeeForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let working_shift = RwSignal::new(WorkingShift::default().code().to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let client = use_api();

    let on_save = move |_| {
        let dto = RegisterEmployeeDto {
            name: name.get_untracked().trim().to_string(),
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            working_shift: WorkingShift::from_code(&working_shift.get_untracked()),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let client = client.clone();
        spawn_local(async move {
            match api::register_employee(&client, &dto).await {
                Ok(()) => on_created.run(()),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title="Register New Employee".to_string()
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save.clone()
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Registering..." } else { "Register" }}
                </Button>
            }
        >
            <ErrorAlert error=error />

            <div class="form__group">
                <Label>"Full Name"</Label>
                <Input value=name disabled=Signal::derive(move || saving.get()) />
            </div>
            <div class="form__group">
                <Label>"Username"</Label>
                <Input value=username disabled=Signal::derive(move || saving.get()) />
            </div>
            <div class="form__group">
                <Label>"Password"</Label>
                <Input
                    value=password
                    input_type=InputType::Password
                    disabled=Signal::derive(move || saving.get())
                />
            </div>
            <div class="form__group">
                <Label>"Working Shift"</Label>
                <Select value=working_shift>
                    <ShiftOptions />
                </Select>
            </div>
        </Modal>
    }
}
