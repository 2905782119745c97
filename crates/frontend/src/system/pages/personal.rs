use contracts::enums::WorkingShift;
use contracts::system::users::UpdateProfileDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::modal::{ErrorAlert, SuccessAlert};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{do_logout, use_api, use_auth};
use crate::system::auth::storage;
use crate::system::users::api;
use crate::system::users::ui::details::ShiftOptions;

/// Own account settings. A successful update signs the user out so the new
/// credentials take effect on the next login.
#[component]
pub fn PersonalPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let working_shift = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let client = StoredValue::new(use_api());

    Effect::new(move |_| {
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_current_user(&client).await {
                Ok(user) => {
                    username.set(user.username);
                    working_shift.set(
                        user.working_shift
                            .map(|s| s.code().to_string())
                            .unwrap_or_default(),
                    );
                }
                Err(e) => set_error.set(Some(e.or_message("Failed to load user data").to_string())),
            }
            set_loading.set(false);
        });
    });

    let on_submit = move |_| {
        let user_id = auth_state
            .get_untracked()
            .user_id
            .or_else(storage::get_user_id);
        let Some(user_id) = user_id else {
            set_error.set(Some("Session expired. Please login again.".to_string()));
            return;
        };

        let dto = UpdateProfileDto {
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
        let client = client.get_value();
        spawn_local(async move {
            match api::update_profile(&client, &user_id, &dto).await {
                Ok(()) => {
                    set_success.set(Some(
                        "User information updated successfully! Please log in again.".to_string(),
                    ));
                    do_logout(client, set_auth_state);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="sys_personal--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Personal Information"</h1>
                </div>
            </div>
            <div class="page__content">
                <ErrorAlert error=error />
                <SuccessAlert message=success />

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Flex gap=FlexGap::Small><Spinner /> "Loading..."</Flex> }
                >
                    <div class="form form--narrow">
                        <div class="form__group">
                            <Label>"Username"</Label>
                            <Input value=username disabled=Signal::derive(move || saving.get()) />
                            <span class="form__hint">"This is your public display name."</span>
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
                            <Label>"Workshift"</Label>
                            <Select value=working_shift>
                                <option value="" disabled=true>"Select a shift"</option>
                                <ShiftOptions />
                            </Select>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Saving..." } else { "Submit" }}
                        </Button>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
