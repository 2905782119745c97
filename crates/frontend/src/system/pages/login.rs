use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if username_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Username and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // On success the auth state flips and AppRoutes swaps in the main layout.
            if let Err(e) = do_login(set_auth_state, username_val, password_val).await {
                log::error!("Login error: {}", e);
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Warehouse Admin"</h1>
                <h2>"Login to your account"</h2>
                <p class="login-box__hint">"Enter your information below to login to your account"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Username"</Label>
                        <Input
                            value=username
                            placeholder="username"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_loading.get())
                        block=true
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
