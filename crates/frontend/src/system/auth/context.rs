use contracts::system::auth::{AuthSession, AuthUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::{api_base, ApiClient};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub user: Option<AuthUser>,
}

impl AuthState {
    pub fn from_session(session: AuthSession) -> Self {
        Self {
            access_token: Some(session.token),
            user_id: Some(session.user_id),
            user: Some(session.user),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(AuthUser::is_admin).unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    }
}

/// Reads token and profile from localStorage.
///
/// A token without a readable profile is treated as signed out and the stale
/// entries are removed.
fn restore_from_storage() -> AuthState {
    let Some(token) = storage::get_token() else {
        return AuthState::default();
    };
    match storage::get_user() {
        Ok(Some(user)) => AuthState {
            access_token: Some(token),
            user_id: storage::get_user_id(),
            user: Some(user),
        },
        Ok(None) => {
            storage::clear_session();
            AuthState::default()
        }
        Err(e) => {
            log::error!("Error parsing user data: {}", e);
            storage::clear_session();
            AuthState::default()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(restore_from_storage());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Request context for the signed-in user. A 401 on any call signs the user out.
pub fn use_api() -> ApiClient {
    let (auth_state, set_auth_state) = use_auth();
    let token = auth_state.get_untracked().access_token;
    ApiClient::new(api_base(), token).with_unauthorized_handler(Callback::new(move |_| {
        storage::clear_session();
        set_auth_state.set(AuthState::default());
    }))
}

/// Perform login and publish the new session.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let session = api::login(username, password)
        .await
        .map_err(|e| e.to_string())?;

    storage::save_session(&session);
    if storage::get_token().is_none() {
        return Err("Failed to store login information. Please try again.".to_string());
    }

    log::info!("Signed in as {}", session.user.username);
    set_auth_state.set(AuthState::from_session(session));
    Ok(())
}

/// Perform logout
pub fn do_logout(client: ApiClient, set_auth_state: WriteSignal<AuthState>) {
    spawn_local(async move {
        api::logout(&client).await;
        storage::clear_session();
        set_auth_state.set(AuthState::default());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    #[test]
    fn state_from_session_exposes_role() {
        let state = AuthState::from_session(AuthSession {
            token: "t".into(),
            user_id: "7".into(),
            user: AuthUser {
                username: "admin01".into(),
                name: String::new(),
                role: UserRole::parse("ADMIN"),
            },
        });
        assert!(state.is_admin());
        assert_eq!(state.display_name(), "admin01");
        assert!(!AuthState::default().is_admin());
    }
}
