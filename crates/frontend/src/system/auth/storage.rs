use contracts::domain::a006_stocktaking::CancelledSessions;
use contracts::system::auth::{AuthSession, AuthUser};
use web_sys::window;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_KEY: &str = "user";
pub const CANCELLED_SESSIONS_KEY: &str = "cancelledSessionIds";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::error!("localStorage rejected write of `{}`", key);
        }
    }
}

/// Persist a fresh login. Anything left from a previous user is dropped first.
pub fn save_session(session: &AuthSession) {
    clear_session();
    set_item(TOKEN_KEY, &session.token);
    set_item(USER_ID_KEY, &session.user_id);
    match serde_json::to_string(&session.user) {
        Ok(json) => set_item(USER_KEY, &json),
        Err(e) => log::error!("Failed to serialize user: {}", e),
    }
}

pub fn get_token() -> Option<String> {
    get_item(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn get_user_id() -> Option<String> {
    get_item(USER_ID_KEY).filter(|id| !id.is_empty())
}

/// Stored profile; `Err` when the stored JSON is unreadable.
pub fn get_user() -> Result<Option<AuthUser>, serde_json::Error> {
    match get_item(USER_KEY) {
        Some(json) => serde_json::from_str(&json).map(Some),
        None => Ok(None),
    }
}

/// Remove credentials and per-user state. Deployment config survives.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        for key in [TOKEN_KEY, USER_ID_KEY, USER_KEY, CANCELLED_SESSIONS_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn load_cancelled_sessions() -> CancelledSessions {
    get_item(CANCELLED_SESSIONS_KEY)
        .map(|json| CancelledSessions::from_json(&json))
        .unwrap_or_default()
}

pub fn save_cancelled_sessions(cancelled: &CancelledSessions) {
    set_item(CANCELLED_SESSIONS_KEY, &cancelled.to_json());
}
