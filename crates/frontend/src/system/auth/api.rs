use contracts::shared::api::ApiError;
use contracts::system::auth::{AuthSession, LoginRequest, LoginResponse};

use crate::shared::api_utils::ApiClient;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<AuthSession, ApiError> {
    let request = LoginRequest { username, password };

    let envelope = ApiClient::anonymous()
        .post_public("/api/auth/login", &request)
        .await
        .map_err(|e| match e {
            ApiError::Unauthorized => ApiError::Invalid("Login failed".to_string()),
            ApiError::Http { message, .. } | ApiError::Status { message, .. } => {
                ApiError::Invalid(if message.trim().is_empty() {
                    "Login failed".to_string()
                } else {
                    message
                })
            }
            other => other,
        })?;

    envelope.into_body::<LoginResponse>()?.into_session()
}

/// Logout. The server answer does not matter, local state is dropped either way.
pub async fn logout(client: &ApiClient) {
    if let Err(e) = client.post("/api/auth/logout", &serde_json::json!({})).await {
        log::warn!("Logout request failed: {}", e);
    }
}
