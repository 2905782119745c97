//! API utilities for frontend-backend communication
//!
//! Every REST call goes through an [`ApiClient`] built from the signed-in user's
//! token, so no request reads browser storage on its own.

use contracts::shared::api::{ApiEnvelope, ApiError};
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::{Callable, Callback};
use serde::Serialize;

use crate::shared::config::{app_config, resolve_base};

/// Get the base URL for API requests
///
/// Uses the configured `base_url`, or the current window location with the
/// configured backend port.
pub fn api_base() -> String {
    let api = &app_config().api;
    let window = match web_sys::window() {
        Some(w) => w,
        None => return resolve_base(api, "http:", "127.0.0.1"),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    resolve_base(api, &protocol, &hostname)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Explicit request context: API origin plus the bearer token of the signed-in
/// user. A 401 from any call fires `on_unauthorized`.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
    on_unauthorized: Option<Callback<()>>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
            on_unauthorized: None,
        }
    }

    /// Client without credentials, for the login call.
    pub fn anonymous() -> Self {
        Self::new(api_base(), None)
    }

    pub fn with_unauthorized_handler(mut self, handler: Callback<()>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn get(&self, path: &str) -> Result<ApiEnvelope, ApiError> {
        self.send::<()>(Method::Get, path, None).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiEnvelope, ApiError> {
        self.send::<()>(Method::Delete, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiEnvelope, ApiError> {
        self.send(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiEnvelope, ApiError> {
        self.send(Method::Put, path, Some(body)).await
    }

    /// Unauthenticated POST (login).
    pub async fn post_public<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope, ApiError> {
        self.dispatch(Method::Post, path, None, Some(body)).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        let result = self.dispatch(method, path, Some(token), body).await;
        if let Err(ApiError::Unauthorized) = &result {
            log::warn!("{} {} answered 401, dropping session", method.as_str(), path);
            if let Some(handler) = &self.on_unauthorized {
                handler.run(());
            }
        }
        result
    }

    async fn dispatch<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<ApiEnvelope, ApiError> {
        let url = join_url(&self.base, path);
        log::debug!("{} {}", method.as_str(), path);

        let mut builder: RequestBuilder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Invalid(format!("Failed to serialize request: {}", e)))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request.send().await.map_err(|e| {
            log::error!("{} {} failed: {}", method.as_str(), path, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        ApiEnvelope::from_http(status, &text).inspect_err(|e| {
            log::error!("{} {} -> {}", method.as_str(), path, e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("http://localhost:8080/", "/api/v1/product/getAll"),
            "http://localhost:8080/api/v1/product/getAll"
        );
        assert_eq!(
            join_url("http://localhost:8080", "suppliers/getAll"),
            "http://localhost:8080/suppliers/getAll"
        );
    }

    #[test]
    fn anonymous_client_has_no_token() {
        let client = ApiClient::new("http://x", None);
        assert_eq!(client.token(), None);
        let client = ApiClient::new("http://x", Some("abc".into()));
        assert_eq!(client.token(), Some("abc"));
    }
}
