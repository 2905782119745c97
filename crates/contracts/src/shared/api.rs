//! REST response envelope and the error taxonomy shared by every API call.
//!
//! The backend wraps almost every payload as `{ status, message, <field> }`, but the
//! payload field name differs per endpoint (`data`, `products`, `suppliers`, ...) and a
//! few endpoints return a bare object. Callers name the field they expect explicitly.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Application-level success code carried in the envelope `status` field.
pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Unauthorized: please log in again")]
    Unauthorized,

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("{0}")]
    Contradiction(String),

    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Replaces the generic message of a failed application status with a caller
    /// supplied one, leaving transport and parse failures untouched.
    pub fn or_message(self, fallback: &str) -> Self {
        match self {
            ApiError::Status { status, message } if message.trim().is_empty() => {
                ApiError::Status {
                    status,
                    message: fallback.to_string(),
                }
            }
            other => other,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Parsed response body with the envelope metadata pulled out.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEnvelope {
    pub status: Option<u16>,
    pub message: Option<String>,
    body: Value,
}

impl ApiEnvelope {
    /// Interprets a raw HTTP response.
    ///
    /// * 401 is reported as [`ApiError::Unauthorized`] regardless of body.
    /// * Any other non-2xx status becomes [`ApiError::Http`], using the envelope
    ///   `message` when the body carries one.
    /// * A 2xx body that is not JSON is a [`ApiError::Parse`]; an empty body is an
    ///   empty envelope.
    /// * An envelope whose `status` is present and not 200, or which carries an
    ///   `error` field, is an [`ApiError::Status`].
    pub fn from_http(http_status: u16, text: &str) -> Result<Self, ApiError> {
        if http_status == 401 {
            return Err(ApiError::Unauthorized);
        }

        let parsed: Option<Value> = if text.trim().is_empty() {
            Some(Value::Null)
        } else {
            serde_json::from_str(text).ok()
        };

        if !(200..300).contains(&http_status) {
            let message = parsed
                .as_ref()
                .and_then(|v| text_field(v, "message").or_else(|| text_field(v, "error")))
                .unwrap_or_else(|| text.trim().to_string());
            return Err(ApiError::Http {
                status: http_status,
                message,
            });
        }

        let body = parsed.ok_or_else(|| ApiError::Parse(format!("invalid JSON: {}", text)))?;
        let envelope = Self::from_value(body);
        envelope.ensure_ok()?;
        Ok(envelope)
    }

    pub fn from_value(body: Value) -> Self {
        let status = body
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok());
        let message = text_field(&body, "message");
        Self {
            status,
            message,
            body,
        }
    }

    fn ensure_ok(&self) -> Result<(), ApiError> {
        if let Some(error) = text_field(&self.body, "error") {
            return Err(ApiError::Status {
                status: self.status.unwrap_or(STATUS_OK),
                message: error,
            });
        }
        match self.status {
            Some(status) if status != STATUS_OK => Err(ApiError::Status {
                status,
                message: self.message.clone().unwrap_or_default(),
            }),
            _ => Ok(()),
        }
    }

    /// Required payload field; absent or `null` is a parse failure.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Result<T, ApiError> {
        self.optional_field(name)?
            .ok_or_else(|| ApiError::Parse(format!("missing field `{}`", name)))
    }

    /// Optional payload field; absent or `null` yields `None`.
    pub fn optional_field<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ApiError> {
        match self.body.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| ApiError::Parse(format!("field `{}`: {}", name, e))),
        }
    }

    /// Whole body, for endpoints that answer without an envelope.
    pub fn into_body<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn text_field(value: &Value, name: &str) -> Option<String> {
    value
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn unauthorized_wins_over_body() {
        let err = ApiEnvelope::from_http(401, r#"{"status":200}"#).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
    }

    #[test]
    fn http_failure_prefers_envelope_message() {
        let err = ApiEnvelope::from_http(500, r#"{"message":"db down"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "db down".into()
            }
        );

        let err = ApiEnvelope::from_http(404, "Not Found").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn application_status_is_checked() {
        let err = ApiEnvelope::from_http(200, r#"{"status":404,"message":"No session"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "No session");
    }

    #[test]
    fn error_field_is_a_failure() {
        let err = ApiEnvelope::from_http(200, r#"{"error":"Insufficient stock for X"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 200,
                message: "Insufficient stock for X".into()
            }
        );
    }

    #[test]
    fn payload_field_names_are_per_call() {
        let env = ApiEnvelope::from_http(
            200,
            r#"{"status":200,"message":"ok","products":[{"id":1},{"id":2}]}"#,
        )
        .unwrap();
        let items: Vec<Item> = env.field("products").unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
        assert!(matches!(
            env.field::<Vec<Item>>("data"),
            Err(ApiError::Parse(_))
        ));
        assert_eq!(env.optional_field::<Item>("data").unwrap(), None);
    }

    #[test]
    fn bare_body_and_empty_body() {
        let env = ApiEnvelope::from_http(200, r#"{"id":7}"#).unwrap();
        assert_eq!(env.into_body::<Item>().unwrap(), Item { id: 7 });

        let env = ApiEnvelope::from_http(204, "").unwrap();
        assert_eq!(env.status, None);
    }

    #[test]
    fn garbage_body_is_parse_error() {
        let err = ApiEnvelope::from_http(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn or_message_only_fills_blank_status_messages() {
        let blank = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(
            blank.or_message("Failed to delete").to_string(),
            "Failed to delete"
        );
        let net = ApiError::Network("offline".into());
        assert_eq!(net.clone().or_message("x"), net);
    }
}
