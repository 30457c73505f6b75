//! API Errors
//!
//! Failure taxonomy for backend calls and the tagged outcome type every
//! request returns.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Host unreachable, CORS rejection, aborted fetch
    #[error("Network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape
    #[error("Invalid response from server: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
    /// Non-2xx response; `message` is shown to the user verbatim
    #[error("{message}")]
    Http { status: u16, message: String },
}

/// Error body the backend sends with every 4xx/5xx
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    details: Option<Value>,
}

/// `details` as display lines: a string, or the strings of a list; any other
/// shape contributes nothing
fn detail_lines(details: &Value) -> Vec<&str> {
    match details {
        Value::String(text) => vec![text.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

impl ApiError {
    /// Build the user-facing error for a failed response.
    ///
    /// `error` and `details` are joined with a line break; a body without
    /// `error` (or not JSON at all) falls back to `HTTP <status>`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let error = parsed
            .as_ref()
            .and_then(|b| b.error.as_ref())
            .and_then(Value::as_str);

        let mut message = error.map_or_else(|| format!("HTTP {}", status), str::to_string);
        if let Some(details) = parsed.as_ref().and_then(|b| b.details.as_ref()) {
            let lines = detail_lines(details);
            if !lines.is_empty() {
                message.push('\n');
                message.push_str(&lines.join("\n"));
            }
        }

        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result of a backend call.
///
/// `AuthExpired` means the session was already torn down and the user told;
/// callers only need to stop.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Ok(T),
    AuthExpired,
    Failed(ApiError),
}

impl<T> ApiOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Ok(value) => ApiOutcome::Ok(f(value)),
            ApiOutcome::AuthExpired => ApiOutcome::AuthExpired,
            ApiOutcome::Failed(err) => ApiOutcome::Failed(err),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, ApiError>) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Ok(value) => match f(value) {
                Ok(next) => ApiOutcome::Ok(next),
                Err(err) => ApiOutcome::Failed(err),
            },
            ApiOutcome::AuthExpired => ApiOutcome::AuthExpired,
            ApiOutcome::Failed(err) => ApiOutcome::Failed(err),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiOutcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiOutcome::AuthExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_and_details_joined() {
        let err = ApiError::from_response(400, r#"{"error":"X","details":"Y\nZ"}"#);
        assert_eq!(err.to_string(), "X\nY\nZ");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_error_without_details() {
        let err = ApiError::from_response(409, r#"{"error":"Category already exists"}"#);
        assert_eq!(err.to_string(), "Category already exists");
    }

    #[test]
    fn test_details_list_joined_by_lines() {
        let err = ApiError::from_response(400, r#"{"error":"Invalid","details":["a","b"]}"#);
        assert_eq!(err.to_string(), "Invalid\na\nb");
    }

    #[test]
    fn test_unexpected_details_shape_keeps_error() {
        let err = ApiError::from_response(400, r#"{"error":"Validation failed","details":{"title":"required"}}"#);
        assert_eq!(err.to_string(), "Validation failed");

        let err = ApiError::from_response(400, r#"{"error":"Invalid","details":["a",3,"b"]}"#);
        assert_eq!(err.to_string(), "Invalid\na\nb");
    }

    #[test]
    fn test_missing_error_field_falls_back_to_status() {
        let err = ApiError::from_response(500, r#"{"msg":"nope"}"#);
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_outcome_combinators() {
        let ok: ApiOutcome<u32> = ApiOutcome::Ok(2);
        assert_eq!(ok.clone().map(|v| v * 2), ApiOutcome::Ok(4));
        assert_eq!(
            ok.and_then(|_| Err::<u32, _>(ApiError::Decode("bad".into()))),
            ApiOutcome::Failed(ApiError::Decode("bad".into()))
        );
        let expired: ApiOutcome<u32> = ApiOutcome::AuthExpired;
        assert!(expired.clone().map(|v| v + 1).is_auth_expired());
        assert_eq!(expired.ok(), None);
    }
}
