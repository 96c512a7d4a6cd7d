//! Unified SDK error types.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client configuration errors, raised before any network I/O.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api_url and node_host are mutually exclusive")]
    AmbiguousEndpoint,

    #[error("node_port requires node_host")]
    MissingHost,

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Network-level failures and non-2xx GET responses.
///
/// GET failures stay unstructured: the server returns a structured error
/// payload only on POST, so a failed GET carries the status and raw body
/// as-is.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl TransportError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Request(err)
        }
    }

    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(e) => e.status().map(|s| s.as_u16()),
            TransportError::Timeout => None,
        }
    }
}

/// Structured error returned by the server on a failed POST.
///
/// Fields come from the `error_code`, `error_message` and `error` keys of
/// the response body; a missing key maps to `None`. A body that is not a
/// JSON object degrades to an error whose `detail` holds the raw text.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", .message.as_deref().unwrap_or("unknown API error"))]
pub struct ApiError {
    /// Server error code (integer or string, server-dependent).
    pub code: Option<Value>,
    /// Human-readable error message.
    pub message: Option<String>,
    /// Additional error detail.
    pub detail: Option<Value>,
}

impl ApiError {
    /// Build an [`ApiError`] from a failed POST response body.
    pub(crate) fn from_body(body: &str) -> Self {
        let non_null = |v: Option<&Value>| v.filter(|v| !v.is_null()).cloned();
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => ApiError {
                code: non_null(map.get("error_code")),
                message: non_null(map.get("error_message")).map(|v| match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                }),
                detail: non_null(map.get("error")),
            },
            _ => ApiError {
                code: None,
                message: None,
                detail: Some(Value::String(body.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_from_full_body() {
        let err = ApiError::from_body(
            r#"{"error_code":7,"error_message":"bad request","error":"detail"}"#,
        );
        assert_eq!(err.code, Some(json!(7)));
        assert_eq!(err.message.as_deref(), Some("bad request"));
        assert_eq!(err.detail, Some(json!("detail")));
    }

    #[test]
    fn api_error_from_partial_body() {
        let err = ApiError::from_body(r#"{"error_message":"nope"}"#);
        assert!(err.code.is_none());
        assert_eq!(err.message.as_deref(), Some("nope"));
        assert!(err.detail.is_none());
    }

    #[test]
    fn api_error_accepts_string_code() {
        let err = ApiError::from_body(r#"{"error_code":"E42"}"#);
        assert_eq!(err.code, Some(json!("E42")));
    }

    #[test]
    fn api_error_ignores_null_fields() {
        let err = ApiError::from_body(r#"{"error_code":null,"error":null}"#);
        assert!(err.code.is_none());
        assert!(err.detail.is_none());
    }

    #[test]
    fn api_error_from_non_json_body() {
        let err = ApiError::from_body("<html>502 Bad Gateway</html>");
        assert!(err.code.is_none());
        assert!(err.message.is_none());
        assert_eq!(err.detail, Some(json!("<html>502 Bad Gateway</html>")));
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::from_body(r#"{"error_message":"bad request"}"#);
        assert_eq!(format!("{}", err), "bad request");

        let err = ApiError::from_body("not json");
        assert_eq!(format!("{}", err), "unknown API error");
    }

    #[test]
    fn transport_status_accessor() {
        let err = TransportError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(TransportError::Timeout.status(), None);
    }
}
