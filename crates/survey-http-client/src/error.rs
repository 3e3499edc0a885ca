//! Transport errors

use thiserror::Error;

/// Why a request did not produce a usable answer
///
/// `Display` output is what the survey client shows to users as the failure
/// message, so every variant renders to a non-empty string.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Server answered with a status the caller asked to treat as a failure
    #[error("server answered {status}: {message}")]
    Status {
        /// Status code
        status: u16,
        /// Body or reason phrase
        message: String,
    },
    /// Backend could not be reached
    #[error("could not reach server: {0}")]
    Connection(String),
    /// No answer in time
    #[error("request timed out")]
    Timeout,
    /// Body could not be encoded or decoded as JSON
    #[error("invalid JSON: {0}")]
    Serialization(String),
    /// Proxy URL rejected
    #[error("invalid proxy: {0}")]
    Proxy(String),
    /// Request or client could not be built, e.g. a malformed URL or header
    #[error("invalid request: {0}")]
    Build(String),
    /// Anything else reported by the transport
    #[error("{0}")]
    Other(String),
}

impl HttpError {
    /// Status code carried by [`HttpError::Status`]
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(err: &reqwest::Error) -> bool {
    err.is_connect()
}

#[cfg(target_arch = "wasm32")]
fn is_connect(_err: &reqwest::Error) -> bool {
    false
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();

        match err.status() {
            _ if err.is_timeout() => HttpError::Timeout,
            _ if err.is_builder() => HttpError::Build(message),
            _ if err.is_decode() => HttpError::Serialization(message),
            Some(status) => HttpError::Status {
                status: status.as_u16(),
                message,
            },
            None if is_connect(&err) => HttpError::Connection(message),
            None => HttpError::Other(message),
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_never_empty() {
        let errors = [
            HttpError::Status {
                status: 502,
                message: String::new(),
            },
            HttpError::Connection(String::new()),
            HttpError::Timeout,
            HttpError::Serialization(String::new()),
            HttpError::Proxy(String::new()),
            HttpError::Build(String::new()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty(), "{err:?}");
        }
    }

    #[test]
    fn test_status_accessor() {
        let err = HttpError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "server answered 401: Unauthorized");
        assert_eq!(HttpError::Timeout.status(), None);
    }

    #[test]
    fn test_json_error_is_serialization() {
        let err = serde_json::from_str::<serde_json::Value>("<html>")
            .map_err(HttpError::from)
            .expect_err("not JSON");

        assert!(matches!(err, HttpError::Serialization(_)));
        assert!(err.to_string().starts_with("invalid JSON: "));
    }
}
