//! Uniform result envelope returned by every API call

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Message used when a transport failure carries no text of its own
pub const NETWORK_ERROR: &str = "Network error";

/// Where a failed call went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced a usable body: unreachable host, invalid
    /// request, or a body that is not JSON
    Transport,
    /// The server answered with a status outside 2xx
    Status(u16),
}

/// Error half of an [`ApiResponse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Transport or parse failure
    ///
    /// An empty message is replaced with [`NETWORK_ERROR`].
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::Transport,
            message: if message.is_empty() {
                NETWORK_ERROR.to_string()
            } else {
                message
            },
        }
    }

    /// Non-2xx answer from the server
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Status(status),
            message: message.into(),
        }
    }

    /// Failure kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status, when the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Status(status) => Some(status),
            ErrorKind::Transport => None,
        }
    }

    /// Human readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Outcome of one API call
///
/// Exactly one of data or error is populated. Serializes as
/// `{"success": true, "data": ...}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// 2xx answer with a decoded body
    Success(T),
    /// Anything else
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    /// `true` for [`ApiResponse::Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Decoded body, when successful
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(data) => Some(data),
            ApiResponse::Failure(_) => None,
        }
    }

    /// Error message, when failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(err) => Some(err.message()),
        }
    }

    /// Full error, when failed
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(err) => Some(err),
        }
    }

    /// Map the success value
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApiResponse::Success(data) => ApiResponse::Success(f(data)),
            ApiResponse::Failure(err) => ApiResponse::Failure(err),
        }
    }

    /// Convert into a std `Result` for use with `?`
    pub fn into_result(self) -> Result<T, ApiError> {
        self.into()
    }
}

impl<T> From<ApiResponse<T>> for Result<T, ApiError> {
    fn from(response: ApiResponse<T>) -> Self {
        match response {
            ApiResponse::Success(data) => Ok(data),
            ApiResponse::Failure(err) => Err(err),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => ApiResponse::Success(data),
            Err(err) => ApiResponse::Failure(err),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            ApiResponse::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ApiResponse::Failure(err) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", err.message())?;
            }
        }
        state.end()
    }
}
