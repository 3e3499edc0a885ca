//! HTTP request builder

use crate::error::HttpError;
use crate::method::Method;
use crate::response::{RawResponse, Response};

/// HTTP request builder
///
/// Headers are applied in call order; a later header with the same name
/// replaces the earlier one.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    inner: reqwest::RequestBuilder,
    build_error: Option<HttpError>,
}

impl RequestBuilder {
    pub(crate) fn new(method: Method, inner: reqwest::RequestBuilder) -> Self {
        Self {
            method,
            inner,
            build_error: None,
        }
    }

    /// Method this request will be sent with
    pub fn method(&self) -> Method {
        self.method
    }

    /// Add a header to the request, replacing any previous value
    pub fn header(self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let Self {
            method,
            inner,
            build_error,
        } = self;

        let name = match reqwest::header::HeaderName::from_bytes(key.as_ref().as_bytes()) {
            Ok(name) => name,
            Err(err) => {
                return Self {
                    method,
                    inner,
                    build_error: build_error.or(Some(HttpError::Build(err.to_string()))),
                }
            }
        };
        let value = match reqwest::header::HeaderValue::from_str(value.as_ref()) {
            Ok(value) => value,
            Err(err) => {
                return Self {
                    method,
                    inner,
                    build_error: build_error.or(Some(HttpError::Build(err.to_string()))),
                }
            }
        };

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(name, value);

        Self {
            method,
            inner: inner.headers(headers),
            build_error,
        }
    }

    /// Set a pre-encoded request body
    ///
    /// Does not touch `Content-Type`; callers set the headers they need.
    pub fn body(self, body: impl Into<String>) -> Self {
        Self {
            inner: self.inner.body(body.into()),
            ..self
        }
    }

    /// Send the request and return a raw response
    ///
    /// Any status code is a successful send; only transport failures and
    /// invalid request parts are errors.
    pub async fn send(self) -> Response<RawResponse> {
        if let Some(err) = self.build_error {
            return Err(err);
        }

        let response = self.inner.send().await.map_err(HttpError::from)?;
        tracing::trace!(
            method = %self.method,
            status = response.status().as_u16(),
            "Response received"
        );
        Ok(RawResponse::new(response))
    }
}
