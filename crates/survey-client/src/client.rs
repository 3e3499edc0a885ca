//! Request wrapper
//!
//! [`ApiClient::request`] is the one place that talks to the network. It
//! merges headers, sends, always decodes the body as JSON and folds every
//! outcome into an [`ApiResponse`]; it never returns early with an error of
//! its own.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use survey_http_client::{HttpClient, HttpError, Method};
use tracing::instrument;

use crate::endpoint::Endpoint;
use crate::response::{ApiError, ApiResponse};
use crate::session::{self, MemoryStorage, SessionStorage, USER_ID_KEY};

/// Backend origin used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3030";

/// Content type header name
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// Content type sent with every request
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Header carrying the stored user id
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Per-call request settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<String>,
    body_error: Option<String>,
}

impl RequestOptions {
    /// Options for `method` with no body and no extra headers
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// GET
    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    /// POST
    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    /// PUT
    pub fn put() -> Self {
        Self::new(Method::Put)
    }

    /// Replace the method
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a caller header; it wins over the wrapper's defaults
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// JSON encode `body` as the request body
    ///
    /// An encoding failure is reported when the request is made, as a
    /// transport failure.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_string(body) {
            Ok(json) => {
                self.body = Some(json);
                self.body_error = None;
            }
            Err(err) => {
                self.body = None;
                self.body_error = Some(HttpError::from(err).to_string());
            }
        }
        self
    }

    /// Use an already encoded body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.body_error = None;
        self
    }

    /// Method these options send with
    pub fn http_method(&self) -> Method {
        self.method
    }

    /// Caller headers, in insertion order
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Encoded body
    pub fn body_str(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Headers for one request
///
/// Order of precedence, lowest first: `Content-Type: application/json`,
/// `X-User-ID` when `user_id` is non-empty, then `overrides`. Names compare
/// case-insensitively; an override keeps its own spelling.
pub fn merge_headers(
    user_id: Option<&str>,
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut headers = vec![(
        CONTENT_TYPE_HEADER.to_string(),
        JSON_CONTENT_TYPE.to_string(),
    )];

    if let Some(user_id) = user_id.filter(|id| !id.is_empty()) {
        headers.push((USER_ID_HEADER.to_string(), user_id.to_string()));
    }

    for (key, value) in overrides {
        match headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
        {
            Some(slot) => *slot = (key.clone(), value.clone()),
            None => headers.push((key.clone(), value.clone())),
        }
    }

    headers
}

/// Whether an `error` value counts as present; empty strings, zero, false and
/// null do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Message for a non-2xx answer
fn status_error_message(body: &Value, status: u16) -> String {
    match body.get("error") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(value) if is_truthy(value) => value.to_string(),
        _ => format!("HTTP error! status: {status}"),
    }
}

/// Client for the survey backend
///
/// Construct once and pass it around; clones share the connection pool and
/// the session storage.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: HttpClient,
    storage: Arc<dyn SessionStorage>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ApiClient {
    /// Client for `base_url` with in-memory session storage
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder().base_url(base_url).build()
    }

    /// Builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Configured origin
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Storage the `X-User-ID` header is read from
    pub fn storage(&self) -> &Arc<dyn SessionStorage> {
        &self.storage
    }

    /// Base URL and `endpoint` concatenated as-is
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn stored_user_id(&self) -> Option<String> {
        match self.storage.get_item(USER_ID_KEY) {
            Ok(user_id) => user_id,
            Err(session::Error::Unavailable) => None,
            Err(err) => {
                tracing::warn!("Could not read stored user id: {}", err);
                None
            }
        }
    }

    /// Headers `options` would be sent with right now
    pub fn headers_for(&self, options: &RequestOptions) -> Vec<(String, String)> {
        merge_headers(self.stored_user_id().as_deref(), options.headers())
    }

    /// Send one request to `endpoint` and normalize the outcome
    ///
    /// - transport failures and undecodable bodies give a failure with the
    ///   error message, or "Network error" when it has none;
    /// - a non-2xx status gives a failure with the body's `error` field, or
    ///   "HTTP error! status: <code>";
    /// - a 2xx status gives the decoded body.
    ///
    /// The body is decoded as JSON whatever the status. No retries, no timeout.
    #[instrument(skip(self, options), fields(method = %options.http_method()))]
    pub async fn request<T>(&self, endpoint: &str, options: RequestOptions) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        tracing::debug!("{}", url);

        let headers = self.headers_for(&options);
        let RequestOptions {
            method,
            body,
            body_error,
            ..
        } = options;

        if let Some(message) = body_error {
            return ApiResponse::Failure(ApiError::transport(message));
        }

        let mut builder = self.http.request(method, &url);
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let raw = match builder.send().await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Request to {} failed: {}", url, err);
                return ApiResponse::Failure(ApiError::transport(err.to_string()));
            }
        };

        let status = raw.status();
        let success = raw.is_success();

        let body: Value = match raw.json().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("Response from {} is not JSON: {}", url, err);
                return ApiResponse::Failure(ApiError::transport(err.to_string()));
            }
        };

        if !success {
            return ApiResponse::Failure(ApiError::status(
                status,
                status_error_message(&body, status),
            ));
        }

        match serde_json::from_value(body) {
            Ok(data) => ApiResponse::Success(data),
            Err(err) => {
                tracing::warn!("Unexpected response shape from {}: {}", url, err);
                ApiResponse::Failure(ApiError::transport(HttpError::from(err).to_string()))
            }
        }
    }

    /// Call a bodiless route from the table
    pub(crate) async fn call<T>(&self, endpoint: Endpoint) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        self.request(&endpoint.path(), RequestOptions::new(endpoint.method()))
            .await
    }

    /// Call a route from the table with a JSON body
    pub(crate) async fn call_with<B, T>(&self, endpoint: Endpoint, body: &B) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(
            &endpoint.path(),
            RequestOptions::new(endpoint.method()).json(body),
        )
        .await
    }
}

/// Builder for [`ApiClient`]
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    http: Option<HttpClient>,
    storage: Option<Arc<dyn SessionStorage>>,
}

impl ApiClientBuilder {
    /// Backend origin, e.g. `https://surveys.example.edu/api`
    ///
    /// Endpoints are appended verbatim, so no trailing slash.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Transport to send with
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Storage holding the session
    pub fn storage(mut self, storage: Arc<dyn SessionStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the client
    pub fn build(self) -> ApiClient {
        ApiClient {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http: self.http.unwrap_or_default(),
            storage: self
                .storage
                .unwrap_or_else(|| Arc::new(MemoryStorage::new())),
        }
    }
}
