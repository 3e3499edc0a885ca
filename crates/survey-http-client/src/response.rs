use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Outcome of a transport operation
pub type Response<R, E = HttpError> = Result<R, E>;

/// Answer whose body has not been read yet
///
/// Any status counts as an answer; interpreting it is up to the caller.
#[derive(Debug)]
pub struct RawResponse {
    status: u16,
    inner: reqwest::Response,
}

impl RawResponse {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        let status = inner.status().as_u16();
        Self { status, inner }
    }

    /// Status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// `true` for 2xx
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// Body as a string
    pub async fn text(self) -> Response<String> {
        Ok(self.inner.text().await?)
    }

    /// Body decoded from JSON
    ///
    /// An empty or malformed body is an [`HttpError::Serialization`] whatever
    /// the status.
    pub async fn json<T: DeserializeOwned>(self) -> Response<T> {
        let text = self.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
