use crate::error::HttpError;
use crate::method::Method;
use crate::request::RequestBuilder;
use crate::response::Response;

/// Shared transport
///
/// Clones reuse the same connection pool. No timeout is configured, so a
/// request waits for as long as the server takes.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Transport with reqwest's defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure proxy and TLS before building
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Start a request to an absolute `url`
    ///
    /// The URL is only parsed when the request is sent, so a malformed one
    /// surfaces as an error from [`RequestBuilder::send`].
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(method, self.inner.request(method.into(), url))
    }
}

/// Options for [`HttpClient`]
///
/// Both options only exist on native targets; in the browser the fetch API
/// owns proxying and certificate checks.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    #[cfg(not(target_arch = "wasm32"))]
    accept_invalid_certs: bool,
    #[cfg(not(target_arch = "wasm32"))]
    proxy: Option<url::Url>,
}

impl HttpClientBuilder {
    /// Skip certificate validation, for self-signed development servers
    #[cfg(not(target_arch = "wasm32"))]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Send every request through `url` (http, https or socks5)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn proxy(mut self, url: url::Url) -> Self {
        self.proxy = Some(url);
        self
    }

    /// Build the transport
    #[cfg(not(target_arch = "wasm32"))]
    pub fn build(self) -> Response<HttpClient> {
        let proxy = self
            .proxy
            .map(|url| reqwest::Proxy::all(url.as_str()))
            .transpose()
            .map_err(|err| HttpError::Proxy(err.to_string()))?;

        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);
        if let Some(proxy) = proxy {
            builder = builder.proxy(proxy);
        }

        let inner = builder
            .build()
            .map_err(|err| HttpError::Build(err.to_string()))?;

        Ok(HttpClient { inner })
    }

    /// Build the transport
    #[cfg(target_arch = "wasm32")]
    pub fn build(self) -> Response<HttpClient> {
        Ok(HttpClient::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_method() {
        let client = HttpClient::new();

        let activate = client.request(
            Method::Put,
            "http://localhost:3030/admin/semesters/1/activate",
        );
        assert_eq!(activate.method(), Method::Put);

        let listing = client.request(Method::default(), "http://localhost:3030/admin/users");
        assert_eq!(listing.method(), Method::Get);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_builder_options() {
        assert!(HttpClient::builder().build().is_ok());

        let proxy = url::Url::parse("socks5://127.0.0.1:9050").expect("valid url");
        let built = HttpClient::builder()
            .danger_accept_invalid_certs(true)
            .proxy(proxy)
            .build();
        assert!(built.is_ok());
    }
}
