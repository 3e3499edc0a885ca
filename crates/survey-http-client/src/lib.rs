//! HTTP transport for the survey platform client
//!
//! This crate wraps the underlying HTTP library (reqwest) behind a small
//! surface so the API client never depends on it directly. Non-2xx statuses
//! are not errors here: [`RequestBuilder::send`] hands back a [`RawResponse`]
//! and the caller decides what a status means.
//!
//! # Example
//!
//! ```no_run
//! use survey_http_client::{HttpClient, Method};
//!
//! async fn example() -> Result<(), survey_http_client::HttpError> {
//!     let client = HttpClient::new();
//!     let response = client
//!         .request(Method::Get, "http://localhost:3030/student/subjects")
//!         .header("X-User-ID", "42")
//!         .send()
//!         .await?;
//!
//!     println!("{} {}", response.status(), response.text().await?);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod method;
mod request;
mod response;

pub use client::{HttpClient, HttpClientBuilder};
pub use error::HttpError;
pub use method::Method;
pub use request::RequestBuilder;
pub use response::{RawResponse, Response};
