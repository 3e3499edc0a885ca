//! Client for the survey platform backend
//!
//! [`ApiClient`] wraps every REST endpoint of the backend and returns an
//! [`ApiResponse`] from each call instead of an error. Session state lives in
//! an injected [`session::SessionStorage`]; the client only reads the user id
//! from it, [`SessionManager`] reads and clears the rest.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use survey_client::session::MemoryStorage;
//! use survey_client::{ApiClient, ApiResponse};
//!
//! async fn example() {
//!     let client = ApiClient::builder()
//!         .base_url("http://localhost:3030")
//!         .storage(Arc::new(MemoryStorage::new()))
//!         .build();
//!
//!     match client.get_student_subjects().await {
//!         ApiResponse::Success(subjects) => println!("{} subjects", subjects.len()),
//!         ApiResponse::Failure(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

mod api;
pub mod client;
pub mod endpoint;
pub mod models;
pub mod response;
pub mod session;

pub use client::{merge_headers, ApiClient, ApiClientBuilder, RequestOptions, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use response::{ApiError, ApiResponse, ErrorKind};
pub use session::{Navigator, SessionManager};
pub use survey_http_client::{HttpClient, Method};
