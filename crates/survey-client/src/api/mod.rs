//! Endpoint methods
//!
//! Each method is one row of [`crate::Endpoint`] sent through
//! [`crate::ApiClient::request`]; none adds behaviour of its own.

mod admin;
mod auth;
mod professor;
mod student;
