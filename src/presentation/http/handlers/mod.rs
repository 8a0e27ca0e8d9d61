//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod admin;
pub mod contact;
pub mod health;
