//! Presentation Layer
//!
//! HTTP routes and middleware of the contact server.

pub mod http;
pub mod middleware;
