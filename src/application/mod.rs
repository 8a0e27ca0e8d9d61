//! Application Layer
//!
//! The data service contract, the state store that drives it, and the
//! request/response DTOs exchanged with callers.

pub mod dto;
pub mod services;
pub mod store;
