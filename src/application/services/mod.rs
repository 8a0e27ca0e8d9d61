//! Application Services
//!
//! Contracts for the collaborators the store depends on.
//!
//! ## Available Services
//!
//! - **DataService**: Authentication, clients, plans, profile and image upload

pub mod data_service;

pub use data_service::{DataService, ServiceError};

#[cfg(test)]
pub use data_service::MockDataService;
