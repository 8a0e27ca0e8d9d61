//! # Domain Services
//!
//! Pure functions over entity collections that do not belong to a single
//! entity.
//!
//! ## Services
//!
//! - **DashboardStats**: Aggregate statistics derived from clients and plans
//! - **ClientFilter**: Status filter and search used by the client list

mod client_filter;
mod dashboard_stats;

pub use client_filter::*;
pub use dashboard_stats::*;
