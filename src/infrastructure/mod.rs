//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - The in-memory coaching API used by the dashboard store
//! - File-backed contact submission storage
//! - Prometheus metrics

pub mod metrics;
pub mod mock_api;
pub mod repositories;
