//! # Domain Layer
//!
//! Entities, value objects and pure domain services of the coaching
//! dashboard. Independent of the store, the mock API and HTTP.
//!
//! ## Structure
//!
//! - **entities**: Coach, Client, Plan, Session, ContactSubmission
//! - **value_objects**: Free-form attribute maps
//! - **services**: Pure functions over entity collections (dashboard statistics,
//!   client filtering)

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
