//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **AttributeValue / AttributeMap**: open key-value data attached to coaches,
//!   clients and sessions (goals, stats, settings)

mod attributes;

pub use attributes::*;
