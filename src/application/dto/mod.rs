//! Data Transfer Objects
//!
//! Request forms accepted by the store and the contact endpoint, and the
//! responses returned by the data service and HTTP handlers.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
