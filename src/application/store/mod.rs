//! # State Store
//!
//! Two independent slices of application state, each changed only through
//! pending/fulfilled/rejected transitions around a call into the
//! [`DataService`](crate::application::services::DataService).
//!
//! - **auth_slice**: the signed-in coach and authentication status
//! - **coach_slice**: clients, plans and the dashboard statistics derived
//!   from them
//! - **dispatcher**: owns both slices, dispatches operations and notifies
//!   subscribers

pub mod auth_slice;
pub mod coach_slice;
mod request_log;
mod dispatcher;

pub use auth_slice::{AuthAction, AuthOperation, AuthState};
pub use coach_slice::{CoachAction, CoachOperation, CoachState};
pub use request_log::{RequestLog, RequestStatus};
pub use dispatcher::{Dispatch, Rejected, RootState, Store};
