//! # Domain Entities
//!
//! Core domain entities of the coaching dashboard and the marketing site.
//!
//! ## Dashboard Entities
//!
//! - **Coach**: The signed-in account with profile and subscription tier
//! - **Client**: A coached person, owned by one coach
//! - **Plan**: A priced program offered by a coach
//! - **Session**: A training session recorded on a client
//!
//! ## Marketing Site
//!
//! - **ContactSubmission**: A message left through the contact form, with its
//!   repository trait implemented in the infrastructure layer

mod coach;
mod client;
mod plan;
mod submission;

pub use coach::{Coach, SubscriptionTier};

pub use client::{is_valid_progress, Client, ClientStatus, NewClient, Session};

pub use plan::{NewPlan, Plan};

pub use submission::{ContactSubmission, SubmissionError, SubmissionRepository};
