//! Repository Implementations
//!
//! File-backed implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **JsonFileSubmissionRepository** - Contact-form submissions in a JSON file

pub mod submission_repository;

pub use submission_repository::JsonFileSubmissionRepository;
