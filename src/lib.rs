//! # Athletica
//!
//! Data layer of the Athletica coaching dashboard and the marketing-site
//! contact server:
//! - A reducer-style store (auth and coach slices) with derived dashboard
//!   statistics
//! - An in-memory coaching API with seeded data and simulated latency
//! - An HTTP server for contact-form submissions and an admin listing
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, attribute maps and pure statistics
//! - **Application Layer**: Store slices, DTOs and the data service contract
//! - **Infrastructure Layer**: Mock API, submission storage and metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! athletica/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects and domain services
//! +-- application/    Store, DTOs and service traits
//! +-- infrastructure/ Mock API, repositories and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors, validation, ids and HTML escaping
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Store and service contracts
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
