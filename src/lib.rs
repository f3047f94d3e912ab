//! # Invitation Server Library
//!
//! This crate provides an SMS invitation service:
//! - Invitations bound to a phone number and an expiry deadline
//! - Single yes/no response per invitation, enforced atomically
//! - RESTful HTTP API endpoints
//! - Abstract outbound notifier (actual SMS delivery is out of scope)
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Invitation entity, answer value, and the store trait
//! - **Application Layer**: Invitation service and DTOs
//! - **Infrastructure Layer**: In-memory store, notifier, and metrics
//! - **Presentation Layer**: HTTP handlers, routes, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! invitation_server/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Store, notifier, and metrics implementations
//! +-- presentation/  HTTP routes and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
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
