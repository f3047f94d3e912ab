//! Infrastructure Layer
//!
//! Concrete implementations behind the domain contracts:
//! - In-memory invitation store
//! - Outbound notifier (log-backed SMS stand-in)
//! - Prometheus metrics

pub mod metrics;
pub mod notifier;
pub mod store;
