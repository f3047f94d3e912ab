//! # Domain Entities
//!
//! Core domain types for the invitation lifecycle.
//!
//! - **Invitation**: an outbound yes/no request bound to a phone number and
//!   an expiry deadline
//! - **Answer**: the recorded yes/no response value
//! - **RespondOutcome**: discriminated result of attempting to record a
//!   response
//!
//! The `InvitationStore` trait defines the storage contract; it is
//! implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod invitation;

pub use invitation::{Answer, Invitation, InvitationStore, ParseAnswerError, RespondOutcome};
