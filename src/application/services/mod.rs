//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **InvitationService**: invitation creation and response recording

pub mod invitation_service;

// Re-export invitation service types
pub use invitation_service::{
    CreateInvitationDto, InvitationError, InvitationService, InvitationServiceImpl,
};
