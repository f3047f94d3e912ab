//! Invitation DTOs
//!
//! Data Transfer Objects for invitation API operations.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Invitation;

/// Request to create a new invitation.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvitationRequest {
    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,

    /// Minutes until the invitation expires.
    #[validate(range(min = 1, message = "duration_min must be positive"))]
    pub duration_min: i64,
}

/// Request body for responding to an invitation.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    /// Raw answer text; normalized to "yes"/"no" by the service.
    pub response: String,
}

/// Invitation representation returned by the API.
///
/// Timestamps are RFC 3339; unanswered fields are omitted entirely.
#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub id: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub expires_at: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<String>,
}

impl From<Invitation> for InvitationResponse {
    fn from(invitation: Invitation) -> Self {
        Self {
            id: invitation.id,
            phone_number: invitation.phone_number,
            message: invitation.message,
            expires_at: invitation.expires_at.to_rfc3339(),
            created_at: invitation.created_at.to_rfc3339(),
            response: invitation.response.map(|a| a.as_str().to_string()),
            responded_at: invitation.responded_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Acknowledgement for a recorded response.
#[derive(Debug, Serialize)]
pub struct RespondAck {
    pub status: &'static str,
}

impl RespondAck {
    pub fn recorded() -> Self {
        Self {
            status: "response recorded",
        }
    }
}
