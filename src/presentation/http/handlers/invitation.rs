//! Invitation Handlers
//!
//! HTTP handlers for invitation endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::application::dto::{
    CreateInvitationRequest, InvitationResponse, RespondAck, RespondRequest,
};
use crate::application::services::{
    CreateInvitationDto, InvitationError, InvitationService, InvitationServiceImpl,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Helper to convert InvitationError to AppError
fn map_invitation_error(e: InvitationError) -> AppError {
    match e {
        InvitationError::Validation(msg) => AppError::Validation(msg),
        InvitationError::NotFound => AppError::NotFound("invitation not found".into()),
        InvitationError::Expired => AppError::Gone("invitation has expired".into()),
        InvitationError::AlreadyResponded => {
            AppError::Conflict("invitation already responded to".into())
        }
    }
}

/// Create a new invitation
///
/// POST /invitations
///
/// ## Request Body
/// - `phone_number`: recipient phone number (non-empty)
/// - `message`: invitation text (non-empty)
/// - `duration_min`: minutes until expiry (positive)
///
/// Returns 201 with the created invitation, or 400 on malformed JSON or
/// validation failure.
pub async fn create_invitation(
    State(state): State<AppState>,
    body: Result<Json<CreateInvitationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InvitationResponse>), AppError> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    body.validate()?;

    let service = InvitationServiceImpl::new(state.store.clone(), state.notifier.clone());

    let invitation = service
        .create_invitation(CreateInvitationDto {
            phone_number: body.phone_number,
            message: body.message,
            duration_min: body.duration_min,
        })
        .await
        .map_err(map_invitation_error)?;

    Ok((StatusCode::CREATED, Json(InvitationResponse::from(invitation))))
}

/// Respond to an invitation
///
/// POST /invitations/{id}/respond
///
/// ## Request Body
/// - `response`: "yes" or "no" (case-insensitive, whitespace tolerated)
///
/// ## Errors
/// - 400: malformed body or unrecognized answer
/// - 404: unknown invitation id
/// - 409: invitation already responded to
/// - 410: invitation expired
pub async fn respond_to_invitation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RespondRequest>, JsonRejection>,
) -> Result<Json<RespondAck>, AppError> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let service = InvitationServiceImpl::new(state.store.clone(), state.notifier.clone());

    service
        .respond(&id, &body.response, Utc::now())
        .await
        .map_err(map_invitation_error)?;

    Ok(Json(RespondAck::recorded()))
}

/// Fallback for any unmatched route
pub async fn not_found() -> AppError {
    AppError::NotFound("not found".into())
}
