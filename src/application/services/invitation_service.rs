//! Invitation Service
//!
//! Validates incoming requests, assigns ids and timestamps, and orchestrates
//! the store and the notifier.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::{Answer, Invitation, InvitationStore, ParseAnswerError, RespondOutcome};
use crate::infrastructure::metrics;
use crate::infrastructure::notifier::Notifier;

/// Invitation service trait defining invitation operations.
#[async_trait]
pub trait InvitationService: Send + Sync {
    /// Create a new invitation and notify the invitee.
    async fn create_invitation(
        &self,
        request: CreateInvitationDto,
    ) -> Result<Invitation, InvitationError>;

    /// Record a yes/no response for an invitation.
    ///
    /// `now` is the instant the response arrived; expiry is judged against
    /// it rather than against a clock read taken later under the lock.
    async fn respond(
        &self,
        id: &str,
        raw_response: &str,
        now: DateTime<Utc>,
    ) -> Result<Invitation, InvitationError>;
}

/// Input for creating an invitation.
#[derive(Debug, Clone)]
pub struct CreateInvitationDto {
    /// Recipient phone number.
    pub phone_number: String,
    /// Invitation text.
    pub message: String,
    /// Minutes until the invitation expires. Must be positive.
    pub duration_min: i64,
}

/// Invitation service errors.
#[derive(Debug, thiserror::Error)]
pub enum InvitationError {
    #[error("{0}")]
    Validation(String),

    #[error("invitation not found")]
    NotFound,

    #[error("invitation has expired")]
    Expired,

    #[error("invitation already responded to")]
    AlreadyResponded,
}

/// Invitation service implementation.
pub struct InvitationServiceImpl<S, N>
where
    S: InvitationStore + ?Sized,
    N: Notifier + ?Sized,
{
    store: Arc<S>,
    notifier: Arc<N>,
}

impl<S, N> InvitationServiceImpl<S, N>
where
    S: InvitationStore + ?Sized,
    N: Notifier + ?Sized + 'static,
{
    /// Create a new InvitationServiceImpl.
    pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
        Self { store, notifier }
    }

    /// Hand a message to the notifier without waiting for it.
    ///
    /// Runs on its own task: notifier latency or failure never reaches the
    /// caller, and the store lock is long released by the time the send
    /// starts. Failures are logged and dropped.
    fn notify(&self, phone_number: String, body: String, expires_at: Option<DateTime<Utc>>) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(error) = notifier.send(&phone_number, &body, expires_at).await {
                tracing::warn!(to = %phone_number, %error, "SMS notification failed");
            }
        });
    }
}

#[async_trait]
impl<S, N> InvitationService for InvitationServiceImpl<S, N>
where
    S: InvitationStore + ?Sized + 'static,
    N: Notifier + ?Sized + 'static,
{
    async fn create_invitation(
        &self,
        request: CreateInvitationDto,
    ) -> Result<Invitation, InvitationError> {
        // Validation happens before the store is touched at all.
        if request.phone_number.trim().is_empty() {
            return Err(InvitationError::Validation(
                "phone_number must not be empty".into(),
            ));
        }
        if request.message.trim().is_empty() {
            return Err(InvitationError::Validation(
                "message must not be empty".into(),
            ));
        }
        if request.duration_min <= 0 {
            return Err(InvitationError::Validation(
                "duration_min must be positive".into(),
            ));
        }

        let created_at = Utc::now();
        let invitation = Invitation {
            // Random 128-bit id; the store relies on the caller for
            // uniqueness and a v4 UUID delivers it even under concurrent
            // creation.
            id: Uuid::new_v4().to_string(),
            phone_number: request.phone_number,
            message: request.message,
            created_at,
            expires_at: created_at + Duration::minutes(request.duration_min),
            response: None,
            responded_at: None,
        };

        self.store.put(invitation.clone());
        metrics::record_invitation_created();

        self.notify(
            invitation.phone_number.clone(),
            invitation.message.clone(),
            Some(invitation.expires_at),
        );

        tracing::info!(
            id = %invitation.id,
            expires_at = %invitation.expires_at,
            "Invitation created"
        );
        Ok(invitation)
    }

    async fn respond(
        &self,
        id: &str,
        raw_response: &str,
        now: DateTime<Utc>,
    ) -> Result<Invitation, InvitationError> {
        let answer: Answer = raw_response
            .parse()
            .map_err(|e: ParseAnswerError| InvitationError::Validation(e.to_string()))?;

        match self.store.try_respond(id, answer, now) {
            RespondOutcome::Recorded(invitation) => {
                metrics::record_invitation_response("recorded");
                self.notify(
                    invitation.phone_number.clone(),
                    format!(
                        "Thanks! Your response has been recorded as: {}",
                        answer.capitalized()
                    ),
                    None,
                );
                tracing::info!(id = %invitation.id, answer = answer.as_str(), "Response recorded");
                Ok(invitation)
            }
            RespondOutcome::Expired(invitation) => {
                metrics::record_invitation_response("expired");
                self.notify(
                    invitation.phone_number.clone(),
                    "Sorry, your invitation has expired.".to_string(),
                    None,
                );
                Err(InvitationError::Expired)
            }
            RespondOutcome::AlreadyResponded(_) => {
                metrics::record_invitation_response("conflict");
                Err(InvitationError::AlreadyResponded)
            }
            RespondOutcome::NotFound => {
                metrics::record_invitation_response("not_found");
                Err(InvitationError::NotFound)
            }
        }
    }
}
