//! Invitation entity, answer value, and the storage contract.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A yes/no answer to an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Lowercase wire form ("yes" / "no").
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }

    /// Capitalized form used in confirmation messages ("Yes" / "No").
    pub fn capitalized(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }
}

/// Raw text did not normalize to a valid answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("response must be 'yes' or 'no'")]
pub struct ParseAnswerError;

impl FromStr for Answer {
    type Err = ParseAnswerError;

    /// Parse raw user text: surrounding whitespace is trimmed and case is
    /// folded before matching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            _ => Err(ParseAnswerError),
        }
    }
}

/// An invitation sent to a phone number, awaiting a yes/no answer before its
/// expiry deadline.
///
/// "Expired" is never stored: it is derived from the clock whenever the
/// invitation is inspected. `response` and `responded_at` are set together,
/// exactly once, by the store's atomic respond operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    /// Opaque unique identifier.
    pub id: String,

    /// Recipient phone number.
    pub phone_number: String,

    /// Invitation text delivered to the recipient.
    pub message: String,

    /// When the invitation was created (UTC).
    pub created_at: DateTime<Utc>,

    /// Deadline after which responses are rejected. Always later than
    /// `created_at`.
    pub expires_at: DateTime<Utc>,

    /// The recorded answer, absent until the invitation is answered.
    pub response: Option<Answer>,

    /// When the answer was recorded. Present iff `response` is present.
    pub responded_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Whether the expiry deadline has passed at `now`.
    ///
    /// Two reads at different times may legitimately disagree without any
    /// write having occurred.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether an answer has been recorded.
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }
}

/// Result of attempting to record a response against the store.
///
/// Every variant carrying an invitation holds a value copy taken inside the
/// store's critical section: `Recorded` reflects the freshly written state,
/// the rejection variants the untouched state.
#[derive(Debug, Clone, PartialEq)]
pub enum RespondOutcome {
    /// The answer was written; the invitation is now terminal.
    Recorded(Invitation),
    /// The deadline had passed; nothing was written.
    Expired(Invitation),
    /// An answer was already present; nothing was written.
    AlreadyResponded(Invitation),
    /// No invitation with that id exists.
    NotFound,
}

/// Storage contract for invitations.
///
/// The store is the sole owner of the invitation collection; callers only
/// ever receive value copies, never references into it. Operations are
/// synchronous and the exclusion primitive is never held across await
/// points.
pub trait InvitationStore: Send + Sync {
    /// Insert a new invitation. The caller guarantees `invitation.id` is not
    /// already present.
    fn put(&self, invitation: Invitation);

    /// Point lookup by id. Read-only.
    fn get(&self, id: &str) -> Option<Invitation>;

    /// Atomically look up, validate, and record an answer.
    ///
    /// Lookup, expiry check, conflict check, and write form one critical
    /// section, so two callers racing on the same id can never both observe
    /// `Recorded`.
    fn try_respond(&self, id: &str, answer: Answer, now: DateTime<Utc>) -> RespondOutcome;
}
