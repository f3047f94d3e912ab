//! In-memory invitation store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::domain::{Answer, Invitation, InvitationStore, RespondOutcome};

/// Mutex-guarded map of invitations keyed by id.
///
/// A single lock guards every read and write. Write volume is low, so a
/// read/write split buys nothing, and `try_respond` needs the full critical
/// section either way.
#[derive(Debug, Default)]
pub struct InMemoryInvitationStore {
    invitations: Mutex<HashMap<String, Invitation>>,
}

impl InMemoryInvitationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invitations currently held, answered or not.
    pub fn len(&self) -> usize {
        self.invitations.lock().len()
    }

    /// Whether the store holds no invitations.
    pub fn is_empty(&self) -> bool {
        self.invitations.lock().is_empty()
    }
}

impl InvitationStore for InMemoryInvitationStore {
    fn put(&self, invitation: Invitation) {
        self.invitations
            .lock()
            .insert(invitation.id.clone(), invitation);
    }

    fn get(&self, id: &str) -> Option<Invitation> {
        self.invitations.lock().get(id).cloned()
    }

    fn try_respond(&self, id: &str, answer: Answer, now: DateTime<Utc>) -> RespondOutcome {
        let mut invitations = self.invitations.lock();

        let Some(invitation) = invitations.get_mut(id) else {
            return RespondOutcome::NotFound;
        };

        if invitation.is_expired_at(now) {
            return RespondOutcome::Expired(invitation.clone());
        }

        if invitation.is_answered() {
            return RespondOutcome::AlreadyResponded(invitation.clone());
        }

        invitation.response = Some(answer);
        invitation.responded_at = Some(now);
        RespondOutcome::Recorded(invitation.clone())
    }
}
