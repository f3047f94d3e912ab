//! Outbound SMS capability.
//!
//! The core depends only on the `Notifier` contract; actual delivery is out
//! of scope, so the shipped implementation writes outbound messages to the
//! log.

use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};

/// Failure to hand a message to the underlying transport.
#[derive(Debug, thiserror::Error)]
#[error("failed to send SMS: {0}")]
pub struct NotifierError(pub String);

/// Abstract outbound-message capability.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `body` to `phone_number`.
    ///
    /// When `expires_at` is given, a human-readable deadline clause is
    /// appended to the body; otherwise the body is sent verbatim.
    async fn send(
        &self,
        phone_number: &str,
        body: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), NotifierError>;
}

/// Compose the final message body, appending the deadline clause when an
/// expiry is supplied. The deadline is rendered in local time, 12-hour
/// format (e.g. "6:05PM").
pub fn compose_body(body: &str, expires_at: Option<DateTime<Utc>>) -> String {
    match expires_at {
        Some(at) => format!(
            "{} This invitation will be open until {}.",
            body.trim(),
            at.with_timezone(&Local).format("%-I:%M%p")
        ),
        None => body.to_string(),
    }
}

/// Transport stand-in that logs outbound messages instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct SmsLogNotifier;

impl SmsLogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for SmsLogNotifier {
    async fn send(
        &self,
        phone_number: &str,
        body: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), NotifierError> {
        let message = compose_body(body, expires_at);
        tracing::info!(to = %phone_number, %message, "Sending SMS");
        Ok(())
    }
}
