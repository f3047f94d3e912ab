//! Outbound notification implementations.

mod sms;

pub use sms::{compose_body, Notifier, NotifierError, SmsLogNotifier};
