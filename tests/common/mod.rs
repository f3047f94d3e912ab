//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use chrono::{DateTime, Utc};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use parking_lot::Mutex;
use tower::ServiceExt;

use invitation_server::config::{CorsSettings, ServerSettings, Settings};
use invitation_server::infrastructure::notifier::{Notifier, NotifierError};
use invitation_server::infrastructure::store::InMemoryInvitationStore;
use invitation_server::presentation::http::routes;
use invitation_server::startup::AppState;

/// Notifier stand-in that records every send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<SentMessage>>,
}

/// A single captured outbound message.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub phone_number: String,
    pub body: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(
        &self,
        phone_number: &str,
        body: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), NotifierError> {
        self.sent.lock().push(SentMessage {
            phone_number: phone_number.to_string(),
            body: body.to_string(),
            expires_at,
        });
        Ok(())
    }
}

/// Test application wired with an in-memory store and a recording notifier.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryInvitationStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let store = Arc::new(InMemoryInvitationStore::new());
        let notifier = Arc::new(RecordingNotifier::default());

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            cors: CorsSettings {
                allowed_origins: Vec::new(),
            },
            environment: "test".to_string(),
        };

        let state = AppState {
            store: Arc::clone(&store),
            notifier: notifier.clone(),
            settings: Arc::new(settings),
        };

        Self {
            router: routes::create_router(state),
            store,
            notifier,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> axum::response::Response {
        self.post_raw(uri, body.to_string()).await
    }

    /// Make a POST request with a raw body (for malformed-JSON cases)
    pub async fn post_raw(&self, uri: &str, body: String) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Decode a response body as JSON
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Generate a test phone number
pub fn fake_phone() -> String {
    PhoneNumber().fake()
}

/// Let spawned notification tasks run to completion.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}
