//! Invitation API Tests

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use invitation_server::domain::{Answer, Invitation, InvitationStore};

use crate::common::{fake_phone, read_json, settle, TestApp};

fn create_body(phone_number: &str) -> serde_json::Value {
    json!({
        "phone_number": phone_number,
        "message": "Join us?",
        "duration_min": 10,
    })
}

/// Seed the store directly with an invitation that expired in the past.
fn seed_expired(app: &TestApp, id: &str) {
    let created_at = Utc::now() - Duration::minutes(5);
    app.store.put(Invitation {
        id: id.to_string(),
        phone_number: fake_phone(),
        message: "Too late".to_string(),
        created_at,
        expires_at: created_at + Duration::minutes(1),
        response: None,
        responded_at: None,
    });
}

#[tokio::test]
async fn create_returns_201_with_invitation_json() {
    let app = TestApp::new();
    let phone = fake_phone();

    let response = app.post_json("/invitations", &create_body(&phone)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;

    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["phone_number"], phone);
    assert_eq!(body["message"], "Join us?");
    assert!(body.get("response").is_none());
    assert!(body.get("responded_at").is_none());

    let created_at: DateTime<Utc> = body["created_at"].as_str().unwrap().parse().unwrap();
    let expires_at: DateTime<Utc> = body["expires_at"].as_str().unwrap().parse().unwrap();
    assert_eq!(expires_at - created_at, Duration::minutes(10));
}

#[tokio::test]
async fn create_notifies_invitee() {
    let app = TestApp::new();
    let phone = fake_phone();

    app.post_json("/invitations", &create_body(&phone)).await;
    settle().await;

    let sent = app.notifier.sent.lock();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].phone_number, phone);
    assert_eq!(sent[0].body, "Join us?");
    assert!(sent[0].expires_at.is_some());
}

#[tokio::test]
async fn create_with_empty_fields_returns_400_without_storing() {
    let app = TestApp::new();

    let bodies = [
        json!({"phone_number": "", "message": "Join us?", "duration_min": 10}),
        json!({"phone_number": fake_phone(), "message": "", "duration_min": 10}),
        json!({"phone_number": fake_phone(), "message": "Join us?", "duration_min": 0}),
        json!({"phone_number": fake_phone(), "message": "Join us?", "duration_min": -3}),
    ];

    for body in bodies {
        let response = app.post_json("/invitations", &body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let app = TestApp::new();

    let response = app
        .post_raw("/invitations", "{not valid json".to_string())
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing fields are a 400 too, not an unprocessable-entity
    let response = app.post_raw("/invitations", "{}".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn respond_records_answer_then_conflicts_on_second_attempt() {
    let app = TestApp::new();

    let created = app
        .post_json("/invitations", &create_body("+15551234567"))
        .await;
    let id = read_json(created).await["id"].as_str().unwrap().to_string();

    // Uppercase input is normalized before storage.
    let response = app
        .post_json(
            &format!("/invitations/{id}/respond"),
            &json!({"response": "YES"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"status": "response recorded"}));

    let stored = app.store.get(&id).unwrap();
    assert_eq!(stored.response, Some(Answer::Yes));
    assert!(stored.responded_at.is_some());

    // The first answer is terminal.
    let second = app
        .post_json(
            &format!("/invitations/{id}/respond"),
            &json!({"response": "no"}),
        )
        .await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(app.store.get(&id).unwrap().response, Some(Answer::Yes));
}

#[tokio::test]
async fn respond_to_unknown_id_returns_404() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/invitations/does-not-exist/respond",
            &json!({"response": "yes"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn respond_to_expired_invitation_returns_410() {
    let app = TestApp::new();
    seed_expired(&app, "expired-1");

    let response = app
        .post_json(
            "/invitations/expired-1/respond",
            &json!({"response": "yes"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::GONE);
    // The rejection wrote nothing.
    assert_eq!(app.store.get("expired-1").unwrap().response, None);
}

#[tokio::test]
async fn respond_with_unrecognized_answer_returns_400() {
    let app = TestApp::new();

    let created = app
        .post_json("/invitations", &create_body(&fake_phone()))
        .await;
    let id = read_json(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .post_json(
            &format!("/invitations/{id}/respond"),
            &json!({"response": "maybe"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.get(&id).unwrap().response, None);
}

#[tokio::test]
async fn other_paths_under_invitations_return_404() {
    let app = TestApp::new();

    let response = app
        .post_json("/invitations/some-id", &json!({"response": "yes"}))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.get("/invitations/some-id/details").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
