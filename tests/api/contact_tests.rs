//! Contact Form API Tests

use axum::http::StatusCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

use athletica::domain::ContactSubmission;
use athletica::infrastructure::metrics::CONTACT_SUBMISSIONS_TOTAL;

use crate::common::TestApp;

fn contact_body() -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    json!({
        "name": name,
        "email": email,
        "subject": "Coaching",
        "message": "I would like to join the program."
    })
}

#[tokio::test]
async fn test_submit_acknowledges_and_persists() {
    let app = TestApp::new();
    let body = contact_body();

    let response = app.server.post("/submit").json(&body).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true, "message": "Message received" }));

    let stored: Vec<ContactSubmission> =
        serde_json::from_slice(&tokio::fs::read(&app.submissions_file).await.unwrap()).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, body["name"].as_str().unwrap());
    assert_eq!(stored[0].subject, "Coaching");
}

#[tokio::test]
async fn test_submit_appends_to_existing_file() {
    let app = TestApp::new();

    app.server.post("/submit").json(&contact_body()).await.assert_status_ok();
    app.server.post("/submit").json(&contact_body()).await.assert_status_ok();

    let stored: Vec<ContactSubmission> =
        serde_json::from_slice(&tokio::fs::read(&app.submissions_file).await.unwrap()).unwrap();
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_submit_without_subject() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/submit")
        .json(&json!({ "name": "Jane", "email": "jane@example.com", "message": "Hi" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_submit_rejects_invalid_email() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/submit")
        .json(&json!({ "name": "Jane", "email": "nope", "message": "Hi" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "email: Invalid email format");
    assert!(!app.submissions_file.exists());
}

#[tokio::test]
async fn test_submit_rejects_malformed_body() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/submit")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejected_submissions_are_counted_as_invalid() {
    let app = TestApp::new();
    let invalid = CONTACT_SUBMISSIONS_TOTAL.with_label_values(&["invalid"]);
    let before = invalid.get();

    app.server
        .post("/submit")
        .json(&json!({ "name": "", "email": "jane@example.com", "message": "Hi" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .post("/submit")
        .content_type("application/json")
        .text("not json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(invalid.get() >= before + 2);
    let metrics = app.server.get("/metrics").await.text();
    assert!(metrics.contains("athletica_contact_submissions_total{outcome=\"invalid\"}"));
}
