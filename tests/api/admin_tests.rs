//! Admin Page API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{TestApp, ADMIN_PASSWORD};

#[tokio::test]
async fn test_admin_denied_without_password() {
    let app = TestApp::new();

    let response = app.server.get("/admin").await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert!(response.text().contains("Access Denied"));
}

#[tokio::test]
async fn test_admin_denied_with_wrong_password() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/admin")
        .add_query_param("auth", "wrong-password")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_disabled_when_unconfigured() {
    let app = TestApp::with_admin_password(None);

    let response = app.server.get("/admin").add_query_param("auth", "").await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_escaped_submissions_newest_first() {
    let app = TestApp::new();
    for (name, message) in [("First", "hello"), ("Second", "<script>x</script>")] {
        app.server
            .post("/submit")
            .json(&json!({ "name": name, "email": "a@example.com", "message": message }))
            .await
            .assert_status_ok();
    }

    let response = app
        .server
        .get("/admin")
        .add_query_param("auth", ADMIN_PASSWORD)
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Total Submissions: 2"));
    assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!page.contains("<script>x</script>"));
    let first = page.find("First").unwrap();
    let second = page.find("Second").unwrap();
    assert!(second < first);
}
