//! Admin Page Handler
//!
//! Read-only HTML listing of contact submissions, guarded by a shared
//! password passed as `?auth=`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::ContactSubmission;
use crate::shared::error::AppError;
use crate::shared::html::escape;
use crate::startup::AppState;

const ACCESS_DENIED_PAGE: &str = "<h1>Access Denied</h1>\
<p>Please provide the correct password in the URL: /admin?auth=PASSWORD</p>";

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub auth: Option<String>,
}

/// Render all submissions, newest first.
pub async fn admin_page(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Response, AppError> {
    let authorized = match (&state.settings.contact.admin_password, &query.auth) {
        (Some(expected), Some(given)) => expected == given,
        _ => false,
    };
    if !authorized {
        tracing::warn!("Admin page access denied");
        return Ok((StatusCode::FORBIDDEN, Html(ACCESS_DENIED_PAGE)).into_response());
    }

    let submissions = state.submissions.list_newest_first().await?;
    Ok(Html(render_submissions(&submissions)).into_response())
}

fn render_submissions(submissions: &[ContactSubmission]) -> String {
    let rows: String = submissions
        .iter()
        .map(|sub| {
            let email = escape(&sub.email);
            format!(
                "<tr><td class=\"time\">{}</td><td>{}</td>\
<td><a href=\"mailto:{email}\">{email}</a></td><td>{}</td><td>{}</td></tr>\n",
                sub.timestamp.to_rfc3339(),
                escape(&sub.name),
                escape(&sub.subject),
                escape(&sub.message),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Athletica Admin</title>
<style>
body {{ font-family: sans-serif; padding: 20px; background: #f4f4f4; }}
table {{ width: 100%; border-collapse: collapse; background: white; }}
th, td {{ padding: 12px; border-bottom: 1px solid #ddd; text-align: left; }}
th {{ background: #333; color: white; }}
.time {{ color: #666; font-size: 0.9em; }}
</style>
</head>
<body>
<h1>Admin Dashboard</h1>
<p>Total Submissions: {count}</p>
<table>
<thead><tr><th>Time</th><th>Name</th><th>Email</th><th>Subject</th><th>Message</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
        count = submissions.len(),
        rows = rows,
    )
}
