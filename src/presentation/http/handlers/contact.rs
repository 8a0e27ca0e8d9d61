//! Contact Form Handler

use axum::{extract::State, Json};

use crate::application::dto::{ContactRequest, SubmitResponse};
use crate::domain::ContactSubmission;
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Store a contact-form message, stamped with the server time.
pub async fn submit(
    State(state): State<AppState>,
    body: Result<ValidatedJson<ContactRequest>, AppError>,
) -> Result<Json<SubmitResponse>, AppError> {
    let ValidatedJson(body) =
        body.inspect_err(|_| metrics::record_contact_submission("invalid"))?;
    let submission = ContactSubmission::new(body.name, body.email, body.subject, body.message);

    if let Err(e) = state.submissions.append(&submission).await {
        metrics::record_contact_submission("failed");
        return Err(e.into());
    }

    metrics::record_contact_submission("stored");
    tracing::info!(
        submission_id = %submission.id,
        email = %submission.email,
        "Contact submission received"
    );

    Ok(Json(SubmitResponse::received()))
}
