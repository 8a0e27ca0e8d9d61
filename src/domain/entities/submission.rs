//! Contact-form submission entity and repository trait.
//!
//! Submissions come from the marketing site's contact form.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors raised by submission storage.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Submission encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub subject: String,

    pub message: String,

    /// Server receive time
    pub timestamp: DateTime<Utc>,
}

impl ContactSubmission {
    /// Create a submission stamped with the current time.
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            subject,
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Repository trait for contact submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Append a submission.
    async fn append(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;

    /// All submissions, newest first.
    async fn list_newest_first(&self) -> Result<Vec<ContactSubmission>, SubmissionError>;
}
