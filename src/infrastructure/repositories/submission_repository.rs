//! JSON-file submission repository.
//!
//! Submissions are kept as one JSON array on disk, rewritten on every append.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::{ContactSubmission, SubmissionError, SubmissionRepository};

/// Submission repository backed by a JSON array file.
pub struct JsonFileSubmissionRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl JsonFileSubmissionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Stored submissions in file order. A missing or corrupt file reads as empty.
    async fn load(&self) -> Result<Vec<ContactSubmission>, SubmissionError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(submissions) => Ok(submissions),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Submissions file is not a valid JSON array, starting fresh"
                );
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl SubmissionRepository for JsonFileSubmissionRepository {
    async fn append(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        let _guard = self.write_lock.lock().await;

        let mut submissions = self.load().await?;
        submissions.push(submission.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let body = serde_json::to_vec_pretty(&submissions)?;
        fs::write(&self.path, body).await?;

        tracing::debug!(total = submissions.len(), "Submission stored");
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactSubmission>, SubmissionError> {
        let mut submissions = self.load().await?;
        submissions.reverse();
        Ok(submissions)
    }
}
