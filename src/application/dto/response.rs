//! Response DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Coach;

/// Result of a successful authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub coach: Coach,

    /// Session token; the mock service does not issue one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthResponse {
    pub fn for_coach(coach: Coach) -> Self {
        Self { coach, token: None }
    }
}

/// Acknowledgement of a contact-form submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

impl SubmitResponse {
    pub fn received() -> Self {
        Self {
            success: true,
            message: "Message received".into(),
        }
    }
}
