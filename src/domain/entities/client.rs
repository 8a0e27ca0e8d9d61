//! Client entity and its training sessions.
//!
//! Every client belongs to exactly one coach through `coach_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AttributeMap;

/// Client lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
    #[default]
    New,
}

impl ClientStatus {
    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::New => "new",
        }
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded training session. Never addressed outside its client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,

    pub name: String,

    /// Free-text tag such as "strength" or "cardio"
    #[serde(rename = "type")]
    pub session_type: String,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub data: AttributeMap,
}

/// A coached client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,

    /// Owning coach
    pub coach_id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,

    #[serde(default)]
    pub status: ClientStatus,

    /// Ratio of the subscription completed, within `[0, 1]`
    pub subscription_progress: f64,

    pub joined_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_session: Option<DateTime<Utc>>,

    #[serde(default)]
    pub goals: AttributeMap,

    #[serde(default)]
    pub stats: AttributeMap,

    /// Append-only, oldest first
    #[serde(default)]
    pub session_history: Vec<Session>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Client {
    /// Case-insensitive match of `query` against name and email.
    ///
    /// An empty query matches every client.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(&needle))
    }
}

/// Client fields supplied by the caller; the service assigns id, owner and join time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,

    #[serde(default)]
    pub status: ClientStatus,

    pub subscription_progress: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_session: Option<DateTime<Utc>>,

    #[serde(default)]
    pub goals: AttributeMap,

    #[serde(default)]
    pub stats: AttributeMap,

    #[serde(default)]
    pub session_history: Vec<Session>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewClient {
    /// Materialize the record with service-assigned fields.
    pub fn into_client(self, id: String, coach_id: String, joined_at: DateTime<Utc>) -> Client {
        Client {
            id,
            coach_id,
            name: self.name,
            profile_photo_url: self.profile_photo_url,
            status: self.status,
            subscription_progress: self.subscription_progress,
            joined_at,
            last_session: self.last_session,
            goals: self.goals,
            stats: self.stats,
            session_history: self.session_history,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Whether `progress` is a valid subscription ratio.
pub fn is_valid_progress(progress: f64) -> bool {
    (0.0..=1.0).contains(&progress)
}
