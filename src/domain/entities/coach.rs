//! Coach entity.
//!
//! One coach is attached to each authenticated session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AttributeMap;

/// Subscription tier of a coach account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Basic,
    Pro,
    Elite,
}

impl SubscriptionTier {
    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Elite => "elite",
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fitness coach account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: String,

    pub name: String,

    pub email: String,

    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,

    pub bio: String,

    /// Certificate titles shown on the profile
    #[serde(default)]
    pub certificates: Vec<String>,

    #[serde(default)]
    pub subscription_tier: SubscriptionTier,

    /// Maximum number of clients the tier allows
    pub client_limit: u32,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,

    /// Free-form preferences
    #[serde(default)]
    pub settings: AttributeMap,
}

impl Default for Coach {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            profile_photo_url: None,
            bio: String::new(),
            certificates: Vec::new(),
            subscription_tier: SubscriptionTier::default(),
            client_limit: 0,
            created_at: Utc::now(),
            last_active: None,
            settings: AttributeMap::new(),
        }
    }
}
