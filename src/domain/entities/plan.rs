//! Coaching plan entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subscription plan offered by a coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,

    /// Owning coach
    pub coach_id: String,

    pub name: String,

    pub description: String,

    /// Price in currency units
    pub price: f64,

    /// Length of the plan in days
    pub duration: u32,

    #[serde(default)]
    pub features: Vec<String>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Revenue accumulated by the plan so far
    #[serde(default)]
    pub revenue: f64,
}

/// Plan fields supplied by the caller; the service assigns id, owner and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlan {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
    #[serde(default)]
    pub features: Vec<String>,
    pub is_active: bool,
    #[serde(default)]
    pub revenue: f64,
}

impl NewPlan {
    /// Materialize the record with service-assigned fields.
    pub fn into_plan(self, id: String, coach_id: String, now: DateTime<Utc>) -> Plan {
        Plan {
            id,
            coach_id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            features: self.features,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
            revenue: self.revenue,
        }
    }
}
