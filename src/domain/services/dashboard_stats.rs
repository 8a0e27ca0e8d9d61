//! Dashboard aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Client, ClientStatus, Plan};

/// Aggregates shown on the dashboard home screen.
///
/// Always produced by [`DashboardStats::compute`]; a value is never patched
/// field by field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    pub active_clients: usize,
    pub pending_clients: usize,
    /// Mean subscription progress; 0 when there are no clients
    pub average_subscription_progress: f64,
    pub total_plans: usize,
    pub active_plans: usize,
    /// Sum of plan revenue (not price)
    pub total_revenue: f64,
}

impl DashboardStats {
    /// Compute every aggregate from the given collections.
    pub fn compute(clients: &[Client], plans: &[Plan]) -> Self {
        let total_clients = clients.len();
        let active_clients = count_status(clients, ClientStatus::Active);
        let pending_clients = count_status(clients, ClientStatus::Pending);

        let average_subscription_progress = if total_clients > 0 {
            clients.iter().map(|c| c.subscription_progress).sum::<f64>() / total_clients as f64
        } else {
            0.0
        };

        Self {
            total_clients,
            active_clients,
            pending_clients,
            average_subscription_progress,
            total_plans: plans.len(),
            active_plans: plans.iter().filter(|p| p.is_active).count(),
            total_revenue: plans.iter().map(|p| p.revenue).sum(),
        }
    }
}

fn count_status(clients: &[Client], status: ClientStatus) -> usize {
    clients.iter().filter(|c| c.status == status).count()
}
