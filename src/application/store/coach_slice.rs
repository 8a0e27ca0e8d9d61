//! Coach slice: clients, plans and the derived dashboard statistics.
//!
//! The collections are private so they can only change through
//! [`CoachState::reduce`], which recomputes the statistics after every
//! change.

use crate::domain::services::{ClientFilter, DashboardStats};
use crate::domain::{Client, Plan};

use super::request_log::{RequestLog, RequestStatus};

/// Async operations handled by the coach slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoachOperation {
    LoadClients,
    LoadPlans,
    AddClient,
    UpdateClient,
    DeleteClient,
    AddPlan,
    UpdatePlan,
    DeletePlan,
}

impl CoachOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadClients => "load_clients",
            Self::LoadPlans => "load_plans",
            Self::AddClient => "add_client",
            Self::UpdateClient => "update_client",
            Self::DeleteClient => "delete_client",
            Self::AddPlan => "add_plan",
            Self::UpdatePlan => "update_plan",
            Self::DeletePlan => "delete_plan",
        }
    }
}

impl std::fmt::Display for CoachOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transitions of the coach slice.
#[derive(Debug, Clone, PartialEq)]
pub enum CoachAction {
    Pending(CoachOperation),
    ClientsLoaded(Vec<Client>),
    PlansLoaded(Vec<Plan>),
    ClientAdded(Client),
    ClientUpdated(Client),
    ClientDeleted(String),
    PlanAdded(Plan),
    PlanUpdated(Plan),
    PlanDeleted(String),
    Rejected { operation: CoachOperation, message: String },
    ClearError,
    ClearData,
}

impl CoachAction {
    /// The operation a fulfilled action settles.
    fn fulfilled_operation(&self) -> Option<CoachOperation> {
        match self {
            Self::ClientsLoaded(_) => Some(CoachOperation::LoadClients),
            Self::PlansLoaded(_) => Some(CoachOperation::LoadPlans),
            Self::ClientAdded(_) => Some(CoachOperation::AddClient),
            Self::ClientUpdated(_) => Some(CoachOperation::UpdateClient),
            Self::ClientDeleted(_) => Some(CoachOperation::DeleteClient),
            Self::PlanAdded(_) => Some(CoachOperation::AddPlan),
            Self::PlanUpdated(_) => Some(CoachOperation::UpdatePlan),
            Self::PlanDeleted(_) => Some(CoachOperation::DeletePlan),
            _ => None,
        }
    }
}

/// Coach data state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachState {
    clients: Vec<Client>,
    plans: Vec<Plan>,
    is_loading: bool,
    error: Option<String>,
    stats: DashboardStats,
    requests: RequestLog<CoachOperation>,
}

impl CoachState {
    /// Clients, newest additions first.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Plans, newest additions first.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Statistics computed from the current clients and plans.
    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn status(&self, operation: CoachOperation) -> RequestStatus {
        self.requests.status(operation)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Clients matching a status filter and search query.
    pub fn filtered_clients(&self, filter: ClientFilter, query: &str) -> Vec<&Client> {
        filter.apply(&self.clients, query)
    }

    /// Apply one transition.
    pub fn reduce(&mut self, action: CoachAction) {
        if let Some(operation) = action.fulfilled_operation() {
            self.requests.finish(operation, RequestStatus::Fulfilled);
            self.is_loading = self.requests.is_busy();
            self.error = None;
        }

        match action {
            CoachAction::Pending(operation) => {
                self.requests.begin(operation);
                self.is_loading = true;
                self.error = None;
            }
            CoachAction::ClientsLoaded(clients) => {
                self.clients = clients;
                self.recompute();
            }
            CoachAction::PlansLoaded(plans) => {
                self.plans = plans;
                self.recompute();
            }
            CoachAction::ClientAdded(client) => {
                self.clients.insert(0, client);
                self.recompute();
            }
            CoachAction::ClientUpdated(client) => {
                match self.clients.iter_mut().find(|c| c.id == client.id) {
                    Some(slot) => *slot = client,
                    None => tracing::debug!(client_id = %client.id, "updated client not in local state"),
                }
                self.recompute();
            }
            CoachAction::ClientDeleted(id) => {
                self.clients.retain(|c| c.id != id);
                self.recompute();
            }
            CoachAction::PlanAdded(plan) => {
                self.plans.insert(0, plan);
                self.recompute();
            }
            CoachAction::PlanUpdated(plan) => {
                match self.plans.iter_mut().find(|p| p.id == plan.id) {
                    Some(slot) => *slot = plan,
                    None => tracing::debug!(plan_id = %plan.id, "updated plan not in local state"),
                }
                self.recompute();
            }
            CoachAction::PlanDeleted(id) => {
                self.plans.retain(|p| p.id != id);
                self.recompute();
            }
            CoachAction::Rejected { operation, message } => {
                self.requests.finish(operation, RequestStatus::Rejected);
                self.is_loading = self.requests.is_busy();
                self.error = Some(message);
            }
            CoachAction::ClearError => self.error = None,
            CoachAction::ClearData => {
                self.clients.clear();
                self.plans.clear();
                self.recompute();
            }
        }
    }

    fn recompute(&mut self) {
        self.stats = DashboardStats::compute(&self.clients, &self.plans);
    }
}
