//! Client list filtering.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Client, ClientStatus};

/// Status filter offered on the client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientFilter {
    #[default]
    All,
    Active,
    Inactive,
    Pending,
}

impl ClientFilter {
    /// Whether a client passes the status filter.
    pub fn admits(&self, client: &Client) -> bool {
        match self {
            Self::All => true,
            Self::Active => client.status == ClientStatus::Active,
            Self::Inactive => client.status == ClientStatus::Inactive,
            Self::Pending => client.status == ClientStatus::Pending,
        }
    }

    /// Clients passing both the status filter and the search query, in order.
    pub fn apply<'a>(&self, clients: &'a [Client], query: &str) -> Vec<&'a Client> {
        clients
            .iter()
            .filter(|c| self.admits(c) && c.matches_search(query))
            .collect()
    }
}
