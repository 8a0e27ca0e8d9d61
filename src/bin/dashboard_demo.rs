//! Dashboard walkthrough against the in-memory coaching API.
//!
//! Signs in with the seeded account, loads the dashboard and logs the
//! statistics the coach would see.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::info;

use athletica::application::dto::{ClientForm, SignInForm};
use athletica::application::store::Store;
use athletica::config::Settings;
use athletica::domain::services::ClientFilter;
use athletica::infrastructure::mock_api::{seed, MockApiService};

#[tokio::main]
async fn main() -> Result<()> {
    athletica::telemetry::init_tracing();

    let settings = Settings::load()?;
    let service = MockApiService::new(settings.mock_api.latency);
    let store = Store::new(Arc::new(service));

    let auth = store
        .sign_in(SignInForm::new(seed::SEED_EMAIL, seed::SEED_PASSWORD))
        .await
        .map_err(|e| anyhow!("sign-in failed: {}", e))?;
    info!(coach = %auth.coach.name, tier = %auth.coach.subscription_tier, "Signed in");

    let (clients, plans) = store.load_dashboard().await;
    clients.map_err(|e| anyhow!("loading clients failed: {}", e))?;
    plans.map_err(|e| anyhow!("loading plans failed: {}", e))?;

    let stats = store.select(|s| *s.coach.stats());
    info!(
        total_clients = stats.total_clients,
        active_clients = stats.active_clients,
        pending_clients = stats.pending_clients,
        average_progress = stats.average_subscription_progress,
        total_plans = stats.total_plans,
        active_plans = stats.active_plans,
        total_revenue = stats.total_revenue,
        "Dashboard loaded"
    );

    let client = store
        .add_client(ClientForm {
            name: "Demo Client".into(),
            email: Some("demo@example.com".into()),
            ..ClientForm::default()
        })
        .await
        .map_err(|e| anyhow!("adding client failed: {}", e))?;
    info!(client_id = %client.id, "Client added");

    for client in store.filtered_clients(ClientFilter::Pending, "") {
        info!(name = %client.name, progress = client.subscription_progress, "Pending client");
    }

    store
        .sign_out()
        .await
        .map_err(|e| anyhow!("sign-out failed: {}", e))?;
    store.clear_data();
    info!("Signed out");

    Ok(())
}
