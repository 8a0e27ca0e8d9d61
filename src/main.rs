//! # Athletica Contact Server
//!
//! Serves the marketing site, accepts contact-form submissions and renders
//! the password-protected admin listing.

use anyhow::Result;
use tracing::info;

use athletica::config::Settings;
use athletica::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    athletica::telemetry::init_tracing();

    info!("Starting Athletica contact server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
