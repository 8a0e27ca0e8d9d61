//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::config::Settings;
use crate::domain::SubmissionRepository;
use crate::infrastructure::repositories::JsonFileSubmissionRepository;
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<dyn SubmissionRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by the JSON submissions file named in `settings`.
    pub fn from_settings(settings: Settings) -> Self {
        let submissions = JsonFileSubmissionRepository::new(&settings.contact.submissions_file);
        Self {
            submissions: Arc::new(submissions),
            settings: Arc::new(settings),
        }
    }
}

/// Full router with tracing, compression and CORS layers applied.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);
    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(create_trace_layer())
            .layer(CompressionLayer::new())
            .layer(cors),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        if settings.contact.admin_password.is_none() {
            tracing::warn!("No admin password configured, /admin is disabled");
        }
        tracing::info!(
            path = %settings.contact.submissions_file.display(),
            "Storing contact submissions"
        );

        let addr = settings.server_addr();
        let router = build_router(AppState::from_settings(settings));

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
