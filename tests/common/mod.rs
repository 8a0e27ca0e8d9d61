//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use uuid::Uuid;

use athletica::application::dto::SignInForm;
use athletica::application::store::Store;
use athletica::config::{
    ContactSettings, CorsSettings, MockApiSettings, ServerSettings, Settings,
};
use athletica::infrastructure::mock_api::{seed, MockApiService};
use athletica::startup::{build_router, AppState};

pub const ADMIN_PASSWORD: &str = "athletica-secret";

/// Contact server over a fresh submissions file
pub struct TestApp {
    pub server: TestServer,
    pub submissions_file: PathBuf,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_admin_password(Some(ADMIN_PASSWORD))
    }

    pub fn with_admin_password(password: Option<&str>) -> Self {
        let submissions_file = std::env::temp_dir()
            .join(format!("athletica-test-{}", Uuid::new_v4()))
            .join("submissions.json");
        let settings = test_settings(submissions_file.clone(), password);
        let server = TestServer::new(build_router(AppState::from_settings(settings)))
            .expect("Failed to start test server");

        Self {
            server,
            submissions_file,
        }
    }
}

pub fn test_settings(submissions_file: PathBuf, admin_password: Option<&str>) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        contact: ContactSettings {
            site_dir: std::env::temp_dir().join("athletica-missing-site"),
            submissions_file,
            admin_password: admin_password.map(String::from),
        },
        cors: CorsSettings {
            allowed_origins: Vec::new(),
        },
        mock_api: MockApiSettings::default(),
        environment: "test".into(),
    }
}

/// Store over a seeded, zero-latency mock API
pub fn instant_store() -> Store {
    Store::new(Arc::new(MockApiService::instant()))
}

/// Store already signed in with the seeded account
pub async fn signed_in_store() -> Store {
    let store = instant_store();
    store
        .sign_in(seed_credentials())
        .await
        .expect("seeded sign-in should succeed");
    store
}

pub fn seed_credentials() -> SignInForm {
    SignInForm::new(seed::SEED_EMAIL, seed::SEED_PASSWORD)
}
