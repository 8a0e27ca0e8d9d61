//! Application settings and configuration structures.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Contact form and admin page
    pub contact: ContactSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Mock data service behavior
    pub mock_api: MockApiSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Marketing-site contact form configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    /// Directory with the static marketing site (index.html, assets)
    pub site_dir: PathBuf,

    /// JSON file the submissions are appended to
    pub submissions_file: PathBuf,

    /// Password for the `/admin` listing; the page is locked when unset
    pub admin_password: Option<String>,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Mock data service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MockApiSettings {
    /// Simulated latency per operation family
    #[serde(default)]
    pub latency: LatencyProfile,
}

/// Simulated latency per operation family, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    /// Sign-in and sign-up
    pub auth_ms: u64,
    pub sign_out_ms: u64,
    /// Social sign-in
    pub social_ms: u64,
    pub forgot_password_ms: u64,
    /// `get_clients` / `get_plans`
    pub read_ms: u64,
    pub create_ms: u64,
    /// Record and profile updates
    pub update_ms: u64,
    pub delete_ms: u64,
    pub upload_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            auth_ms: 800,
            sign_out_ms: 300,
            social_ms: 1000,
            forgot_password_ms: 1000,
            read_ms: 500,
            create_ms: 800,
            update_ms: 600,
            delete_ms: 500,
            upload_ms: 2000,
        }
    }
}

impl LatencyProfile {
    /// No simulated latency at all.
    pub fn instant() -> Self {
        Self {
            auth_ms: 0,
            sign_out_ms: 0,
            social_ms: 0,
            forgot_password_ms: 0,
            read_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            upload_ms: 0,
        }
    }

    /// Convert a millisecond setting into a `Duration`.
    pub fn duration(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }
}

/// Minimum required length for the admin password
pub const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a configured admin password is too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());
        let latency = LatencyProfile::default();

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("contact.site_dir", "athletica-site")?
            .set_default("contact.submissions_file", "data/submissions.json")?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("mock_api.latency.auth_ms", latency.auth_ms)?
            .set_default("mock_api.latency.sign_out_ms", latency.sign_out_ms)?
            .set_default("mock_api.latency.social_ms", latency.social_ms)?
            .set_default("mock_api.latency.forgot_password_ms", latency.forgot_password_ms)?
            .set_default("mock_api.latency.read_ms", latency.read_ms)?
            .set_default("mock_api.latency.create_ms", latency.create_ms)?
            .set_default("mock_api.latency.update_ms", latency.update_ms)?
            .set_default("mock_api.latency.delete_ms", latency.delete_ms)?
            .set_default("mock_api.latency.upload_ms", latency.upload_ms)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option(
                "contact.admin_password",
                std::env::var("ADMIN_PASSWORD").ok(),
            )?
            .set_override_option(
                "contact.submissions_file",
                std::env::var("SUBMISSIONS_FILE").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate())
    }

    /// Reject settings that would leave the admin page weakly protected.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if let Some(password) = &self.contact.admin_password {
            if password.len() < MIN_ADMIN_PASSWORD_LENGTH {
                return Err(ConfigError::Message(format!(
                    "Admin password must be at least {} characters. Current length: {}",
                    MIN_ADMIN_PASSWORD_LENGTH,
                    password.len()
                )));
            }
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
