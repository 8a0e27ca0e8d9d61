//! Data Service
//!
//! The contract of the coaching API. The store is the only caller; the
//! in-memory implementation lives in `infrastructure::mock_api`.

use async_trait::async_trait;

use crate::application::dto::{
    AuthResponse, ImageUpload, ProfileUpdate, SignInForm, SignUpForm, SocialProvider,
    SocialSignIn,
};
use crate::domain::{Client, Coach, NewClient, NewPlan, Plan};

/// Failures reported by the data service.
///
/// The display text is what the store surfaces as slice `error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    pub fn client_not_found() -> Self {
        Self::NotFound { entity: "Client" }
    }

    pub fn plan_not_found() -> Self {
        Self::NotFound { entity: "Plan" }
    }
}

/// Coaching API operations.
///
/// Everything except the authentication family requires a signed-in session
/// and fails with [`ServiceError::Unauthenticated`] otherwise.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataService: Send + Sync {
    /// Register a new coach and open a session.
    async fn sign_up(&self, form: SignUpForm) -> Result<AuthResponse, ServiceError>;

    /// Open a session with email and password.
    async fn sign_in(&self, form: SignInForm) -> Result<AuthResponse, ServiceError>;

    /// Close the session. Never fails.
    async fn sign_out(&self) -> Result<(), ServiceError>;

    /// Request a password reset email.
    async fn forgot_password(&self, email: &str) -> Result<(), ServiceError>;

    /// Open a session through an identity provider.
    async fn sign_in_with_social(
        &self,
        provider: SocialProvider,
        request: SocialSignIn,
    ) -> Result<AuthResponse, ServiceError>;

    /// Snapshot of the signed-in coach's clients.
    async fn get_clients(&self) -> Result<Vec<Client>, ServiceError>;

    /// Create a client owned by the signed-in coach.
    async fn add_client(&self, client: NewClient) -> Result<Client, ServiceError>;

    /// Replace a client by id.
    async fn update_client(&self, client: Client) -> Result<Client, ServiceError>;

    async fn delete_client(&self, client_id: &str) -> Result<(), ServiceError>;

    /// Snapshot of the signed-in coach's plans.
    async fn get_plans(&self) -> Result<Vec<Plan>, ServiceError>;

    /// Create a plan owned by the signed-in coach.
    async fn add_plan(&self, plan: NewPlan) -> Result<Plan, ServiceError>;

    /// Replace a plan by id, refreshing `updated_at`.
    async fn update_plan(&self, plan: Plan) -> Result<Plan, ServiceError>;

    async fn delete_plan(&self, plan_id: &str) -> Result<(), ServiceError>;

    /// Merge the given fields into the signed-in coach.
    async fn update_coach_profile(&self, update: ProfileUpdate) -> Result<Coach, ServiceError>;

    /// Upload an image and return its public URL.
    async fn upload_image(&self, file: ImageUpload) -> Result<String, ServiceError>;
}
