//! Store: owns the slices and dispatches operations against the data service.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use validator::Validate;

use crate::application::dto::{
    AuthResponse, ClientForm, ForgotPasswordForm, ImageUpload, PlanForm, ProfileUpdate,
    SignInForm, SignUpForm, SocialProvider, SocialSignIn,
};
use crate::application::services::{DataService, ServiceError};
use crate::domain::services::ClientFilter;
use crate::domain::{Client, Coach, Plan};
use crate::infrastructure::metrics;
use crate::shared::validation::first_error_message;

use super::auth_slice::{AuthAction, AuthOperation, AuthState};
use super::coach_slice::{CoachAction, CoachOperation, CoachState};

/// Snapshot of the whole store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub auth: AuthState,
    pub coach: CoachState,
}

/// A dispatched operation that ended in its rejected transition.
///
/// The same message is already stored as the slice `error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Rejected {
    pub message: String,
}

/// Outcome of an async dispatch.
pub type Dispatch<T> = Result<T, Rejected>;

/// Application store.
///
/// Each transition is applied atomically and then published to every
/// subscriber. Overlapping dispatches are not serialized; results are
/// applied in completion order.
pub struct Store {
    service: Arc<dyn DataService>,
    state: watch::Sender<RootState>,
}

impl Store {
    /// Create a store with empty state bound to `service`.
    pub fn new(service: Arc<dyn DataService>) -> Self {
        let (state, _) = watch::channel(RootState::default());
        Self { service, state }
    }

    /// Clone of the current state.
    pub fn state(&self) -> RootState {
        self.state.borrow().clone()
    }

    /// Read part of the state without cloning the rest.
    pub fn select<R>(&self, f: impl FnOnce(&RootState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Receiver notified after every transition.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.subscribe()
    }

    /// Clients matching a status filter and search query.
    pub fn filtered_clients(&self, filter: ClientFilter, query: &str) -> Vec<Client> {
        self.select(|s| {
            s.coach
                .filtered_clients(filter, query)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    // ------------------------------------------------------------------
    // Auth slice
    // ------------------------------------------------------------------

    pub async fn sign_in(&self, form: SignInForm) -> Dispatch<AuthResponse> {
        let operation = AuthOperation::SignIn;
        self.run_auth(operation, self.service.sign_in(form), |resp: &AuthResponse| {
            AuthAction::Authenticated {
                operation,
                coach: resp.coach.clone(),
            }
        })
        .await
    }

    pub async fn sign_up(&self, form: SignUpForm) -> Dispatch<AuthResponse> {
        let operation = AuthOperation::SignUp;
        let service = Arc::clone(&self.service);
        let call = async move {
            validate(&form)?;
            service.sign_up(form).await
        };
        self.run_auth(operation, call, |resp: &AuthResponse| AuthAction::Authenticated {
            operation,
            coach: resp.coach.clone(),
        })
        .await
    }

    pub async fn sign_out(&self) -> Dispatch<()> {
        self.run_auth(AuthOperation::SignOut, self.service.sign_out(), |_| {
            AuthAction::SignedOut
        })
        .await
    }

    pub async fn forgot_password(&self, form: ForgotPasswordForm) -> Dispatch<()> {
        let service = Arc::clone(&self.service);
        let call = async move {
            validate(&form)?;
            service.forgot_password(&form.email).await
        };
        self.run_auth(AuthOperation::ForgotPassword, call, |_| {
            AuthAction::PasswordResetRequested
        })
        .await
    }

    pub async fn sign_in_with_google(&self, request: SocialSignIn) -> Dispatch<AuthResponse> {
        self.social_sign_in(SocialProvider::Google, request).await
    }

    pub async fn sign_in_with_facebook(&self, request: SocialSignIn) -> Dispatch<AuthResponse> {
        self.social_sign_in(SocialProvider::Facebook, request).await
    }

    pub async fn sign_in_with_apple(&self, request: SocialSignIn) -> Dispatch<AuthResponse> {
        self.social_sign_in(SocialProvider::Apple, request).await
    }

    async fn social_sign_in(
        &self,
        provider: SocialProvider,
        request: SocialSignIn,
    ) -> Dispatch<AuthResponse> {
        let operation = match provider {
            SocialProvider::Google => AuthOperation::SignInWithGoogle,
            SocialProvider::Facebook => AuthOperation::SignInWithFacebook,
            SocialProvider::Apple => AuthOperation::SignInWithApple,
        };
        self.run_auth(
            operation,
            self.service.sign_in_with_social(provider, request),
            |resp: &AuthResponse| AuthAction::Authenticated {
                operation,
                coach: resp.coach.clone(),
            },
        )
        .await
    }

    /// Merge profile fields into the signed-in coach.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Dispatch<Coach> {
        let operation = AuthOperation::UpdateProfile;
        self.run_auth(operation, self.service.update_coach_profile(update), |coach: &Coach| {
            AuthAction::CoachReplaced {
                operation,
                coach: coach.clone(),
            }
        })
        .await
    }

    /// Upload a profile photo and point the coach profile at it.
    pub async fn upload_profile_photo(&self, file: ImageUpload) -> Dispatch<Coach> {
        let operation = AuthOperation::UploadProfilePhoto;
        let service = Arc::clone(&self.service);
        let call = async move {
            let url = service.upload_image(file).await?;
            service
                .update_coach_profile(ProfileUpdate {
                    profile_photo_url: Some(url),
                    ..ProfileUpdate::default()
                })
                .await
        };
        self.run_auth(operation, call, |coach: &Coach| AuthAction::CoachReplaced {
            operation,
            coach: coach.clone(),
        })
        .await
    }

    pub fn clear_auth_error(&self) {
        self.apply_auth(AuthAction::ClearError);
    }

    /// Install a coach directly, e.g. one restored by the caller.
    pub fn set_coach(&self, coach: Coach) {
        self.apply_auth(AuthAction::SetCoach(coach));
    }

    // ------------------------------------------------------------------
    // Coach slice
    // ------------------------------------------------------------------

    pub async fn load_clients(&self) -> Dispatch<Vec<Client>> {
        self.run_coach(CoachOperation::LoadClients, self.service.get_clients(), |clients: &Vec<Client>| {
            CoachAction::ClientsLoaded(clients.clone())
        })
        .await
    }

    pub async fn load_plans(&self) -> Dispatch<Vec<Plan>> {
        self.run_coach(CoachOperation::LoadPlans, self.service.get_plans(), |plans: &Vec<Plan>| {
            CoachAction::PlansLoaded(plans.clone())
        })
        .await
    }

    /// Load clients and plans concurrently, as the dashboard does on entry.
    pub async fn load_dashboard(&self) -> (Dispatch<Vec<Client>>, Dispatch<Vec<Plan>>) {
        futures::join!(self.load_clients(), self.load_plans())
    }

    pub async fn add_client(&self, form: ClientForm) -> Dispatch<Client> {
        let service = Arc::clone(&self.service);
        let call = async move {
            validate(&form)?;
            service.add_client(form.into_new_client()).await
        };
        self.run_coach(CoachOperation::AddClient, call, |client: &Client| {
            CoachAction::ClientAdded(client.clone())
        })
        .await
    }

    pub async fn update_client(&self, client: Client) -> Dispatch<Client> {
        self.run_coach(
            CoachOperation::UpdateClient,
            self.service.update_client(client),
            |client: &Client| CoachAction::ClientUpdated(client.clone()),
        )
        .await
    }

    pub async fn delete_client(&self, client_id: &str) -> Dispatch<()> {
        let id = client_id.to_string();
        self.run_coach(
            CoachOperation::DeleteClient,
            self.service.delete_client(client_id),
            move |_| CoachAction::ClientDeleted(id),
        )
        .await
    }

    pub async fn add_plan(&self, form: PlanForm) -> Dispatch<Plan> {
        let service = Arc::clone(&self.service);
        let call = async move {
            validate(&form)?;
            service.add_plan(form.into_new_plan()).await
        };
        self.run_coach(CoachOperation::AddPlan, call, |plan: &Plan| {
            CoachAction::PlanAdded(plan.clone())
        })
        .await
    }

    pub async fn update_plan(&self, plan: Plan) -> Dispatch<Plan> {
        self.run_coach(
            CoachOperation::UpdatePlan,
            self.service.update_plan(plan),
            |plan: &Plan| CoachAction::PlanUpdated(plan.clone()),
        )
        .await
    }

    pub async fn delete_plan(&self, plan_id: &str) -> Dispatch<()> {
        let id = plan_id.to_string();
        self.run_coach(
            CoachOperation::DeletePlan,
            self.service.delete_plan(plan_id),
            move |_| CoachAction::PlanDeleted(id),
        )
        .await
    }

    pub fn clear_coach_error(&self) {
        self.apply_coach(CoachAction::ClearError);
    }

    /// Drop all clients and plans, e.g. after signing out.
    pub fn clear_data(&self) {
        self.apply_coach(CoachAction::ClearData);
    }

    // ------------------------------------------------------------------
    // Dispatch plumbing
    // ------------------------------------------------------------------

    async fn run_auth<T, Fut>(
        &self,
        operation: AuthOperation,
        call: Fut,
        fulfilled: impl FnOnce(&T) -> AuthAction,
    ) -> Dispatch<T>
    where
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        tracing::debug!(slice = "auth", operation = %operation, "dispatch pending");
        self.apply_auth(AuthAction::Pending(operation));

        match call.await {
            Ok(value) => {
                self.apply_auth(fulfilled(&value));
                tracing::debug!(slice = "auth", operation = %operation, "dispatch fulfilled");
                metrics::record_dispatch("auth", operation.as_str(), "fulfilled");
                Ok(value)
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(slice = "auth", operation = %operation, error = %message, "dispatch rejected");
                self.apply_auth(AuthAction::Rejected {
                    operation,
                    message: message.clone(),
                });
                metrics::record_dispatch("auth", operation.as_str(), "rejected");
                Err(Rejected { message })
            }
        }
    }

    async fn run_coach<T, Fut>(
        &self,
        operation: CoachOperation,
        call: Fut,
        fulfilled: impl FnOnce(&T) -> CoachAction,
    ) -> Dispatch<T>
    where
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        tracing::debug!(slice = "coach", operation = %operation, "dispatch pending");
        self.apply_coach(CoachAction::Pending(operation));

        match call.await {
            Ok(value) => {
                self.apply_coach(fulfilled(&value));
                tracing::debug!(slice = "coach", operation = %operation, "dispatch fulfilled");
                metrics::record_dispatch("coach", operation.as_str(), "fulfilled");
                Ok(value)
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(slice = "coach", operation = %operation, error = %message, "dispatch rejected");
                self.apply_coach(CoachAction::Rejected {
                    operation,
                    message: message.clone(),
                });
                metrics::record_dispatch("coach", operation.as_str(), "rejected");
                Err(Rejected { message })
            }
        }
    }

    fn apply_auth(&self, action: AuthAction) {
        self.state.send_modify(|state| state.auth.reduce(action));
    }

    fn apply_coach(&self, action: CoachAction) {
        self.state.send_modify(|state| state.coach.reduce(action));
    }
}

fn validate<T: Validate>(form: &T) -> Result<(), ServiceError> {
    form.validate()
        .map_err(|errors| ServiceError::Validation(first_error_message(&errors)))
}
