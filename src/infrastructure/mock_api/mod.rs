//! In-memory Coaching API
//!
//! A [`DataService`] backed by seeded collections and simulated network
//! latency. Each instance owns its own data; mutations are visible to every
//! later call on the same instance.

pub mod seed;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::application::dto::{
    AuthResponse, ImageUpload, ProfileUpdate, SignInForm, SignUpForm, SocialProvider,
    SocialSignIn,
};
use crate::application::services::{DataService, ServiceError};
use crate::config::LatencyProfile;
use crate::domain::{is_valid_progress, Client, Coach, NewClient, NewPlan, Plan};
use crate::shared::token::TokenGenerator;

/// Base URL of uploaded images.
pub const UPLOAD_BASE_URL: &str = "https://example.com/uploads";

#[derive(Debug)]
struct MockState {
    /// Registered demo account, updated by profile changes
    account: Coach,
    /// Coach of the open session
    session: Option<Coach>,
    /// Session was opened with the registered account's credentials
    session_is_account: bool,
    clients: Vec<Client>,
    plans: Vec<Plan>,
}

impl MockState {
    fn session(&self) -> Result<&Coach, ServiceError> {
        self.session.as_ref().ok_or(ServiceError::Unauthenticated)
    }

    fn session_id(&self) -> Result<String, ServiceError> {
        self.session().map(|coach| coach.id.clone())
    }
}

/// In-memory implementation of the coaching API.
pub struct MockApiService {
    state: Mutex<MockState>,
    tokens: TokenGenerator,
    latency: LatencyProfile,
}

impl MockApiService {
    /// Create a service seeded with the demo coach, three clients and two plans.
    pub fn new(latency: LatencyProfile) -> Self {
        let now = Utc::now();
        Self {
            state: Mutex::new(MockState {
                account: seed::coach(now),
                session: None,
                session_is_account: false,
                clients: seed::clients(now),
                plans: seed::plans(now),
            }),
            tokens: TokenGenerator::new(),
            latency,
        }
    }

    /// Seeded service without simulated latency.
    pub fn instant() -> Self {
        Self::new(LatencyProfile::instant())
    }

    /// Whether a session is currently open.
    pub fn is_authenticated(&self) -> bool {
        self.state.lock().session.is_some()
    }

    async fn delay(&self, ms: u64) {
        if ms > 0 {
            tokio::time::sleep(LatencyProfile::duration(ms)).await;
        }
    }

    fn open_session(&self, coach: Coach, is_account: bool) -> AuthResponse {
        let mut state = self.state.lock();
        state.session = Some(coach.clone());
        state.session_is_account = is_account;
        AuthResponse::for_coach(coach)
    }
}

/// Copy the fields present in `update` onto `coach`.
fn merge_profile(coach: &mut Coach, update: &ProfileUpdate) {
    if let Some(name) = &update.name {
        coach.name = name.clone();
    }
    if let Some(bio) = &update.bio {
        coach.bio = bio.clone();
    }
    if let Some(phone) = &update.phone {
        coach.phone = phone.clone();
    }
    if let Some(url) = &update.profile_photo_url {
        coach.profile_photo_url = Some(url.clone());
    }
    if let Some(certificates) = &update.certificates {
        coach.certificates = certificates.clone();
    }
}

/// Final path component of an uploaded file name, percent-encoded for a URL.
fn upload_url(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let mut encoded = String::with_capacity(base.len());
    for byte in base.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    format!("{}/{}", UPLOAD_BASE_URL, encoded)
}

#[async_trait]
impl DataService for MockApiService {
    async fn sign_up(&self, form: SignUpForm) -> Result<AuthResponse, ServiceError> {
        self.delay(self.latency.auth_ms).await;

        let template = {
            let state = self.state.lock();
            if form.email == state.account.email {
                return Err(ServiceError::DuplicateEmail);
            }
            state.account.clone()
        };

        let now = Utc::now();
        let coach = Coach {
            id: self.tokens.generate("coach"),
            name: form.name,
            email: form.email,
            phone: form.phone,
            profile_photo_url: None,
            created_at: now,
            last_active: Some(now),
            ..template
        };

        tracing::debug!(coach_id = %coach.id, "Coach registered");
        Ok(self.open_session(coach, false))
    }

    async fn sign_in(&self, form: SignInForm) -> Result<AuthResponse, ServiceError> {
        self.delay(self.latency.auth_ms).await;

        let coach = {
            let state = self.state.lock();
            if form.email != state.account.email || form.password != seed::SEED_PASSWORD {
                return Err(ServiceError::InvalidCredentials);
            }
            Coach {
                last_active: Some(Utc::now()),
                ..state.account.clone()
            }
        };

        Ok(self.open_session(coach, true))
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        self.delay(self.latency.sign_out_ms).await;
        let mut state = self.state.lock();
        state.session = None;
        state.session_is_account = false;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ServiceError> {
        self.delay(self.latency.forgot_password_ms).await;
        tracing::debug!(email = %email, "Password reset requested");
        Ok(())
    }

    async fn sign_in_with_social(
        &self,
        provider: SocialProvider,
        request: SocialSignIn,
    ) -> Result<AuthResponse, ServiceError> {
        self.delay(self.latency.social_ms).await;

        let account = self.state.lock().account.clone();
        let coach = Coach {
            name: request
                .name
                .unwrap_or_else(|| provider.default_name().to_string()),
            email: request
                .email
                .unwrap_or_else(|| provider.default_email().to_string()),
            profile_photo_url: request.profile_photo_url,
            last_active: Some(Utc::now()),
            ..account
        };

        tracing::debug!(provider = %provider, "Social sign-in");
        Ok(self.open_session(coach, false))
    }

    async fn get_clients(&self) -> Result<Vec<Client>, ServiceError> {
        self.delay(self.latency.read_ms).await;

        let state = self.state.lock();
        let owner = &state.session()?.id;
        Ok(state
            .clients
            .iter()
            .filter(|c| &c.coach_id == owner)
            .cloned()
            .collect())
    }

    async fn add_client(&self, client: NewClient) -> Result<Client, ServiceError> {
        self.delay(self.latency.create_ms).await;

        let mut state = self.state.lock();
        let owner = state.session_id()?;
        if !is_valid_progress(client.subscription_progress) {
            return Err(ServiceError::Validation(
                "Subscription progress must be between 0 and 1".into(),
            ));
        }

        let client = client.into_client(self.tokens.generate("client"), owner, Utc::now());
        state.clients.insert(0, client.clone());
        tracing::debug!(client_id = %client.id, "Client added");
        Ok(client)
    }

    async fn update_client(&self, client: Client) -> Result<Client, ServiceError> {
        self.delay(self.latency.update_ms).await;

        let mut state = self.state.lock();
        let owner = state.session_id()?;
        if !is_valid_progress(client.subscription_progress) {
            return Err(ServiceError::Validation(
                "Subscription progress must be between 0 and 1".into(),
            ));
        }

        let slot = state
            .clients
            .iter_mut()
            .find(|c| c.id == client.id && c.coach_id == owner)
            .ok_or_else(ServiceError::client_not_found)?;
        *slot = Client {
            coach_id: owner,
            ..client
        };
        tracing::debug!(client_id = %slot.id, "Client updated");
        Ok(slot.clone())
    }

    async fn delete_client(&self, client_id: &str) -> Result<(), ServiceError> {
        self.delay(self.latency.delete_ms).await;

        let mut state = self.state.lock();
        let owner = state.session_id()?;
        let index = state
            .clients
            .iter()
            .position(|c| c.id == client_id && c.coach_id == owner)
            .ok_or_else(ServiceError::client_not_found)?;
        state.clients.remove(index);
        tracing::debug!(client_id = %client_id, "Client deleted");
        Ok(())
    }

    async fn get_plans(&self) -> Result<Vec<Plan>, ServiceError> {
        self.delay(self.latency.read_ms).await;

        let state = self.state.lock();
        let owner = &state.session()?.id;
        Ok(state
            .plans
            .iter()
            .filter(|p| &p.coach_id == owner)
            .cloned()
            .collect())
    }

    async fn add_plan(&self, plan: NewPlan) -> Result<Plan, ServiceError> {
        self.delay(self.latency.create_ms).await;

        let mut state = self.state.lock();
        let owner = state.session_id()?;
        let plan = plan.into_plan(self.tokens.generate("plan"), owner, Utc::now());
        state.plans.insert(0, plan.clone());
        tracing::debug!(plan_id = %plan.id, "Plan added");
        Ok(plan)
    }

    async fn update_plan(&self, plan: Plan) -> Result<Plan, ServiceError> {
        self.delay(self.latency.update_ms).await;

        let mut state = self.state.lock();
        let owner = state.session_id()?;
        let slot = state
            .plans
            .iter_mut()
            .find(|p| p.id == plan.id && p.coach_id == owner)
            .ok_or_else(ServiceError::plan_not_found)?;
        *slot = Plan {
            coach_id: owner,
            updated_at: Utc::now(),
            ..plan
        };
        tracing::debug!(plan_id = %slot.id, "Plan updated");
        Ok(slot.clone())
    }

    async fn delete_plan(&self, plan_id: &str) -> Result<(), ServiceError> {
        self.delay(self.latency.delete_ms).await;

        let mut state = self.state.lock();
        let owner = state.session_id()?;
        let index = state
            .plans
            .iter()
            .position(|p| p.id == plan_id && p.coach_id == owner)
            .ok_or_else(ServiceError::plan_not_found)?;
        state.plans.remove(index);
        tracing::debug!(plan_id = %plan_id, "Plan deleted");
        Ok(())
    }

    async fn update_coach_profile(&self, update: ProfileUpdate) -> Result<Coach, ServiceError> {
        self.delay(self.latency.update_ms).await;

        let mut state = self.state.lock();
        let mut coach = state.session()?.clone();
        merge_profile(&mut coach, &update);

        if state.session_is_account {
            merge_profile(&mut state.account, &update);
        }
        state.session = Some(coach.clone());
        tracing::debug!(coach_id = %coach.id, "Coach profile updated");
        Ok(coach)
    }

    async fn upload_image(&self, file: ImageUpload) -> Result<String, ServiceError> {
        self.delay(self.latency.upload_ms).await;

        self.state.lock().session()?;
        tracing::debug!(file = %file.file_name, bytes = file.bytes.len(), "Image uploaded");
        Ok(upload_url(&file.file_name))
    }
}
