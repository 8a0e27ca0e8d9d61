//! Request DTOs
//!
//! Forms submitted by dashboard screens and the marketing site.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{AttributeMap, ClientStatus, NewClient, NewPlan};

/// Sign-in credentials.
///
/// Not validated up front: any pair other than the registered one is simply
/// rejected by the data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Coach registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Password reset request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordForm {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
}

/// Identity provider used for social sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Facebook,
    Apple,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Apple => "apple",
        }
    }

    /// Display name used when the provider returns none.
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Google => "Google User",
            Self::Facebook => "Facebook User",
            Self::Apple => "Apple User",
        }
    }

    /// Email used when the provider returns none.
    pub fn default_email(&self) -> &'static str {
        match self {
            Self::Google => "google@example.com",
            Self::Facebook => "facebook@example.com",
            Self::Apple => "apple@example.com",
        }
    }
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token and optional profile returned by a social identity provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSignIn {
    /// Provider token (not verified by the mock service)
    pub token: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_photo_url: Option<String>,
}

impl SocialSignIn {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }
}

/// New client form from the clients screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email"))]
    pub email: Option<String>,

    pub phone: Option<String>,

    pub goals: Option<AttributeMap>,

    pub stats: Option<AttributeMap>,
}

impl ClientForm {
    /// New clients start pending, with no progress and no sessions.
    pub fn into_new_client(self) -> NewClient {
        NewClient {
            name: self.name,
            profile_photo_url: None,
            status: ClientStatus::Pending,
            subscription_progress: 0.0,
            last_session: None,
            goals: self.goals.unwrap_or_default(),
            stats: self.stats.unwrap_or_default(),
            session_history: Vec::new(),
            phone: self.phone,
            email: self.email,
        }
    }
}

/// New plan form from the plans screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlanForm {
    #[validate(length(min = 1, message = "Plan name is required"))]
    pub name: String,

    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 1, message = "Duration must be at least 1 day"))]
    pub duration: u32,

    #[serde(default)]
    pub features: Vec<String>,
}

impl PlanForm {
    /// New plans start active with no revenue.
    pub fn into_new_plan(self) -> NewPlan {
        NewPlan {
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            features: self.features,
            is_active: true,
            revenue: 0.0,
        }
    }
}

/// Partial coach profile update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub profile_photo_url: Option<String>,
    pub certificates: Option<Vec<String>>,
}

/// Image file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Contact form body posted by the marketing site.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}
