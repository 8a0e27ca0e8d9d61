//! Auth slice: the signed-in coach and authentication status.

use crate::domain::Coach;

use super::request_log::{RequestLog, RequestStatus};

/// Async operations handled by the auth slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthOperation {
    SignIn,
    SignUp,
    SignOut,
    ForgotPassword,
    SignInWithGoogle,
    SignInWithFacebook,
    SignInWithApple,
    UpdateProfile,
    UploadProfilePhoto,
}

impl AuthOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
            Self::SignOut => "sign_out",
            Self::ForgotPassword => "forgot_password",
            Self::SignInWithGoogle => "sign_in_with_google",
            Self::SignInWithFacebook => "sign_in_with_facebook",
            Self::SignInWithApple => "sign_in_with_apple",
            Self::UpdateProfile => "update_profile",
            Self::UploadProfilePhoto => "upload_profile_photo",
        }
    }

    /// Operations whose failure leaves the session unauthenticated.
    pub fn is_sign_in(&self) -> bool {
        matches!(
            self,
            Self::SignIn
                | Self::SignUp
                | Self::SignInWithGoogle
                | Self::SignInWithFacebook
                | Self::SignInWithApple
        )
    }
}

impl std::fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transitions of the auth slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Pending(AuthOperation),
    /// A sign-in family operation fulfilled
    Authenticated { operation: AuthOperation, coach: Coach },
    SignedOut,
    PasswordResetRequested,
    /// Profile update or photo upload fulfilled with the new coach record
    CoachReplaced { operation: AuthOperation, coach: Coach },
    Rejected { operation: AuthOperation, message: String },
    ClearError,
    SetCoach(Coach),
}

/// Authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub coach: Option<Coach>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_authenticated: bool,
    requests: RequestLog<AuthOperation>,
}

impl AuthState {
    /// Latest status of `operation`.
    pub fn status(&self, operation: AuthOperation) -> RequestStatus {
        self.requests.status(operation)
    }

    /// Apply one transition.
    pub fn reduce(&mut self, action: AuthAction) {
        match action {
            AuthAction::Pending(operation) => {
                self.requests.begin(operation);
                self.is_loading = true;
                self.error = None;
            }
            AuthAction::Authenticated { operation, coach } => {
                self.settle(operation, RequestStatus::Fulfilled);
                self.coach = Some(coach);
                self.is_authenticated = true;
                self.error = None;
            }
            AuthAction::SignedOut => {
                self.settle(AuthOperation::SignOut, RequestStatus::Fulfilled);
                self.coach = None;
                self.is_authenticated = false;
                self.error = None;
            }
            AuthAction::PasswordResetRequested => {
                self.settle(AuthOperation::ForgotPassword, RequestStatus::Fulfilled);
                self.error = None;
            }
            AuthAction::CoachReplaced { operation, coach } => {
                self.settle(operation, RequestStatus::Fulfilled);
                self.coach = Some(coach);
                self.error = None;
            }
            AuthAction::Rejected { operation, message } => {
                self.settle(operation, RequestStatus::Rejected);
                self.error = Some(message);
                if operation.is_sign_in() {
                    self.is_authenticated = false;
                }
            }
            AuthAction::ClearError => self.error = None,
            AuthAction::SetCoach(coach) => {
                self.coach = Some(coach);
                self.is_authenticated = true;
            }
        }
    }

    fn settle(&mut self, operation: AuthOperation, status: RequestStatus) {
        self.requests.finish(operation, status);
        self.is_loading = self.requests.is_busy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn coach() -> Coach {
        Coach {
            id: "mock_coach_123".into(),
            name: "Test Coach".into(),
            email: "test@coach.com".into(),
            ..Coach::default()
        }
    }

    fn signed_in() -> AuthState {
        let mut state = AuthState::default();
        state.reduce(AuthAction::Pending(AuthOperation::SignIn));
        state.reduce(AuthAction::Authenticated {
            operation: AuthOperation::SignIn,
            coach: coach(),
        });
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AuthState::default();
        assert!(state.coach.is_none());
        assert!(!state.is_loading);
        assert!(!state.is_authenticated);
        assert_eq!(state.status(AuthOperation::SignIn), RequestStatus::Idle);
    }

    #[test]
    fn test_pending_sets_loading_and_clears_error() {
        let mut state = AuthState {
            error: Some("old".into()),
            ..AuthState::default()
        };

        state.reduce(AuthAction::Pending(AuthOperation::SignIn));

        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.status(AuthOperation::SignIn), RequestStatus::Pending);
    }

    #[test]
    fn test_authenticated_stores_coach() {
        let state = signed_in();

        assert!(!state.is_loading);
        assert!(state.is_authenticated);
        assert_eq!(state.coach, Some(coach()));
        assert_eq!(state.status(AuthOperation::SignIn), RequestStatus::Fulfilled);
    }

    #[test_case(AuthOperation::SignIn)]
    #[test_case(AuthOperation::SignUp)]
    #[test_case(AuthOperation::SignInWithGoogle)]
    #[test_case(AuthOperation::SignInWithFacebook)]
    #[test_case(AuthOperation::SignInWithApple)]
    fn test_sign_in_family_rejection_clears_authenticated(operation: AuthOperation) {
        let mut state = signed_in();
        state.reduce(AuthAction::Pending(operation));
        state.reduce(AuthAction::Rejected {
            operation,
            message: "Invalid email or password".into(),
        });

        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
        assert_eq!(state.status(operation), RequestStatus::Rejected);
    }

    #[test_case(AuthOperation::SignOut)]
    #[test_case(AuthOperation::ForgotPassword)]
    #[test_case(AuthOperation::UpdateProfile)]
    #[test_case(AuthOperation::UploadProfilePhoto)]
    fn test_other_rejections_keep_authenticated(operation: AuthOperation) {
        let mut state = signed_in();
        state.reduce(AuthAction::Pending(operation));
        state.reduce(AuthAction::Rejected {
            operation,
            message: "Not authenticated".into(),
        });

        assert!(state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Not authenticated"));
    }

    #[test]
    fn test_signed_out_clears_coach_regardless_of_prior_state() {
        let mut state = signed_in();
        state.reduce(AuthAction::SignedOut);
        assert!(state.coach.is_none());
        assert!(!state.is_authenticated);

        let mut fresh = AuthState::default();
        fresh.reduce(AuthAction::SignedOut);
        assert!(fresh.coach.is_none());
        assert!(!fresh.is_authenticated);
    }

    #[test]
    fn test_coach_replaced_swaps_whole_record() {
        let mut state = signed_in();
        let updated = Coach {
            bio: "Strength specialist".into(),
            ..coach()
        };

        state.reduce(AuthAction::Pending(AuthOperation::UpdateProfile));
        state.reduce(AuthAction::CoachReplaced {
            operation: AuthOperation::UpdateProfile,
            coach: updated.clone(),
        });

        assert_eq!(state.coach, Some(updated));
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_clear_error_and_set_coach_are_synchronous() {
        let mut state = AuthState {
            error: Some("Email already exists".into()),
            ..AuthState::default()
        };

        state.reduce(AuthAction::ClearError);
        assert!(state.error.is_none());

        state.reduce(AuthAction::SetCoach(coach()));
        assert!(state.is_authenticated);
        assert_eq!(state.coach.as_ref().map(|c| c.id.as_str()), Some("mock_coach_123"));
    }

    #[test]
    fn test_loading_stays_on_while_another_request_is_pending() {
        let mut state = AuthState::default();
        state.reduce(AuthAction::Pending(AuthOperation::UpdateProfile));
        state.reduce(AuthAction::Pending(AuthOperation::ForgotPassword));
        state.reduce(AuthAction::PasswordResetRequested);

        assert!(state.is_loading);
    }
}
