//! Authentication flows through the store

use athletica::application::dto::{
    ForgotPasswordForm, ProfileUpdate, SignInForm, SignUpForm, SocialSignIn,
};
use athletica::application::store::{AuthOperation, RequestStatus};
use pretty_assertions::{assert_eq, assert_ne};
use test_case::test_case;

use crate::common::{instant_store, seed_credentials, signed_in_store};

#[tokio::test]
async fn test_seeded_sign_in_authenticates() {
    let store = instant_store();

    let response = store.sign_in(seed_credentials()).await.unwrap();

    let auth = store.state().auth;
    assert!(auth.is_authenticated);
    assert!(!auth.is_loading);
    assert_eq!(auth.error, None);
    assert_eq!(auth.coach.as_ref().map(|c| c.id.as_str()), Some("mock_coach_123"));
    assert_eq!(response.coach.email, "test@coach.com");
}

#[test_case("test@coach.com", "wrong" ; "wrong password")]
#[test_case("other@coach.com", "password" ; "unknown email")]
#[test_case("", "" ; "empty credentials")]
#[test_case("TEST@coach.com", "password" ; "email is case sensitive")]
#[tokio::test]
async fn test_other_credentials_are_rejected(email: &str, password: &str) {
    let store = instant_store();

    let err = store.sign_in(SignInForm::new(email, password)).await.unwrap_err();

    assert_eq!(err.message, "Invalid email or password");
    let auth = store.state().auth;
    assert!(!auth.is_authenticated);
    assert_eq!(auth.error.as_deref(), Some("Invalid email or password"));
    assert_eq!(auth.status(AuthOperation::SignIn), RequestStatus::Rejected);
}

#[tokio::test]
async fn test_sign_up_with_seeded_email_is_duplicate() {
    let store = instant_store();

    let err = store
        .sign_up(SignUpForm {
            name: "Copy Cat".into(),
            email: "test@coach.com".into(),
            phone: "+1234567890".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message, "Email already exists");
    assert!(!store.state().auth.is_authenticated);
}

#[tokio::test]
async fn test_sign_out_clears_session() {
    let store = signed_in_store().await;

    store.sign_out().await.unwrap();

    let auth = store.state().auth;
    assert!(!auth.is_authenticated);
    assert!(auth.coach.is_none());
    let err = store.load_clients().await.unwrap_err();
    assert_eq!(err.message, "Not authenticated");
}

#[tokio::test]
async fn test_google_sign_in_uses_provided_profile() {
    let store = instant_store();

    store
        .sign_in_with_google(SocialSignIn {
            token: "google-token".into(),
            name: Some("Layla".into()),
            email: Some("layla@example.com".into()),
            profile_photo_url: None,
        })
        .await
        .unwrap();

    let coach = store.state().auth.coach.unwrap();
    assert_eq!(coach.name, "Layla");
    assert_eq!(coach.email, "layla@example.com");
}

#[tokio::test]
async fn test_forgot_password_rejects_invalid_email_without_calling_service() {
    let store = instant_store();

    let err = store
        .forgot_password(ForgotPasswordForm {
            email: "not-an-email".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message, "Please enter a valid email");
    assert_eq!(
        store.select(|s| s.auth.status(AuthOperation::ForgotPassword)),
        RequestStatus::Rejected
    );
}

#[tokio::test]
async fn test_update_profile_replaces_coach() {
    let store = signed_in_store().await;

    store
        .update_profile(ProfileUpdate {
            name: Some("Coach Carter".into()),
            certificates: Some(vec!["NASM CPT".into()]),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();

    let coach = store.state().auth.coach.unwrap();
    assert_eq!(coach.name, "Coach Carter");
    assert_eq!(coach.certificates, vec!["NASM CPT".to_string()]);
    assert_eq!(coach.email, "test@coach.com");
}

#[tokio::test]
async fn test_social_profile_update_leaves_seeded_account_usable() {
    let store = instant_store();
    store
        .sign_in_with_google(SocialSignIn::with_token("google-token"))
        .await
        .unwrap();
    store
        .update_profile(ProfileUpdate {
            bio: Some("Trail running".into()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();
    store.sign_out().await.unwrap();

    let response = store.sign_in(seed_credentials()).await.unwrap();

    assert_eq!(response.coach.email, "test@coach.com");
    assert_eq!(response.coach.name, "Test Coach");
    assert_eq!(response.coach.bio, "Test coach for frontend development");
    assert!(store.state().auth.is_authenticated);
}

#[tokio::test]
async fn test_sign_up_email_differing_in_case_is_a_new_account() {
    let store = instant_store();

    let response = store
        .sign_up(SignUpForm {
            name: "Shouting Coach".into(),
            email: "TEST@coach.com".into(),
            phone: "+1234567890".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.coach.email, "TEST@coach.com");
    assert_ne!(response.coach.id, "mock_coach_123");
}
