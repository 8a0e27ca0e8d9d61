//! Dashboard data flows through the store

use athletica::application::dto::{ClientForm, PlanForm};
use athletica::application::store::{CoachOperation, RequestStatus};
use athletica::domain::services::ClientFilter;
use athletica::domain::ClientStatus;
use pretty_assertions::{assert_eq, assert_ne};

use crate::common::{seed_credentials, signed_in_store};

#[tokio::test]
async fn test_seeded_dashboard_statistics() {
    let store = signed_in_store().await;

    store.load_clients().await.unwrap();
    store.load_plans().await.unwrap();

    let stats = *store.state().coach.stats();
    assert_eq!(stats.total_clients, 3);
    assert_eq!(stats.active_clients, 2);
    assert_eq!(stats.pending_clients, 1);
    assert_eq!(stats.total_plans, 2);
    assert_eq!(stats.active_plans, 2);
    assert_eq!(stats.total_revenue, 3750.0);
    assert!((stats.average_subscription_progress - (0.75 + 0.25 + 0.9) / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_load_dashboard_loads_both_collections() {
    let store = signed_in_store().await;

    let (clients, plans) = store.load_dashboard().await;

    assert_eq!(clients.unwrap().len(), 3);
    assert_eq!(plans.unwrap().len(), 2);
    let coach = store.state().coach;
    assert!(!coach.is_loading());
    assert_eq!(coach.status(CoachOperation::LoadClients), RequestStatus::Fulfilled);
    assert_eq!(coach.status(CoachOperation::LoadPlans), RequestStatus::Fulfilled);
}

#[tokio::test]
async fn test_unauthenticated_calls_reject_without_mutation() {
    let store = signed_in_store().await;
    store.load_dashboard().await;
    let seeded = store.state().coach;
    let client = seeded.client("client_1").cloned().unwrap();
    let plan = seeded.plan("plan_1").cloned().unwrap();
    let client_ids = ids(seeded.clients().iter().map(|c| &c.id));
    let plan_ids = ids(seeded.plans().iter().map(|p| &p.id));
    store.sign_out().await.unwrap();
    store.clear_data();

    let mut renamed_client = client.clone();
    renamed_client.name = "Renamed".into();
    let mut repriced_plan = plan.clone();
    repriced_plan.revenue = 1.0;
    let errors = vec![
        store.load_clients().await.unwrap_err(),
        store.load_plans().await.unwrap_err(),
        store
            .add_client(ClientForm {
                name: "Jane".into(),
                ..ClientForm::default()
            })
            .await
            .unwrap_err(),
        store.update_client(renamed_client).await.unwrap_err(),
        store.delete_client("client_1").await.unwrap_err(),
        store
            .add_plan(PlanForm {
                name: "Sprint".into(),
                description: "Sprint block".into(),
                price: 50.0,
                duration: 7,
                features: Vec::new(),
            })
            .await
            .unwrap_err(),
        store.update_plan(repriced_plan).await.unwrap_err(),
        store.delete_plan("plan_1").await.unwrap_err(),
    ];

    assert!(errors.iter().all(|e| e.message == "Not authenticated"));
    let coach = store.state().coach;
    assert!(coach.clients().is_empty());
    assert!(coach.plans().is_empty());
    assert_eq!(coach.error(), Some("Not authenticated"));
    assert!(!coach.is_loading());

    store.sign_in(seed_credentials()).await.unwrap();
    store.load_dashboard().await;
    let coach = store.state().coach;
    assert_eq!(ids(coach.clients().iter().map(|c| &c.id)), client_ids);
    assert_eq!(ids(coach.plans().iter().map(|p| &p.id)), plan_ids);
    assert_eq!(coach.client("client_1"), Some(&client));
    assert_eq!(coach.plan("plan_1"), Some(&plan));
}

#[tokio::test]
async fn test_concurrent_add_client_keeps_both() {
    let store = signed_in_store().await;
    store.load_clients().await.unwrap();

    let (first, second) = futures::join!(
        store.add_client(ClientForm {
            name: "Nadia".into(),
            ..ClientForm::default()
        }),
        store.add_client(ClientForm {
            name: "Tariq".into(),
            ..ClientForm::default()
        }),
    );

    let (first, second) = (first.unwrap(), second.unwrap());
    assert_ne!(first.id, second.id);
    let coach = store.state().coach;
    assert!(coach.client(&first.id).is_some());
    assert!(coach.client(&second.id).is_some());
    assert_eq!(coach.clients().len(), 5);
    assert_eq!(coach.stats().total_clients, 5);
    assert!(!coach.is_loading());
    assert_eq!(coach.status(CoachOperation::AddClient), RequestStatus::Fulfilled);
}

fn ids<'a>(ids: impl Iterator<Item = &'a String>) -> Vec<String> {
    ids.cloned().collect()
}

#[tokio::test]
async fn test_add_client_prepends_and_increments_total() {
    let store = signed_in_store().await;
    store.load_clients().await.unwrap();
    let before = store.state().coach.stats().total_clients;

    let added = store
        .add_client(ClientForm {
            name: "Omar Farouk".into(),
            email: Some("omar@example.com".into()),
            ..ClientForm::default()
        })
        .await
        .unwrap();

    let coach = store.state().coach;
    assert_eq!(coach.clients()[0].id, added.id);
    assert_eq!(coach.stats().total_clients, before + 1);
    assert_eq!(added.status, ClientStatus::Pending);
    assert_eq!(added.coach_id, "mock_coach_123");
}

#[tokio::test]
async fn test_delete_client_present_and_absent() {
    let store = signed_in_store().await;
    store.load_clients().await.unwrap();

    store.delete_client("client_2").await.unwrap();
    let coach = store.state().coach;
    assert_eq!(coach.clients().len(), 2);
    assert!(coach.client("client_2").is_none());
    assert_eq!(coach.stats().pending_clients, 0);

    let err = store.delete_client("client_2").await.unwrap_err();
    assert_eq!(err.message, "Client not found");
    assert_eq!(store.state().coach.clients().len(), 2);
}

#[tokio::test]
async fn test_update_client_recomputes_statistics() {
    let store = signed_in_store().await;
    store.load_clients().await.unwrap();
    let mut jane = store.state().coach.client("client_2").cloned().unwrap();
    jane.status = ClientStatus::Active;

    store.update_client(jane).await.unwrap();

    let stats = *store.state().coach.stats();
    assert_eq!(stats.active_clients, 3);
    assert_eq!(stats.pending_clients, 0);
}

#[tokio::test]
async fn test_revenue_ignores_price() {
    let store = signed_in_store().await;
    store.load_plans().await.unwrap();
    let mut plan = store.state().coach.plan("plan_1").cloned().unwrap();
    plan.price = 9999.0;

    store.update_plan(plan).await.unwrap();

    assert_eq!(store.state().coach.stats().total_revenue, 3750.0);
}

#[tokio::test]
async fn test_add_plan_validation_and_creation() {
    let store = signed_in_store().await;
    store.load_plans().await.unwrap();

    let err = store
        .add_plan(PlanForm {
            name: "Broken".into(),
            duration: 0,
            ..PlanForm::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "Duration must be at least 1 day");
    assert_eq!(store.state().coach.plans().len(), 2);

    let plan = store
        .add_plan(PlanForm {
            name: "Mobility".into(),
            description: "Daily mobility routine".into(),
            price: 120.0,
            duration: 14,
            features: vec!["Video library".into()],
        })
        .await
        .unwrap();

    let coach = store.state().coach;
    assert_eq!(coach.plans()[0].id, plan.id);
    assert_eq!(coach.stats().total_plans, 3);
    assert_eq!(coach.stats().total_revenue, 3750.0);
}

#[tokio::test]
async fn test_filtered_clients_selector() {
    let store = signed_in_store().await;
    store.load_clients().await.unwrap();

    let active: Vec<String> = store
        .filtered_clients(ClientFilter::Active, "")
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(active, vec!["John Doe".to_string(), "Ahmed Hassan".to_string()]);

    let found = store.filtered_clients(ClientFilter::All, "JANE@example");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "client_2");
}

#[tokio::test]
async fn test_clear_data_resets_statistics() {
    let store = signed_in_store().await;
    store.load_dashboard().await;

    store.clear_data();

    let coach = store.state().coach;
    assert!(coach.clients().is_empty());
    assert_eq!(coach.stats().total_revenue, 0.0);
    assert_eq!(coach.stats().average_subscription_progress, 0.0);
}
