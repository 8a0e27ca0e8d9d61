//! Seed data for the in-memory coaching API.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{text_attributes, AttributeMap, Client, ClientStatus, Coach, Plan, SubscriptionTier};

pub const SEED_COACH_ID: &str = "mock_coach_123";
pub const SEED_EMAIL: &str = "test@coach.com";
pub const SEED_PASSWORD: &str = "password";

/// The registered demo account.
pub fn coach(now: DateTime<Utc>) -> Coach {
    Coach {
        id: SEED_COACH_ID.into(),
        name: "Test Coach".into(),
        email: SEED_EMAIL.into(),
        phone: "+1234567890".into(),
        profile_photo_url: None,
        bio: "Test coach for frontend development".into(),
        certificates: vec!["Test Certificate".into()],
        subscription_tier: SubscriptionTier::Pro,
        client_limit: 100,
        created_at: now,
        last_active: Some(now),
        settings: AttributeMap::new(),
    }
}

struct ClientSeed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    status: ClientStatus,
    progress: f64,
    joined_days_ago: i64,
    last_session_days_ago: Option<i64>,
    goals: &'static [(&'static str, &'static str)],
    stats: &'static [(&'static str, &'static str)],
}

const CLIENTS: &[ClientSeed] = &[
    ClientSeed {
        id: "client_1",
        name: "John Doe",
        email: "john@example.com",
        phone: "+1234567890",
        status: ClientStatus::Active,
        progress: 0.75,
        joined_days_ago: 30,
        last_session_days_ago: Some(2),
        goals: &[("weight_loss", "10 lbs"), ("muscle_gain", "5 lbs")],
        stats: &[("height", "6ft"), ("weight", "180 lbs")],
    },
    ClientSeed {
        id: "client_2",
        name: "Jane Smith",
        email: "jane@example.com",
        phone: "+0987654321",
        status: ClientStatus::Pending,
        progress: 0.25,
        joined_days_ago: 7,
        last_session_days_ago: None,
        goals: &[("strength", "Bench 200 lbs")],
        stats: &[("height", "5ft 6in"), ("weight", "140 lbs")],
    },
    ClientSeed {
        id: "client_3",
        name: "Ahmed Hassan",
        email: "ahmed@example.com",
        phone: "+201234567890",
        status: ClientStatus::Active,
        progress: 0.9,
        joined_days_ago: 60,
        last_session_days_ago: Some(1),
        goals: &[("endurance", "Run 10K"), ("flexibility", "Touch toes")],
        stats: &[("height", "5ft 10in"), ("weight", "165 lbs")],
    },
];

/// Three clients of the demo coach: two active, one pending.
pub fn clients(now: DateTime<Utc>) -> Vec<Client> {
    CLIENTS
        .iter()
        .map(|seed| Client {
            id: seed.id.into(),
            coach_id: SEED_COACH_ID.into(),
            name: seed.name.into(),
            profile_photo_url: None,
            status: seed.status,
            subscription_progress: seed.progress,
            joined_at: now - Duration::days(seed.joined_days_ago),
            last_session: seed.last_session_days_ago.map(|d| now - Duration::days(d)),
            goals: text_attributes(seed.goals.iter().copied()),
            stats: text_attributes(seed.stats.iter().copied()),
            session_history: Vec::new(),
            phone: Some(seed.phone.into()),
            email: Some(seed.email.into()),
        })
        .collect()
}

/// Two active plans of the demo coach with 3750 total revenue.
pub fn plans(now: DateTime<Utc>) -> Vec<Plan> {
    vec![
        Plan {
            id: "plan_1".into(),
            coach_id: SEED_COACH_ID.into(),
            name: "Fat Loss Program".into(),
            description: "Comprehensive weight loss program with cardio and strength training"
                .into(),
            price: 500.0,
            duration: 30,
            features: vec![
                "Personalized meal plan".into(),
                "Weekly check-ins".into(),
                "Exercise videos".into(),
            ],
            is_active: true,
            created_at: now,
            updated_at: now,
            revenue: 1500.0,
        },
        Plan {
            id: "plan_2".into(),
            coach_id: SEED_COACH_ID.into(),
            name: "Muscle Building".into(),
            description: "Strength training program for muscle mass gain".into(),
            price: 750.0,
            duration: 45,
            features: vec![
                "Progressive overload".into(),
                "Nutrition guidance".into(),
                "Form correction".into(),
            ],
            is_active: true,
            created_at: now,
            updated_at: now,
            revenue: 2250.0,
        },
    ]
}
