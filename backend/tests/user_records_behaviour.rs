//! Behavioural tests for user records served by the in-memory store.
use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::json;
use usr_backend::domain::ports::{RoleRepository, UserRecordRepository, UserRecordRepositoryError};
use usr_backend::domain::{
    RoleName, SampleDataSeeder, UserRecord, UserRecordService, UserRecordServiceError,
    UserValidationError,
};
use usr_backend::outbound::persistence::InMemoryUserStore;

type Service = UserRecordService<InMemoryUserStore, InMemoryUserStore>;

#[fixture]
fn store() -> Arc<InMemoryUserStore> {
    Arc::new(InMemoryUserStore::new())
}

fn service(store: &Arc<InMemoryUserStore>) -> Service {
    UserRecordService::new(Arc::clone(store), Arc::clone(store))
}

fn role(raw: &str) -> RoleName {
    RoleName::new(raw).expect("valid role name")
}

#[rstest]
#[tokio::test]
async fn registration_enforces_unique_emails(store: Arc<InMemoryUserStore>) {
    let service = service(&store);
    let ada = UserRecord::new("ada@example.com", "engine", "Ada Lovelace", 0.0, 0.0, 0);
    let stored = service.register(ada).await.expect("first registration");
    assert!(stored.id().is_some());

    let twin = UserRecord::new("ada@example.com", "engine2", "Ada Byron", 0.0, 0.0, 0);
    let error = service.register(twin).await.expect_err("duplicate email");

    assert_eq!(
        error,
        UserRecordServiceError::Records(UserRecordRepositoryError::email_taken(
            "ada@example.com"
        ))
    );
}

#[rstest]
#[tokio::test]
async fn invalid_records_never_reach_storage(store: Arc<InMemoryUserStore>) {
    let service = service(&store);
    let nameless = UserRecord::new("ada@example.com", "engine", "A", 0.0, 0.0, 0);

    let error = service.register(nameless).await.expect_err("short name");

    assert_eq!(
        error,
        UserRecordServiceError::Validation(UserValidationError::NameTooShort { min: 2 })
    );
    assert!(UserRecordRepository::list(store.as_ref())
        .await
        .expect("list")
        .is_empty());
}

#[rstest]
#[tokio::test]
async fn roles_and_stats_survive_storage(store: Arc<InMemoryUserStore>) {
    store.create(role("ROLE_USER")).await.expect("create role");
    let service = service(&store);
    let [edison, ..] = UserRecord::sample_records();
    let id = service
        .register(edison)
        .await
        .expect("registration")
        .id()
        .expect("assigned id");

    service
        .assign_role(id, &role("ROLE_USER"))
        .await
        .expect("role granted");
    service
        .assign_role(id, &role("ROLE_USER"))
        .await
        .expect("repeat grant is harmless");
    service
        .record_daily_metric(id, "2022-11-13", "calories", json!(2200))
        .await
        .expect("metric recorded");

    let view = service.summary(id).await.expect("summary");
    assert_eq!(view.roles, ["ROLE_USER"]);
    assert_eq!(view.stats.metric("2022-11-13", "calories"), Some(&json!(2200)));
    assert_eq!(view.average_score, 0.0);
}

#[rstest]
#[tokio::test]
async fn unknown_roles_are_reported(store: Arc<InMemoryUserStore>) {
    let service = service(&store);
    let [edison, ..] = UserRecord::sample_records();
    let id = service
        .register(edison)
        .await
        .expect("registration")
        .id()
        .expect("assigned id");

    let error = service
        .assign_role(id, &role("ROLE_GHOST"))
        .await
        .expect_err("role missing");

    assert_eq!(
        error,
        UserRecordServiceError::RoleNotFound {
            name: "ROLE_GHOST".to_owned()
        }
    );
}

#[rstest]
#[tokio::test]
async fn seeding_twice_stores_each_sample_once(store: Arc<InMemoryUserStore>) {
    let seeder = SampleDataSeeder::new(Arc::clone(&store));
    let first = seeder.seed().await.expect("first seeding");
    let second = seeder.seed().await.expect("second seeding");

    assert_eq!(first.inserted.len(), 3);
    assert!(second.already_seeded());

    let averages: Vec<f64> = UserRecordRepository::list(store.as_ref())
        .await
        .expect("list")
        .iter()
        .map(UserRecord::average_score)
        .collect();
    assert_eq!(averages, [0.0, 0.0, 0.0]);
}

#[rstest]
#[tokio::test]
async fn averages_above_the_threshold_are_reported(store: Arc<InMemoryUserStore>) {
    let service = service(&store);
    let rookie = UserRecord::new("grace@example.com", "cobol", "Grace Hopper", 0.0, 0.0, 0);
    let id = service
        .register(rookie)
        .await
        .expect("registration")
        .id()
        .expect("assigned id");

    service.record_game(id, 150.0).await.expect("first game");
    let stored = service.record_game(id, 130.0).await.expect("second game");

    assert_eq!(stored.high_score(), 150.0);
    assert_eq!(stored.average_score(), 140.0);

    let lowered = service.record_game(id, 10.0).await.expect("third game");
    assert_eq!(lowered.average_score(), 0.0);
}
