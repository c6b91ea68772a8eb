//! In-memory adapter for the user record and role ports.
//!
//! Rows mirror what a relational store would hold: scalar columns, a list of
//! role ids standing in for the join table, and the stats map as a JSON
//! document. Reads rebuild the domain record and join role ids against the
//! role table so every returned record carries fully resolved roles.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{
    RoleRepository, RoleRepositoryError, UserRecordRepository, UserRecordRepositoryError,
};
use crate::domain::{Password, Role, RoleId, RoleName, UserRecord, UserRecordId};

use super::json_serializers::{daily_stats_to_json, json_to_daily_stats};

#[derive(Debug, Clone)]
struct UserRow {
    email: String,
    password: Password,
    name: String,
    high_score: f64,
    total_of_all_scores: f64,
    number_of_scores: u32,
    role_ids: Vec<RoleId>,
    stats: Value,
}

impl UserRow {
    fn from_record(record: &UserRecord) -> Result<Self, UserRecordRepositoryError> {
        let stats =
            daily_stats_to_json(record.stats()).map_err(UserRecordRepositoryError::serialization)?;
        Ok(Self {
            email: record.email().to_owned(),
            password: record.password().clone(),
            name: record.name().to_owned(),
            high_score: record.high_score(),
            total_of_all_scores: record.total_of_all_scores(),
            number_of_scores: record.number_of_scores(),
            role_ids: record.roles().iter().map(Role::id).collect(),
            stats,
        })
    }
}

#[derive(Debug, Default)]
struct StoreState {
    last_user_id: u64,
    last_role_id: u64,
    users: BTreeMap<UserRecordId, UserRow>,
    emails: HashMap<String, UserRecordId>,
    roles: BTreeMap<RoleId, Role>,
}

impl StoreState {
    fn next_user_id(&mut self) -> Result<UserRecordId, UserRecordRepositoryError> {
        self.last_user_id = self
            .last_user_id
            .checked_add(1)
            .ok_or_else(|| UserRecordRepositoryError::query("user record id space exhausted"))?;
        Ok(UserRecordId::new(self.last_user_id))
    }

    fn next_role_id(&mut self) -> Result<RoleId, RoleRepositoryError> {
        self.last_role_id = self
            .last_role_id
            .checked_add(1)
            .ok_or_else(|| RoleRepositoryError::query("role id space exhausted"))?;
        Ok(RoleId::new(self.last_role_id))
    }

    /// Rebuild a domain record, joining role ids eagerly.
    fn load(&self, id: UserRecordId, row: &UserRow) -> Result<UserRecord, UserRecordRepositoryError> {
        let stats = json_to_daily_stats(row.stats.clone())
            .map_err(UserRecordRepositoryError::serialization)?;
        let mut record = UserRecord::new(
            row.email.as_str(),
            row.password.as_str(),
            row.name.as_str(),
            row.high_score,
            row.total_of_all_scores,
            row.number_of_scores,
        )
        .with_id(id);
        // Ids with no role row are dropped; records cannot create roles.
        record.set_roles(
            row.role_ids
                .iter()
                .filter_map(|role_id| self.roles.get(role_id).cloned()),
        );
        record.set_stats(stats);
        Ok(record)
    }

    fn load_by_id(&self, id: UserRecordId) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        self.users
            .get(&id)
            .map(|row| self.load(id, row))
            .transpose()
    }

    fn ensure_email_free(
        &self,
        email: &str,
        owner: Option<UserRecordId>,
    ) -> Result<(), UserRecordRepositoryError> {
        match self.emails.get(email) {
            Some(existing) if Some(*existing) != owner => {
                Err(UserRecordRepositoryError::email_taken(email))
            }
            _ => Ok(()),
        }
    }
}

/// Process-local store implementing [`UserRecordRepository`] and
/// [`RoleRepository`].
///
/// A single write lock covers the uniqueness check and the mutation, so
/// concurrent inserts cannot both claim the same email.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: RwLock<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRecordRepository for InMemoryUserStore {
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, UserRecordRepositoryError> {
        if let Some(id) = record.id() {
            return Err(UserRecordRepositoryError::already_persisted(id));
        }
        let row = UserRow::from_record(&record)?;

        let mut state = self.state.write().await;
        state.ensure_email_free(&row.email, None)?;
        let id = state.next_user_id()?;
        let stored = state.load(id, &row)?;
        state.emails.insert(row.email.clone(), id);
        state.users.insert(id, row);
        debug!(user_id = %id, "user record inserted");
        Ok(stored)
    }

    async fn update(&self, record: UserRecord) -> Result<UserRecord, UserRecordRepositoryError> {
        let id = record.id().ok_or_else(UserRecordRepositoryError::missing_id)?;
        let row = UserRow::from_record(&record)?;

        let mut state = self.state.write().await;
        let previous_email = state
            .users
            .get(&id)
            .map(|existing| existing.email.clone())
            .ok_or_else(|| UserRecordRepositoryError::not_found(id))?;
        state.ensure_email_free(&row.email, Some(id))?;
        let stored = state.load(id, &row)?;
        if previous_email != row.email {
            state.emails.remove(&previous_email);
            state.emails.insert(row.email.clone(), id);
        }
        state.users.insert(id, row);
        debug!(user_id = %id, "user record updated");
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: UserRecordId,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        self.state.read().await.load_by_id(id)
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        let state = self.state.read().await;
        match state.emails.get(email) {
            Some(id) => state.load_by_id(*id),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<UserRecord>, UserRecordRepositoryError> {
        let state = self.state.read().await;
        state
            .users
            .iter()
            .map(|(id, row)| state.load(*id, row))
            .collect()
    }

    async fn delete(&self, id: UserRecordId) -> Result<bool, UserRecordRepositoryError> {
        let mut state = self.state.write().await;
        let Some(row) = state.users.remove(&id) else {
            return Ok(false);
        };
        state.emails.remove(&row.email);
        debug!(user_id = %id, "user record deleted");
        Ok(true)
    }
}

#[async_trait]
impl RoleRepository for InMemoryUserStore {
    async fn create(&self, name: RoleName) -> Result<Role, RoleRepositoryError> {
        let mut state = self.state.write().await;
        if state.roles.values().any(|role| role.name() == &name) {
            return Err(RoleRepositoryError::duplicate_name(name.to_string()));
        }
        let id = state.next_role_id()?;
        let role = Role::new(id, name);
        state.roles.insert(id, role.clone());
        Ok(role)
    }

    async fn find_by_name(&self, name: &RoleName) -> Result<Option<Role>, RoleRepositoryError> {
        let state = self.state.read().await;
        Ok(state.roles.values().find(|role| role.name() == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Role>, RoleRepositoryError> {
        Ok(self.state.read().await.roles.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    //! Behavioural coverage for the in-memory store.

    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use std::sync::Arc;

    #[fixture]
    fn store() -> InMemoryUserStore {
        InMemoryUserStore::new()
    }

    fn sample(index: usize) -> UserRecord {
        UserRecord::sample_records()
            .into_iter()
            .nth(index)
            .expect("sample index in range")
    }

    fn role_name(raw: &str) -> RoleName {
        RoleName::new(raw).expect("valid role name")
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_sequential_ids(store: InMemoryUserStore) {
        let first = store.insert(sample(0)).await.expect("insert first");
        let second = store.insert(sample(1)).await.expect("insert second");

        assert_eq!(first.id(), Some(UserRecordId::new(1)));
        assert_eq!(second.id(), Some(UserRecordId::new(2)));
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_duplicate_emails(store: InMemoryUserStore) {
        store.insert(sample(0)).await.expect("insert first");
        let clash = UserRecord::new("toby@gmail.com", "other", "Other Toby", 0.0, 0.0, 0);

        let error = store.insert(clash).await.expect_err("duplicate email");

        assert_eq!(error, UserRecordRepositoryError::email_taken("toby@gmail.com"));
        assert_eq!(UserRecordRepository::list(&store).await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_claim_an_email_once() {
        const ATTEMPTS: usize = 16;
        let store = Arc::new(InMemoryUserStore::new());

        let handles: Vec<_> = (0..ATTEMPTS)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let record =
                        UserRecord::new("race@example.com", "pw", format!("Racer {n}"), 0.0, 0.0, 0);
                    store.insert(record).await
                })
            })
            .collect();

        let mut inserted = 0;
        let mut taken = 0;
        for handle in handles {
            match handle.await.expect("insert task completes") {
                Ok(_) => inserted += 1,
                Err(UserRecordRepositoryError::EmailTaken { email }) => {
                    assert_eq!(email, "race@example.com");
                    taken += 1;
                }
                Err(other) => panic!("unexpected insert failure: {other}"),
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(taken, ATTEMPTS - 1);
        assert_eq!(
            UserRecordRepository::list(store.as_ref())
                .await
                .expect("list")
                .len(),
            1
        );
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_records_with_ids(store: InMemoryUserStore) {
        let record = sample(0).with_id(UserRecordId::new(5));
        let error = store.insert(record).await.expect_err("already persisted");
        assert_eq!(
            error,
            UserRecordRepositoryError::already_persisted(UserRecordId::new(5))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_moves_the_email_index(store: InMemoryUserStore) {
        let mut stored = store.insert(sample(0)).await.expect("insert");
        stored.set_email("edison@example.com");
        store.update(stored).await.expect("update");

        assert!(store.find_by_email("toby@gmail.com").await.expect("lookup").is_none());
        let found = store
            .find_by_email("edison@example.com")
            .await
            .expect("lookup")
            .expect("record under new email");
        assert_eq!(found.name(), "Thomas Edison");

        // The old address is free again.
        store.insert(sample(0)).await.expect("reuse old email");
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_another_records_email(store: InMemoryUserStore) {
        store.insert(sample(0)).await.expect("insert first");
        let mut second = store.insert(sample(1)).await.expect("insert second");
        second.set_email("toby@gmail.com");

        let error = store.update(second).await.expect_err("email clash");
        assert_eq!(error, UserRecordRepositoryError::email_taken("toby@gmail.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_requires_a_known_id(store: InMemoryUserStore) {
        let missing = store.update(sample(0)).await.expect_err("no id");
        assert_eq!(missing, UserRecordRepositoryError::missing_id());

        let unknown = sample(0).with_id(UserRecordId::new(99));
        let error = store.update(unknown).await.expect_err("unknown id");
        assert_eq!(error, UserRecordRepositoryError::not_found(UserRecordId::new(99)));
    }

    #[rstest]
    #[tokio::test]
    async fn loads_resolve_roles_eagerly(store: InMemoryUserStore) {
        let admin = store.create(role_name("ROLE_ADMIN")).await.expect("create role");
        let stray = Role::new(RoleId::new(500), role_name("ROLE_STRAY"));

        let mut record = sample(0);
        record.add_role(admin.clone());
        record.add_role(stray);
        let stored = store.insert(record).await.expect("insert");
        let id = stored.id().expect("assigned id");

        let loaded = store
            .find_by_id(id)
            .await
            .expect("lookup")
            .expect("record present");
        assert_eq!(loaded.roles(), std::slice::from_ref(&admin));
        assert_eq!(stored.roles(), loaded.roles());
    }

    #[rstest]
    #[tokio::test]
    async fn stats_round_trip_through_the_document(store: InMemoryUserStore) {
        let mut record = sample(2);
        record.stats_mut().record("2022-11-13", "calories", json!(2200));
        record.stats_mut().record("2022-11-13", "steps", json!(8000));
        let stored = store.insert(record.clone()).await.expect("insert");

        let loaded = store
            .find_by_id(stored.id().expect("assigned id"))
            .await
            .expect("lookup")
            .expect("record present");
        assert_eq!(loaded.stats(), record.stats());
        assert_eq!(loaded.total_of_all_scores(), 500.0);
        assert_eq!(loaded.number_of_scores(), 6);
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_ordered_and_delete_frees_emails(store: InMemoryUserStore) {
        for index in 0..3 {
            store.insert(sample(index)).await.expect("insert sample");
        }
        let ids: Vec<u64> = UserRecordRepository::list(&store)
            .await
            .expect("list")
            .iter()
            .filter_map(UserRecord::id)
            .map(UserRecordId::get)
            .collect();
        assert_eq!(ids, [1, 2, 3]);

        assert!(store.delete(UserRecordId::new(2)).await.expect("delete"));
        assert!(!store.delete(UserRecordId::new(2)).await.expect("repeat delete"));
        assert!(
            store
                .find_by_email("unbeat_table@gmail.com")
                .await
                .expect("lookup")
                .is_none()
        );
        assert_eq!(UserRecordRepository::list(&store).await.expect("list").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn roles_are_unique_by_name(store: InMemoryUserStore) {
        let user = store.create(role_name("ROLE_USER")).await.expect("create");
        let error = store
            .create(role_name("ROLE_USER"))
            .await
            .expect_err("duplicate role");

        assert_eq!(error, RoleRepositoryError::duplicate_name("ROLE_USER"));
        assert_eq!(
            store.find_by_name(&role_name("ROLE_USER")).await.expect("lookup"),
            Some(user)
        );
        assert_eq!(RoleRepository::list(&store).await.expect("list").len(), 1);
    }
}
