//! Port for user record storage.
//!
//! The [`UserRecordRepository`] trait is the contract the record needs from
//! its storage layer: identifier assignment on insert, email uniqueness, and
//! eager role resolution on every load.

use async_trait::async_trait;

use crate::domain::{UserRecord, UserRecordId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user record repository adapters.
    pub enum UserRecordRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user record repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user record repository query failed: {message}",
        /// Another record already uses this email.
        EmailTaken { email: String } =>
            "email {email} is already registered",
        /// No record exists with the given identifier.
        NotFound { id: UserRecordId } =>
            "user record {id} not found",
        /// Insert was given a record that already has an identifier.
        AlreadyPersisted { id: UserRecordId } =>
            "user record {id} is already persisted",
        /// Update was given a record without an identifier.
        MissingId =>
            "user record has no identifier",
        /// The stats document could not be encoded or decoded.
        Serialization { message: String } =>
            "user record document serialisation failed: {message}",
    }
}

/// Port for user record persistence.
///
/// # Identifier semantics
///
/// - [`insert`](UserRecordRepository::insert) assigns the identifier; the
///   record passed in must not carry one.
/// - Identifiers never change once assigned.
///
/// # Loading
///
/// Every read returns records with their roles fully resolved; there is no
/// deferred role lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRecordRepository: Send + Sync {
    /// Store a new record and return it with its assigned identifier.
    ///
    /// Fails with [`UserRecordRepositoryError::EmailTaken`] when the email is
    /// already registered.
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, UserRecordRepositoryError>;

    /// Replace an existing record and return the stored state.
    ///
    /// Fails with [`UserRecordRepositoryError::NotFound`] for unknown ids and
    /// [`UserRecordRepositoryError::EmailTaken`] when the new email belongs
    /// to a different record.
    async fn update(&self, record: UserRecord) -> Result<UserRecord, UserRecordRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(
        &self,
        id: UserRecordId,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError>;

    /// Fetch a record by exact email.
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError>;

    /// Every record, ordered by identifier.
    async fn list(&self) -> Result<Vec<UserRecord>, UserRecordRepositoryError>;

    /// Delete a record, returning `false` when it did not exist.
    async fn delete(&self, id: UserRecordId) -> Result<bool, UserRecordRepositoryError>;
}
