//! Port for the role subsystem.
//!
//! Roles are shared between records and outlive any one of them. The record
//! side only needs to look roles up; creation lives here so tests and seed
//! tooling can populate a store.

use async_trait::async_trait;

use crate::domain::{Role, RoleName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by role repository adapters.
    pub enum RoleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "role repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "role repository query failed: {message}",
        /// A role with this name already exists.
        DuplicateName { name: String } =>
            "role {name} already exists",
    }
}

/// Port for role storage and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Create a role and return it with its assigned identifier.
    async fn create(&self, name: RoleName) -> Result<Role, RoleRepositoryError>;

    /// Fetch a role by name.
    async fn find_by_name(&self, name: &RoleName) -> Result<Option<Role>, RoleRepositoryError>;

    /// Every role, ordered by identifier.
    async fn list(&self) -> Result<Vec<Role>, RoleRepositoryError>;
}
