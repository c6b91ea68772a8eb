//! Access-control roles referenced by user records.
//!
//! Roles are owned by the role subsystem; records only hold references to
//! them and never create or delete roles themselves.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned when constructing a [`RoleName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleValidationError {
    /// Name is empty after trimming whitespace.
    #[error("role name must not be empty")]
    Empty,
    /// Name contains leading or trailing whitespace.
    #[error("role name must not contain surrounding whitespace")]
    ContainsWhitespace,
}

/// Storage-assigned role identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(u64);

impl RoleId {
    /// Wrap a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role name such as `ROLE_ADMIN`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    /// Validate and construct a [`RoleName`].
    ///
    /// # Examples
    /// ```
    /// use usr_backend::domain::RoleName;
    ///
    /// let name = RoleName::new("ROLE_ADMIN").expect("valid role name");
    /// assert_eq!(name.as_ref(), "ROLE_ADMIN");
    /// assert!(RoleName::new(" ROLE_ADMIN").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, RoleValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(RoleValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(RoleValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RoleName> for String {
    fn from(value: RoleName) -> Self {
        value.0
    }
}

impl TryFrom<String> for RoleName {
    type Error = RoleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A role as resolved by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: RoleName,
}

impl Role {
    /// Build a role from its identifier and name.
    pub fn new(id: RoleId, name: RoleName) -> Self {
        Self { id, name }
    }

    /// Storage identifier.
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Role name.
    pub fn name(&self) -> &RoleName {
        &self.name
    }
}
