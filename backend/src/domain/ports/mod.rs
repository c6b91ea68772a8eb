//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod role_repository;
mod user_record_repository;

#[cfg(test)]
pub use role_repository::MockRoleRepository;
pub use role_repository::{RoleRepository, RoleRepositoryError};
#[cfg(test)]
pub use user_record_repository::MockUserRecordRepository;
pub use user_record_repository::{UserRecordRepository, UserRecordRepositoryError};
