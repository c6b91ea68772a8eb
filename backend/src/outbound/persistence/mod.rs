//! Storage adapters for the user record and role ports.
//!
//! The in-memory store keeps rows in the shape a relational backend would:
//! scalar columns, a role-id list standing in for the join table, and the
//! daily stats as a JSON document. Row types stay private to this module.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use usr_backend::domain::UserRecordService;
//! use usr_backend::outbound::persistence::InMemoryUserStore;
//!
//! let store = Arc::new(InMemoryUserStore::new());
//! let service = UserRecordService::new(Arc::clone(&store), store);
//! # let _ = service;
//! ```

mod in_memory_user_store;
mod json_serializers;

pub use in_memory_user_store::InMemoryUserStore;
