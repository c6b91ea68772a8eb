//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no business logic.
//!
//! - **persistence**: process-local storage for user records and roles

pub mod persistence;
