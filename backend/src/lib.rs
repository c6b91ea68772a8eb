//! User record library: the account entity, its storage ports and adapters,
//! and sample data seeding.

pub mod domain;
pub mod outbound;
pub mod sample_data;
