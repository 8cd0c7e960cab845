//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! Counter increments are single `INSERT .. ON CONFLICT DO UPDATE ..
//! RETURNING` statements, so no caller ever reads, computes, and writes back.
//!
//! # Repositories
//!
//! - [`PgProfileRepository`] - Profiles and unlocked cosmetics
//! - [`PgGlobalStateRepository`] - Singleton global counter (row id = 1)
//! - [`PgClickLedger`] - Both increments in one transaction

pub mod pg_click_ledger;
pub mod pg_global_state_repository;
pub mod pg_profile_repository;

pub use pg_click_ledger::PgClickLedger;
pub use pg_global_state_repository::PgGlobalStateRepository;
pub use pg_profile_repository::PgProfileRepository;
