//! Repository capability traits for the domain layer.
//!
//! Each trait has two conforming implementations:
//!
//! - In-process, lock-guarded: `crate::infrastructure::memory`
//! - PostgreSQL, transaction-guarded: `crate::infrastructure::persistence`
//!
//! Mock implementations are generated via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`ProfileRepository`] - Per-device profile storage
//! - [`GlobalStateRepository`] - Singleton global counter
//! - [`ClickLedger`] - Atomic dual increment of profile and global counter

pub mod click_ledger;
pub mod global_state_repository;
pub mod profile_repository;

pub use click_ledger::{ClickLedger, ClickOutcome};
pub use global_state_repository::GlobalStateRepository;
pub use profile_repository::{ProfileRepository, UnlockOutcome};

#[cfg(test)]
pub use click_ledger::MockClickLedger;
#[cfg(test)]
pub use global_state_repository::MockGlobalStateRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
