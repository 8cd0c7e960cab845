//! In-process repository implementations.
//!
//! Each store keeps its state behind a single `parking_lot::Mutex`. Every
//! operation is one map lookup or mutation under the lock, so hold times
//! are bounded and no lock is held across an `.await`.
//!
//! - [`InMemoryProfileRepository`] - `HashMap<device_id, Profile>`
//! - [`InMemoryGlobalStateRepository`] - single [`crate::domain::entities::GlobalState`]
//! - [`InMemoryClickLedger`] - composes the two for the dual increment

mod memory_click_ledger;
mod memory_global_state_repository;
mod memory_profile_repository;

pub use memory_click_ledger::InMemoryClickLedger;
pub use memory_global_state_repository::InMemoryGlobalStateRepository;
pub use memory_profile_repository::InMemoryProfileRepository;
