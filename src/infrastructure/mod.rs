//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - Lock-guarded in-process repositories
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`storage`] - Backend selection and connection pool setup

pub mod memory;
pub mod persistence;
pub mod storage;
