//! PostgreSQL persistence module.
//!
//! Provides lazy connection pooling for the PostgreSQL backend.

pub mod pool;

pub use pool::{PostgresPool, PostgresPoolError};
