//! Infrastructure layer modules
//!
//! This module contains shared infrastructure components:
//! - `postgres`: PostgreSQL connection pool

pub mod postgres;
