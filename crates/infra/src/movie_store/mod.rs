//! Movie persistence boundary.
//!
//! This module defines the store the HTTP layer delegates to, keyed by an
//! opaque string id, plus the in-memory and Postgres implementations.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryMovieStore;
pub use postgres::PostgresMovieStore;
pub use r#trait::{MovieStore, StoreError};
