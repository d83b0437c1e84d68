//! Infrastructure layer: movie persistence and configuration.

pub mod config;
pub mod movie_store;

pub use config::{AppConfig, ConfigError};
pub use movie_store::{InMemoryMovieStore, MovieStore, PostgresMovieStore, StoreError};
