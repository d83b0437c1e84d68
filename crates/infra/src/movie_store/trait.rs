use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use moviedb_core::MovieId;
use moviedb_movies::Movie;

/// Movie store operation error.
///
/// These are **infrastructure errors** (storage, connectivity, encoding) as
/// opposed to domain errors. The HTTP layer reports all of them as 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    #[error("failed to decode stored movie: {0}")]
    Decode(String),
}

/// Persistence collaborator for movies.
///
/// Ordering of `find_all` is store-defined. `save` assigns an id to a movie
/// that has none and otherwise overwrites (or inserts) the record under the
/// movie's id; no field merging happens here. `delete_by_id` of an unknown id
/// is not an error.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn save(&self, movie: Movie) -> Result<Movie, StoreError>;

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError>;

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, StoreError>;

    async fn delete_by_id(&self, id: &MovieId) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> MovieStore for Arc<S>
where
    S: MovieStore + ?Sized,
{
    async fn save(&self, movie: Movie) -> Result<Movie, StoreError> {
        (**self).save(movie).await
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &MovieId) -> Result<(), StoreError> {
        (**self).delete_by_id(id).await
    }
}
