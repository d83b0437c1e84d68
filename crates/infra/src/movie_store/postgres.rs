//! Postgres-backed movie store.
//!
//! Movies are kept as JSONB documents keyed by their string id, so descriptive
//! fields pass through without schema changes. A `BIGSERIAL` column records
//! insertion order for `find_all`.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::instrument;

use moviedb_core::MovieId;
use moviedb_movies::Movie;

use super::r#trait::{MovieStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS movies (
        seq BIGSERIAL NOT NULL,
        id TEXT PRIMARY KEY,
        document JSONB NOT NULL
    )
"#;

/// Postgres-backed movie store.
///
/// ## Thread Safety
///
/// Uses the SQLx connection pool, which is `Send + Sync`; every call checks out
/// its own connection.
///
/// ## Ordering
///
/// `find_all` returns rows by `seq`. An upsert keeps the original `seq`, so an
/// update does not move a movie to the end.
#[derive(Debug, Clone)]
pub struct PostgresMovieStore {
    pool: Arc<PgPool>,
}

impl PostgresMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Open a connection pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Create the `movies` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("migrate", e))?;
        Ok(())
    }
}

#[async_trait]
impl MovieStore for PostgresMovieStore {
    #[instrument(skip(self, movie), err)]
    async fn save(&self, mut movie: Movie) -> Result<Movie, StoreError> {
        let id = movie.id.get_or_insert_with(MovieId::generate).clone();
        let document =
            serde_json::to_value(&movie).map_err(|e| StoreError::Decode(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO movies (id, document)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document
            "#,
        )
        .bind(id.as_str())
        .bind(document)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("save", e))?;

        Ok(movie)
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let rows = sqlx::query("SELECT document FROM movies ORDER BY seq ASC")
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_all", e))?;

        rows.iter().map(decode_row).collect()
    }

    #[instrument(skip(self), fields(movie_id = %id), err)]
    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, StoreError> {
        let row = sqlx::query("SELECT document FROM movies WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.as_ref().map(decode_row).transpose()
    }

    #[instrument(skip(self), fields(movie_id = %id), err)]
    async fn delete_by_id(&self, id: &MovieId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;
        Ok(())
    }
}

fn decode_row(row: &sqlx::postgres::PgRow) -> Result<Movie, StoreError> {
    let document: serde_json::Value = row
        .try_get("document")
        .map_err(|e| StoreError::Decode(e.to_string()))?;
    serde_json::from_value(document).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Map SQLx errors to StoreError.
fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    let message = match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        sqlx::Error::PoolClosed => "connection pool closed".to_string(),
        other => other.to_string(),
    };
    StoreError::Database { operation, message }
}
