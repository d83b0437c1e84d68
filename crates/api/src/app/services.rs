//! Store wiring and the movie operations behind each endpoint.

use std::sync::Arc;

use anyhow::Context;

use moviedb_core::{Entity, MovieId};
use moviedb_infra::{AppConfig, InMemoryMovieStore, MovieStore, PostgresMovieStore};
use moviedb_movies::{filter_by_min_rating, first_by_director, Movie};

use crate::app::errors::ApiError;
use crate::app::headers::AlertHeaders;

/// Everything a request handler needs: the store and the alert header names.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn MovieStore>,
    alerts: AlertHeaders,
}

impl AppServices {
    pub fn new(store: Arc<dyn MovieStore>, alerts: AlertHeaders) -> Self {
        Self { store, alerts }
    }

    pub fn alerts(&self) -> &AlertHeaders {
        &self.alerts
    }

    /// Persist a new movie; the store assigns its id.
    pub async fn create_movie(&self, movie: Movie) -> Result<Movie, ApiError> {
        tracing::debug!(?movie, "REST request to save Movie");
        movie.ensure_unsaved()?;
        Ok(self.store.save(movie).await?)
    }

    /// Overwrite the movie stored under `movie.id`.
    pub async fn update_movie(&self, movie: Movie) -> Result<Movie, ApiError> {
        tracing::debug!(?movie, "REST request to update Movie");
        movie.ensure_saved()?;
        Ok(self.store.save(movie).await?)
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        tracing::debug!("REST request to get all Movies");
        Ok(self.store.find_all().await?)
    }

    pub async fn get_movie(&self, id: &MovieId) -> Result<Option<Movie>, ApiError> {
        tracing::debug!(%id, "REST request to get Movie");
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn delete_movie(&self, id: &MovieId) -> Result<(), ApiError> {
        tracing::debug!(%id, "REST request to delete Movie");
        Ok(self.store.delete_by_id(id).await?)
    }

    /// First movie whose director contains `name_part`, or the blank movie.
    pub async fn search_by_director(&self, name_part: &str) -> Result<Movie, ApiError> {
        tracing::debug!(name_part, "REST request to search Movies by director");
        let movies = self.store.find_all().await?;
        Ok(first_by_director(movies, name_part))
    }

    /// Movies rated strictly above `threshold`, in store order.
    pub async fn filter_by_rating(&self, threshold: i32) -> Result<Vec<Movie>, ApiError> {
        tracing::debug!(threshold, "REST request to filter Movies by rating");
        let movies = self.store.find_all().await?;
        Ok(filter_by_min_rating(movies, threshold))
    }
}

/// Build services from configuration: Postgres when `DATABASE_URL` is set,
/// in-memory otherwise.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let alerts = AlertHeaders::new(&config.application_name)
        .context("APP_NAME is not usable in header names")?;

    let store: Arc<dyn MovieStore> = match &config.database_url {
        Some(url) => {
            let store = PostgresMovieStore::connect(url, config.max_connections)
                .await
                .context("failed to connect to Postgres")?;
            store.migrate().await.context("failed to prepare movies table")?;
            tracing::info!("using Postgres movie store");
            Arc::new(store)
        }
        None => {
            tracing::info!("DATABASE_URL not set; using in-memory movie store");
            Arc::new(InMemoryMovieStore::new())
        }
    };

    Ok(AppServices::new(store, alerts))
}
