use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use moviedb_core::MovieId;
use moviedb_movies::Movie;

use super::r#trait::{MovieStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    /// Insertion order of live ids.
    order: Vec<MovieId>,
    by_id: HashMap<MovieId, Movie>,
}

/// In-memory movie store for tests/dev.
///
/// `find_all` returns movies in insertion order. Overwriting an existing id
/// keeps its position.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    inner: RwLock<Inner>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored movies.
    pub fn len(&self) -> Result<usize, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(inner.order.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn save(&self, mut movie: Movie) -> Result<Movie, StoreError> {
        let id = movie.id.get_or_insert_with(MovieId::generate).clone();

        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("save"))?;

        if inner.by_id.insert(id.clone(), movie.clone()).is_none() {
            inner.order.push(id);
        }

        Ok(movie)
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_all"))?;

        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_by_id"))?;
        Ok(inner.by_id.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &MovieId) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete_by_id"))?;

        if inner.by_id.remove(id).is_some() {
            inner.order.retain(|existing| existing != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie::new(title, "Someone", 5)
    }

    #[tokio::test]
    async fn save_assigns_id_to_new_movie() {
        let store = InMemoryMovieStore::new();

        let saved = store.save(movie("Heat")).await.unwrap();

        let id = saved.id.clone().expect("id assigned");
        assert_eq!(store.find_by_id(&id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = InMemoryMovieStore::new();
        for title in ["a", "b", "c"] {
            store.save(movie(title)).await.unwrap();
        }

        let titles: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn save_with_id_overwrites_in_place() {
        let store = InMemoryMovieStore::new();
        let first = store.save(movie("a")).await.unwrap();
        store.save(movie("b")).await.unwrap();

        let replacement = Movie {
            id: first.id.clone(),
            title: Some("a2".to_string()),
            ..Movie::default()
        };
        store.save(replacement).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title.as_deref(), Some("a2"));
        // Full overwrite: fields absent from the replacement are gone.
        assert_eq!(all[0].director, None);
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts() {
        let store = InMemoryMovieStore::new();
        let id: MovieId = "external-1".parse().unwrap();

        store.save(movie("x").with_id(id.clone())).await.unwrap();

        assert!(store.find_by_id(&id).await.unwrap().is_some());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryMovieStore::new();
        let saved = store.save(movie("a")).await.unwrap();
        let id = saved.id.unwrap();

        store.delete_by_id(&id).await.unwrap();
        store.delete_by_id(&id).await.unwrap();

        assert!(store.find_by_id(&id).await.unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn len_reports_poisoned_lock() {
        let store = std::sync::Arc::new(InMemoryMovieStore::new());

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert!(matches!(store.len(), Err(StoreError::LockPoisoned("len"))));
        assert!(store.is_empty().is_err());
    }
}
