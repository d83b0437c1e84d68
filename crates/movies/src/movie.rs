use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use moviedb_core::{Entity, MovieId};

/// Movie entity.
///
/// Every field is optional so that a request body can describe a movie that
/// has not been persisted yet. `Movie::default()` is the blank movie: every
/// field `null` on the wire.
///
/// Fields the API does not know about are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Option<MovieId>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub rating: Option<i32>,
    pub release_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Movie {
    pub fn new(title: impl Into<String>, director: impl Into<String>, rating: i32) -> Self {
        Self {
            title: Some(title.into()),
            director: Some(director.into()),
            rating: Some(rating),
            ..Self::default()
        }
    }

    /// Same movie, carrying the given id.
    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether this is the blank movie (no id, no fields).
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl Entity for Movie {
    type Id = MovieId;

    const NAME: &'static str = "movie";

    fn id(&self) -> Option<&MovieId> {
        self.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedb_core::{DomainError, ErrorKey};
    use serde_json::json;

    fn test_id() -> MovieId {
        MovieId::generate()
    }

    #[test]
    fn blank_movie_serializes_every_field_as_null() {
        let body = serde_json::to_value(Movie::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "id": null,
                "title": null,
                "director": null,
                "rating": null,
                "releaseDate": null,
            })
        );
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "title": "Heat",
            "director": "Michael Mann",
            "rating": 8,
            "releaseDate": "1995-12-15",
            "genre": "crime",
            "cast": ["Pacino", "De Niro"],
        });

        let movie: Movie = serde_json::from_value(raw).unwrap();
        assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(1995, 12, 15));
        assert_eq!(movie.extra["genre"], "crime");

        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back["cast"], json!(["Pacino", "De Niro"]));
        assert_eq!(back["id"], JsonValue::Null);
    }

    #[test]
    fn ensure_unsaved_rejects_movie_with_id() {
        let movie = Movie::new("Heat", "Michael Mann", 8).with_id(test_id());
        let err = movie.ensure_unsaved().unwrap_err();
        match err {
            DomainError::InvalidArgument { entity, key, .. } => {
                assert_eq!(entity, "movie");
                assert_eq!(key, ErrorKey::IdExists);
            }
            _ => panic!("Expected InvalidArgument for pre-set id"),
        }
    }

    #[test]
    fn ensure_unsaved_accepts_new_movie() {
        assert!(Movie::new("Heat", "Michael Mann", 8).ensure_unsaved().is_ok());
    }

    #[test]
    fn ensure_saved_requires_id() {
        let err = Movie::new("Heat", "Michael Mann", 8).ensure_saved().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidArgument { key: ErrorKey::IdNull, .. }
        ));

        let id = test_id();
        let movie = Movie::default().with_id(id.clone());
        assert_eq!(movie.ensure_saved().unwrap(), &id);
    }

    #[test]
    fn is_blank_only_for_default() {
        assert!(Movie::default().is_blank());
        assert!(!Movie::new("Heat", "Michael Mann", 8).is_blank());
    }
}
