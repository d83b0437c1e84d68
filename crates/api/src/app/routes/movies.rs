use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use moviedb_core::MovieId;
use moviedb_movies::Movie;

use crate::app::errors::{self, api_error_to_response};
use crate::app::services::AppServices;
use crate::app::API_BASE;

/// `POST /movies`: 201 with `Location` and the stored movie.
pub async fn create_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Json(movie): Json<Movie>,
) -> Response {
    let saved = match services.create_movie(movie).await {
        Ok(m) => m,
        Err(e) => return api_error_to_response(e, services.alerts()),
    };

    let Some(id) = saved.id.clone() else {
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            "store returned a movie without id",
        );
    };

    let mut headers = services.alerts().entity_creation::<Movie>(&id);
    match HeaderValue::try_from(format!("{API_BASE}/movies/{id}")) {
        Ok(location) => {
            headers.insert(header::LOCATION, location);
        }
        Err(_) => tracing::warn!(%id, "movie id not encodable as Location"),
    }

    (StatusCode::CREATED, headers, Json(saved)).into_response()
}

/// `PUT /movies`: full replace of the movie named by the body's id.
pub async fn update_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Json(movie): Json<Movie>,
) -> Response {
    let saved = match services.update_movie(movie).await {
        Ok(m) => m,
        Err(e) => return api_error_to_response(e, services.alerts()),
    };

    let headers = saved
        .id
        .as_ref()
        .map(|id| services.alerts().entity_update::<Movie>(id))
        .unwrap_or_default();

    (StatusCode::OK, headers, Json(saved)).into_response()
}

pub async fn list_movies(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.list_movies().await {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => api_error_to_response(e, services.alerts()),
    }
}

/// `GET /movies/:id`: 404 with an empty body when absent.
pub async fn get_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<MovieId>() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match services.get_movie(&id).await {
        Ok(Some(movie)) => (StatusCode::OK, Json(movie)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => api_error_to_response(e, services.alerts()),
    }
}

/// `DELETE /movies/:id`: always 204, whether or not the movie existed.
pub async fn delete_movie(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<MovieId>() else {
        return StatusCode::NO_CONTENT.into_response();
    };

    if let Err(e) = services.delete_movie(&id).await {
        return api_error_to_response(e, services.alerts());
    }

    let headers = services.alerts().entity_deletion::<Movie>(&id);
    (StatusCode::NO_CONTENT, headers).into_response()
}

/// `GET /movies/director/:name`: 200 even on a miss (blank movie body).
pub async fn search_director(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> Response {
    match services.search_by_director(&name).await {
        Ok(movie) => (StatusCode::OK, Json(movie)).into_response(),
        Err(e) => api_error_to_response(e, services.alerts()),
    }
}

pub async fn filter_by_rating(
    Extension(services): Extension<Arc<AppServices>>,
    Path(rating): Path<i32>,
) -> Response {
    match services.filter_by_rating(rating).await {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => api_error_to_response(e, services.alerts()),
    }
}
