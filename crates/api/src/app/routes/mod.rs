use axum::{
    routing::{get, post},
    Router,
};

pub mod movies;
pub mod system;

/// Router for the `/api` surface.
pub fn router() -> Router {
    Router::new()
        .route(
            "/movies",
            post(movies::create_movie)
                .put(movies::update_movie)
                .get(movies::list_movies),
        )
        .route(
            "/movies/:id",
            get(movies::get_movie).delete(movies::delete_movie),
        )
        .route("/movies/director/:name", get(movies::search_director))
        .route("/movies/rating/:rating", get(movies::filter_by_rating))
}
