//! Selection rules behind the query endpoints.
//!
//! Both run as linear scans over the collection in store order; the catalog is
//! small enough that no index is kept.

use crate::movie::Movie;

/// First movie (in the given order) whose director contains `name_part`.
///
/// Matching is a case-sensitive substring test. Movies without a director
/// never match. When nothing matches the blank movie is returned rather than
/// signalling absence; the HTTP layer answers 200 with it.
pub fn first_by_director(movies: Vec<Movie>, name_part: &str) -> Movie {
    movies
        .into_iter()
        .find(|m| {
            m.director
                .as_deref()
                .is_some_and(|director| director.contains(name_part))
        })
        .unwrap_or_default()
}

/// Movies rated strictly above `threshold`, in their original order.
///
/// Unrated movies are dropped.
pub fn filter_by_min_rating(movies: Vec<Movie>, threshold: i32) -> Vec<Movie> {
    movies
        .into_iter()
        .filter(|m| m.rating.is_some_and(|rating| rating > threshold))
        .collect()
}
