//! Movies domain module.
//!
//! This crate contains the movie entity and the selection rules used by the
//! query endpoints, implemented as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod movie;
pub mod selection;

pub use movie::Movie;
pub use selection::{filter_by_min_rating, first_by_director};
