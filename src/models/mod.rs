//! Result types produced by the search strategies.

mod tour;

pub use tour::Tour;
