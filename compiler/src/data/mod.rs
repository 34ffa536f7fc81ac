//! Data layer: filter model and SQL generation

pub mod error;
pub mod filters;

pub use error::FilterError;
