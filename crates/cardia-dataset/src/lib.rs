//! # cardia-dataset
//!
//! Loads the clinical dataset from a CSV file path or from uploaded bytes into
//! validated [`Observation`](cardia_core::entities::Observation)s.
//!
//! The loader distinguishes a missing source, an empty source, and a
//! malformed source. Rows that violate the feature schema are rejected: either
//! the whole load fails or the rows are left out and reported, depending on
//! the configured [`InvalidRows`](cardia_config::InvalidRows) policy.

pub mod error;
pub mod loader;

pub use error::SourceError;
pub use loader::{Dataset, load_bytes, load_path};
