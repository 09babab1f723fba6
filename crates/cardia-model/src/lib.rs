//! # cardia-model
//!
//! Binary classifier over the thirteen clinical features.
//!
//! Training takes validated [`Observation`](cardia_core::entities::Observation)s,
//! holds out a stratified, seeded fraction for evaluation, standardizes the
//! features on the training partition, and fits a logistic regression by
//! full-batch gradient descent. Everything is deterministic for a given seed.
//!
//! [`ModelCache`] keeps the last trained model keyed by the store's dataset
//! version so unchanged data is not refitted.

pub mod cache;
pub mod error;
pub mod logistic;
pub mod model;
pub mod scaler;
pub mod split;

pub use cache::ModelCache;
pub use error::ModelError;
pub use model::{Metrics, TrainedModel, TrainingSettings, train};
pub use split::{Split, stratified_split};
