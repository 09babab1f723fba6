//! Repository methods on [`CardiaService`](crate::service::CardiaService),
//! one module per table (plus aggregates and CSV export).

pub mod aggregate;
pub mod course;
pub mod enrollment;
pub mod export;
pub mod observation;
pub mod prediction;
pub mod student;
