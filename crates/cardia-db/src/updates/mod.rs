//! Update builder types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields (or a list of
//! column/value pairs). Only the fields that are set generate SET clauses in
//! the dynamic UPDATE SQL.

pub mod observation;
pub mod prediction;
pub mod student;
