//! # cardia-core
//!
//! Core types, feature schema, and error types for Cardia.
//!
//! This crate provides the foundational types shared across all Cardia crates:
//! - The clinical feature schema (field order, valid ranges, form defaults)
//! - `Features`, `Observation`, and `PredictionRecord` for the clinical scenario
//! - `Student`, `Course`, and `Enrollment` for the registry scenario
//! - Label and outcome enums
//! - Cross-cutting validation errors and the error category taxonomy
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod schema;
