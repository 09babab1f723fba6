use cardia_core::enums::Diagnosis;
use cardia_core::errors::{ErrorCategory, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Cannot train on an empty dataset")]
    EmptyDataset,

    #[error("Cannot train with a single class: every row is labeled {label}")]
    SingleClass { label: Diagnosis },

    #[error("Invalid feature vector: {0}")]
    InvalidFeatureVector(#[from] ValidationError),
}

impl ModelError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyDataset | Self::SingleClass { .. } => ErrorCategory::Source,
            Self::InvalidFeatureVector(_) => ErrorCategory::Validation,
        }
    }
}
