//! Observation update builder.

use cardia_core::errors::ValidationError;
use serde::Serialize;

use crate::columns::{ObservationColumn, TableColumn};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ObservationUpdate {
    pub values: Vec<(ObservationColumn, f64)>,
}

impl ObservationUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check every value against its column's schema entry.
    ///
    /// # Errors
    ///
    /// Returns the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (column, value) in &self.values {
            column.spec().check(*value)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ObservationUpdateBuilder(ObservationUpdate);

impl ObservationUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column. A later value for the same column replaces the earlier.
    #[must_use]
    pub fn set(mut self, column: ObservationColumn, value: f64) -> Self {
        self.0.values.retain(|(existing, _)| *existing != column);
        self.0.values.push((column, value));
        self
    }

    #[must_use]
    pub fn build(self) -> ObservationUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_win() {
        let update = ObservationUpdateBuilder::new()
            .set(ObservationColumn::Age, 40.0)
            .set(ObservationColumn::Age, 41.0)
            .build();
        assert_eq!(update.values, vec![(ObservationColumn::Age, 41.0)]);
    }

    #[test]
    fn values_are_checked_against_the_schema() {
        let update = ObservationUpdateBuilder::new()
            .set(ObservationColumn::Chol, 900.0)
            .build();
        assert!(update.validate().is_err());
    }
}
