use cardia_core::errors::{ErrorCategory, ValidationError};
use cardia_dataset::SourceError;
use cardia_db::error::DatabaseError;
use cardia_model::ModelError;

/// The message printed after `cardia error:`. Errors from the library crates
/// are prefixed with their category so a rejected form, a broken dataset and
/// a duplicate record read differently.
pub fn describe(error: &anyhow::Error) -> String {
    match category(error) {
        Some(category) => format!("{}: {error:#}", heading(category)),
        None => format!("{error:#}"),
    }
}

fn category(error: &anyhow::Error) -> Option<ErrorCategory> {
    error.chain().find_map(|cause| {
        if let Some(error) = cause.downcast_ref::<DatabaseError>() {
            Some(error.category())
        } else if let Some(error) = cause.downcast_ref::<SourceError>() {
            Some(error.category())
        } else if let Some(error) = cause.downcast_ref::<ModelError>() {
            Some(error.category())
        } else {
            cause.downcast_ref::<ValidationError>().map(ValidationError::category)
        }
    })
}

const fn heading(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::Source => "dataset problem",
        ErrorCategory::Validation => "invalid input",
        ErrorCategory::Constraint => "constraint violation",
        ErrorCategory::NotFound => "not found",
        ErrorCategory::Storage => "storage failure",
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use cardia_db::ConstraintKind;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn constraint_and_missing_record_read_differently() {
        let duplicate = anyhow::Error::from(DatabaseError::Constraint {
            kind: ConstraintKind::Unique,
            message: "UNIQUE constraint failed: students.email".into(),
        });
        let missing = anyhow::Error::from(DatabaseError::NotFound {
            table: "students",
            id: 4,
        });

        assert!(describe(&duplicate).starts_with("constraint violation: "));
        assert!(describe(&duplicate).contains("identifier must be unique"));
        assert_eq!(
            describe(&missing),
            "not found: No record found in students with id 4"
        );
    }

    #[test]
    fn category_is_found_behind_context() {
        let error = Err::<(), _>(SourceError::Empty)
            .context("failed to import heart.csv")
            .unwrap_err();
        assert_eq!(
            describe(&error),
            "dataset problem: failed to import heart.csv: Dataset is empty"
        );
    }

    #[test]
    fn validation_errors_are_labeled() {
        let error = anyhow::Error::from(ValidationError::EmptyField { field: "name" });
        assert_eq!(describe(&error), "invalid input: name must not be empty");
    }

    #[test]
    fn plain_errors_pass_through() {
        let error = anyhow::anyhow!("not a cardia project");
        assert_eq!(describe(&error), "not a cardia project");
    }
}
