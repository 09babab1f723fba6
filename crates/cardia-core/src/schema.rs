//! The clinical feature schema.
//!
//! Field order here is the order of the feature vector, of the `heart_data`
//! table columns, and of exported CSV files. The valid values mirror the
//! ranges offered by the data-entry form.

use crate::errors::ValidationError;

/// Number of features in a feature vector (everything except `target`).
pub const FEATURE_COUNT: usize = 13;

/// The set of values a field may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// Inclusive numeric range.
    Range { min: f64, max: f64 },
    /// Closed set of integer codes.
    Choices(&'static [i64]),
}

/// One column of the clinical schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Column name used in SQL, CSV headers, and form input.
    pub name: &'static str,
    /// Human-readable label shown next to form inputs.
    pub label: &'static str,
    pub domain: Domain,
    /// Whether fractional values are rejected.
    pub integral: bool,
    /// Form default.
    pub default: f64,
}

impl FieldSpec {
    const fn range(
        name: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            name,
            label,
            domain: Domain::Range { min, max },
            integral: true,
            default,
        }
    }

    const fn choices(
        name: &'static str,
        label: &'static str,
        choices: &'static [i64],
        default: f64,
    ) -> Self {
        Self {
            name,
            label,
            domain: Domain::Choices(choices),
            integral: true,
            default,
        }
    }

    /// Check a single value against this field.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the value is not finite, not integral
    /// for an integer field, or outside the field's domain.
    pub fn check(&self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field: self.name });
        }
        if self.integral && value.fract() != 0.0 {
            return Err(ValidationError::NotIntegral {
                field: self.name,
                value,
            });
        }
        let valid = match self.domain {
            Domain::Range { min, max } => (min..=max).contains(&value),
            #[allow(clippy::cast_precision_loss)]
            Domain::Choices(choices) => choices.iter().any(|c| *c as f64 == value),
        };
        if valid {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                field: self.name,
                value,
                allowed: self.allowed(),
            })
        }
    }

    /// Describe the valid values, e.g. `1..=120` or `{0, 1, 2}`.
    #[must_use]
    pub fn allowed(&self) -> String {
        match self.domain {
            Domain::Range { min, max } => format!("{min}..={max}"),
            Domain::Choices(choices) => {
                let items = choices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{items}}}")
            }
        }
    }
}

/// Feature columns in vector order.
pub const FEATURES: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec::range("age", "Age", 1.0, 120.0, 30.0),
    FieldSpec::choices("sex", "Sex (0 = female, 1 = male)", &[0, 1], 0.0),
    FieldSpec::choices("cp", "Chest pain type", &[0, 1, 2, 3], 0.0),
    FieldSpec::range("trestbps", "Resting blood pressure", 80.0, 200.0, 120.0),
    FieldSpec::range("chol", "Cholesterol level", 100.0, 600.0, 150.0),
    FieldSpec::choices("fbs", "Fasting blood sugar > 120 mg/dl", &[0, 1], 0.0),
    FieldSpec::choices("restecg", "Resting ECG", &[0, 1, 2], 0.0),
    FieldSpec::range("thalach", "Max heart rate achieved", 50.0, 250.0, 140.0),
    FieldSpec::choices("exang", "Exercise induced angina", &[0, 1], 0.0),
    FieldSpec {
        name: "oldpeak",
        label: "ST depression induced by exercise",
        domain: Domain::Range {
            min: 0.0,
            max: 10.0,
        },
        integral: false,
        default: 1.0,
    },
    FieldSpec::choices("slope", "Slope of the peak exercise ST segment", &[0, 1, 2], 0.0),
    FieldSpec::choices("ca", "Number of major vessels", &[0, 1, 2, 3, 4], 0.0),
    FieldSpec::choices("thal", "Thalassemia", &[0, 1, 2, 3], 1.0),
];

/// The label column.
pub const TARGET: FieldSpec = FieldSpec::choices("target", "Heart disease", &[0, 1], 0.0);

/// Column names of a full observation row, in table order.
#[must_use]
pub fn observation_columns() -> Vec<&'static str> {
    FEATURES
        .iter()
        .map(|f| f.name)
        .chain(std::iter::once(TARGET.name))
        .collect()
}

/// Position of a feature in the vector.
#[must_use]
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURES.iter().position(|f| f.name.eq_ignore_ascii_case(name))
}

/// Validate a raw feature vector: arity first, then every value.
///
/// # Errors
///
/// Returns `ValidationError::Length` for the wrong arity, or the first
/// per-field violation.
pub fn validate_vector(values: &[f64]) -> Result<(), ValidationError> {
    if values.len() != FEATURE_COUNT {
        return Err(ValidationError::Length {
            expected: FEATURE_COUNT,
            actual: values.len(),
        });
    }
    for (spec, value) in FEATURES.iter().zip(values) {
        spec.check(*value)?;
    }
    Ok(())
}
