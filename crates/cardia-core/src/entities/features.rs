use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::schema::{FEATURE_COUNT, FEATURES, feature_index, validate_vector};

/// The thirteen clinical inputs of one person, in schema order.
///
/// Missing fields deserialize to the form defaults, so a partially filled form
/// is accepted and then validated as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Features {
    pub age: i64,
    pub sex: i64,
    /// Chest pain type.
    pub cp: i64,
    /// Resting blood pressure.
    pub trestbps: i64,
    /// Serum cholesterol.
    pub chol: i64,
    /// Fasting blood sugar > 120 mg/dl.
    pub fbs: i64,
    /// Resting ECG category.
    pub restecg: i64,
    /// Maximum heart rate achieved.
    pub thalach: i64,
    /// Exercise induced angina.
    pub exang: i64,
    /// ST depression induced by exercise relative to rest.
    pub oldpeak: f64,
    pub slope: i64,
    /// Number of major vessels colored by fluoroscopy.
    pub ca: i64,
    pub thal: i64,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            age: 30,
            sex: 0,
            cp: 0,
            trestbps: 120,
            chol: 150,
            fbs: 0,
            restecg: 0,
            thalach: 140,
            exang: 0,
            oldpeak: 1.0,
            slope: 0,
            ca: 0,
            thal: 1,
        }
    }
}

impl Features {
    /// The feature vector in schema order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age as f64,
            self.sex as f64,
            self.cp as f64,
            self.trestbps as f64,
            self.chol as f64,
            self.fbs as f64,
            self.restecg as f64,
            self.thalach as f64,
            self.exang as f64,
            self.oldpeak,
            self.slope as f64,
            self.ca as f64,
            self.thal as f64,
        ]
    }

    /// Build from a raw vector after validating it against the schema.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for the wrong arity or any invalid value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_vector(values: &[f64]) -> Result<Self, ValidationError> {
        validate_vector(values)?;
        let int = |idx: usize| values[idx] as i64;
        Ok(Self {
            age: int(0),
            sex: int(1),
            cp: int(2),
            trestbps: int(3),
            chol: int(4),
            fbs: int(5),
            restecg: int(6),
            thalach: int(7),
            exang: int(8),
            oldpeak: values[9],
            slope: int(10),
            ca: int(11),
            thal: int(12),
        })
    }

    /// Build from named string values, the shape a form submission arrives in.
    ///
    /// Unspecified fields keep their form defaults. Every value is parsed and
    /// the result validated as a whole.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` for a name outside the schema, `Unparseable` for
    /// a non-numeric value, or the first range violation.
    pub fn from_named<I, K, V>(fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values = Self::default().to_vector();
        for (name, raw) in fields {
            let name = name.as_ref().trim();
            let idx =
                feature_index(name).ok_or_else(|| ValidationError::UnknownField(name.to_string()))?;
            let raw = raw.as_ref().trim();
            values[idx] = raw.parse::<f64>().map_err(|_| ValidationError::Unparseable {
                field: FEATURES[idx].name.to_string(),
                raw: raw.to_string(),
            })?;
        }
        Self::from_vector(&values)
    }

    /// Validate every field against the schema.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in schema order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_vector(&self.to_vector())
    }

}
