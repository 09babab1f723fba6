use anyhow::Context;
use cardia_core::entities::Features;
use cardia_core::errors::ValidationError;
use serde_json::{Map, Value};

use crate::cli::root_commands::FeatureArgs;

macro_rules! apply_overrides {
    ($features:ident, $form:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $form.$field {
                $features.$field = value;
            }
        )+
    };
}

/// Build and validate the feature record for one form submission.
///
/// Starts from the `--input` JSON file when given (missing keys take the form
/// defaults), otherwise from the defaults, then applies each flag.
pub fn collect_features(form: &FeatureArgs) -> anyhow::Result<Features> {
    let mut features = match &form.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read form file {path}"))?;
            read_form_file(&raw)?
        }
        None => Features::default(),
    };

    apply_overrides!(
        features, form, age, sex, cp, trestbps, chol, fbs, restecg, thalach, exang, oldpeak,
        slope, ca, thal,
    );

    features.validate()?;
    Ok(features)
}

/// Parse a JSON object of feature values. Numbers may also be given as strings.
fn read_form_file(raw: &str) -> Result<Features, ValidationError> {
    let fields: Map<String, Value> =
        serde_json::from_str(raw).map_err(|err| ValidationError::Unparseable {
            field: "form".into(),
            raw: err.to_string(),
        })?;
    Features::from_named(fields.into_iter().map(|(name, value)| {
        let raw = match value {
            Value::String(text) => text,
            other => other.to_string(),
        };
        (name, raw)
    }))
}
