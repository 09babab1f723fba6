//! Classifier training configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_test_ratio() -> f64 {
    0.2
}

const fn default_seed() -> u64 {
    2
}

const fn default_max_iter() -> usize {
    200
}

const fn default_learning_rate() -> f64 {
    0.1
}

const fn default_l2() -> f64 {
    1e-4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Fraction of each class held out for evaluation.
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,

    /// Seed for the stratified split.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Gradient descent iterations.
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,

    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// L2 penalty on the weights.
    #[serde(default = "default_l2")]
    pub l2: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            test_ratio: default_test_ratio(),
            seed: default_seed(),
            max_iter: default_max_iter(),
            learning_rate: default_learning_rate(),
            l2: default_l2(),
        }
    }
}

impl ModelConfig {
    /// Reject values that would make training meaningless.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(invalid("model.test_ratio", "must be between 0 and 1 (exclusive)"));
        }
        if self.max_iter == 0 {
            return Err(invalid("model.max_iter", "must be at least 1"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(invalid("model.learning_rate", "must be a positive number"));
        }
        if !(self.l2.is_finite() && self.l2 >= 0.0) {
            return Err(invalid("model.l2", "must be zero or positive"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ModelConfig::default();
        assert!((config.test_ratio - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.seed, 2);
        assert_eq!(config.max_iter, 200);
        config.validate().unwrap();
    }

    #[test]
    fn ratio_bounds_are_enforced() {
        for ratio in [0.0, 1.0, -0.5, f64::NAN] {
            let config = ModelConfig {
                test_ratio: ratio,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "model.test_ratio"
            ));
        }
    }

    #[test]
    fn zero_iterations_is_invalid() {
        let config = ModelConfig {
            max_iter: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
