use serde::{Deserialize, Serialize};

/// Gradient descent hyperparameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperparameters {
    pub max_iter: usize,
    pub learning_rate: f64,
    pub l2: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LogisticModel {
    /// Probability of the positive class.
    #[must_use]
    pub fn predict_probability(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.weights.len());
        sigmoid(dot(&self.weights, features) + self.bias)
    }
}

/// Fit by full-batch gradient descent starting from zero weights.
///
/// `samples` must be non-empty and of equal width; callers check this.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fit(samples: &[(Vec<f64>, bool)], params: Hyperparameters) -> LogisticModel {
    let width = samples.first().map_or(0, |(features, _)| features.len());
    let mut weights = vec![0.0; width];
    let mut bias = 0.0;
    let m = samples.len().max(1) as f64;

    for _ in 0..params.max_iter {
        let mut grad_w = vec![0.0; width];
        let mut grad_b = 0.0;

        for (features, label) in samples {
            let error = sigmoid(dot(&weights, features) + bias) - f64::from(u8::from(*label));
            for (grad, value) in grad_w.iter_mut().zip(features) {
                *grad += error * value;
            }
            grad_b += error;
        }

        for (weight, grad) in weights.iter_mut().zip(&grad_w) {
            *weight -= params.learning_rate * (grad / m + params.l2 * *weight);
        }
        bias -= params.learning_rate * grad_b / m;
    }

    LogisticModel { weights, bias }
}

/// Logistic function, split by sign so `exp` never overflows.
#[must_use]
pub fn sigmoid(value: f64) -> f64 {
    if value >= 0.0 {
        1.0 / (1.0 + (-value).exp())
    } else {
        let z = value.exp();
        z / (1.0 + z)
    }
}

fn dot(weights: &[f64], features: &[f64]) -> f64 {
    weights.iter().zip(features).map(|(w, f)| w * f).sum()
}
