use serde::{Serialize, Deserialize};

use crate::loss::bce::BceLoss;
use crate::loss::error::LossError;
use crate::loss::mae::MaeLoss;
use crate::loss::mse::MseLoss;

/// Selects a loss function at runtime.
///
/// - `Mse`                — Mean squared error; regression targets.
/// - `Mae`                — Mean absolute error; regression targets,
///   robust to outliers.
/// - `BinaryCrossEntropy` — Binary cross-entropy; probability predictions
///   against {0, 1} labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    Mae,
    BinaryCrossEntropy,
}

impl LossType {
    /// Scalar loss for one sample pair — dispatches on the variant.
    pub fn compute(self, predicted: &[f64], expected: &[f64]) -> Result<f64, LossError> {
        match self {
            LossType::Mse => MseLoss::loss(predicted, expected),
            LossType::Mae => MaeLoss::loss(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::loss(predicted, expected),
        }
    }

    /// Per-output gradient for one sample pair — dispatches on the variant.
    pub fn compute_derivative(
        self,
        predicted: &[f64],
        expected: &[f64],
    ) -> Result<Vec<f64>, LossError> {
        match self {
            LossType::Mse => MseLoss::derivative(predicted, expected),
            LossType::Mae => MaeLoss::derivative(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::derivative(predicted, expected),
        }
    }
}
