use crate::loss::error::LossError;
use crate::loss::validate;

pub struct BceLoss;

/// Predictions are clamped into [EPS, 1 - EPS] before the log terms, so a
/// fully confident wrong prediction scores -ln(EPS) instead of infinity.
const EPS: f64 = 1e-7;

impl BceLoss {
    /// Scalar BCE: -mean(y·ln(p) + (1-y)·ln(1-p)) with p clamped.
    ///
    /// `predicted` — probabilities in [0, 1]
    /// `expected`  — binary labels; anything outside {0, 1} is a
    ///               `DomainViolation`
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64, LossError> {
        validate(predicted, expected)?;
        check_binary_labels(expected)?;
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let p = p.clamp(EPS, 1.0 - EPS);
                -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            })
            .sum::<f64>() / n)
    }

    /// Per-output gradient: (p - y) / (p · (1 - p) · n) with p clamped.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>, LossError> {
        validate(predicted, expected)?;
        check_binary_labels(expected)?;
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let p = p.clamp(EPS, 1.0 - EPS);
                (p - y) / (p * (1.0 - p) * n)
            })
            .collect())
    }
}

/// Rejects any label that is not exactly 0 or 1. A label like 0.5 would
/// still produce a number, but a misleading one.
fn check_binary_labels(expected: &[f64]) -> Result<(), LossError> {
    for (index, &value) in expected.iter().enumerate() {
        if value != 0.0 && value != 1.0 {
            return Err(LossError::DomainViolation { index, value });
        }
    }
    Ok(())
}
