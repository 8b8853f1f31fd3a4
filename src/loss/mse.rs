use crate::loss::error::LossError;
use crate::loss::validate;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    ///
    /// Penalizes large errors quadratically, which makes it sensitive to
    /// outliers relative to `MaeLoss`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64, LossError> {
        validate(predicted, expected)?;
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).powi(2))
            .sum::<f64>() / n)
    }

    /// Per-output gradient: 2·(predicted - expected) / n
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>, LossError> {
        validate(predicted, expected)?;
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(p, y)| 2.0 * (p - y) / n)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::error::LossError;

    #[test]
    fn perfect_prediction_scores_zero() {
        let v = [1.0, -2.0, 3.5];
        assert_eq!(MseLoss::loss(&v, &v).unwrap(), 0.0);
    }

    #[test]
    fn single_unit_error() {
        assert_eq!(MseLoss::loss(&[1.0], &[2.0]).unwrap(), 1.0);
    }

    #[test]
    fn quadratic_penalty() {
        // One deviation of 10 over four samples: 100 / 4.
        let loss = MseLoss::loss(&[0.0, 0.0, 0.0, 10.0], &[0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(loss, 25.0);
    }

    #[test]
    fn derivative_points_up_the_error() {
        let grad = MseLoss::derivative(&[3.0, 1.0], &[1.0, 1.0]).unwrap();
        assert_eq!(grad, vec![2.0, 0.0]);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = MseLoss::loss(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, LossError::ShapeMismatch { predicted: 1, expected: 2 });
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(MseLoss::loss(&[], &[]).unwrap_err(), LossError::EmptyInput);
        assert_eq!(MseLoss::derivative(&[], &[]).unwrap_err(), LossError::EmptyInput);
    }
}
