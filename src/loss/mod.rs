pub mod error;
pub mod mse;
pub mod mae;
pub mod bce;
pub mod loss_type;

pub use error::LossError;
pub use mse::MseLoss;
pub use mae::MaeLoss;
pub use bce::BceLoss;
pub use loss_type::LossType;

/// Shared input contract for every loss function.
///
/// Mismatched lengths are rejected rather than truncated or broadcast,
/// and empty inputs are rejected rather than producing NaN (the mean of
/// zero elements is undefined).
pub(crate) fn validate(predicted: &[f64], expected: &[f64]) -> Result<(), LossError> {
    if predicted.len() != expected.len() {
        return Err(LossError::ShapeMismatch {
            predicted: predicted.len(),
            expected: expected.len(),
        });
    }
    if predicted.is_empty() {
        return Err(LossError::EmptyInput);
    }
    Ok(())
}
