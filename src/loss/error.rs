use thiserror::Error;

/// Errors returned by the loss functions.
///
/// Every error is surfaced synchronously at the call site; no loss
/// function truncates, broadcasts, or returns a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LossError {
    /// The two input slices differ in length.
    #[error("shape mismatch: predicted has {predicted} elements, expected has {expected}")]
    ShapeMismatch { predicted: usize, expected: usize },

    /// Both input slices are empty; the mean of zero elements is undefined.
    #[error("empty input: loss over zero elements is undefined")]
    EmptyInput,

    /// A binary cross-entropy label is not 0 or 1.
    #[error("domain violation: expected[{index}] = {value} is not a binary label")]
    DomainViolation { index: usize, value: f64 },
}
