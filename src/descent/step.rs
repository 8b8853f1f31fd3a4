use serde::{Serialize, Deserialize};

/// One epoch of a `descend` run.
///
/// `loss` is the squared error of `weight` against the target **before**
/// that epoch's update is applied, so step 1 records the starting loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescentStep {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Weight value at the start of this epoch.
    pub weight: f64,
    /// Squared error of `weight` against the target.
    pub loss: f64,
}
