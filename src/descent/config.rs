/// Configuration for a `descend` run.
///
/// # Fields
/// - `epochs`         — number of gradient steps to take
/// - `learning_rate`  — step size; keep in (0, 1) for stable descent on
///                      the quadratic objective
/// - `initial_weight` — starting value of the scalar weight
/// - `target`         — value the weight should converge toward
pub struct DescentConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub initial_weight: f64,
    pub target: f64,
}

impl DescentConfig {
    /// Creates a `DescentConfig` with the demo's starting point (weight 5.0
    /// chasing target 10.0).
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        DescentConfig {
            epochs,
            learning_rate,
            initial_weight: 5.0,
            target: 10.0,
        }
    }
}

impl Default for DescentConfig {
    fn default() -> Self {
        DescentConfig::new(100, 0.01)
    }
}
