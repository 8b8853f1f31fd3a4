use crate::descent::config::DescentConfig;
use crate::descent::step::DescentStep;
use crate::optim::sgd::Sgd;

/// Minimizes the squared error `(target - weight)²` by plain gradient
/// descent and returns the per-epoch history.
///
/// The model is a single scalar weight whose "prediction" is its own
/// value, so the loss curve shows nothing but the optimizer at work.
/// Each epoch records the current weight and loss, then steps along
/// `-∂L/∂w = 2·(target - weight)`.
pub fn descend(config: &DescentConfig) -> Vec<DescentStep> {
    let optimizer = Sgd::new(config.learning_rate);
    let mut weight = config.initial_weight;
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let prediction = weight;
        let loss = (config.target - prediction).powi(2);
        history.push(DescentStep { epoch, weight, loss });

        let gradient = -2.0 * (config.target - prediction);
        weight = optimizer.step(weight, gradient);
    }

    history
}
