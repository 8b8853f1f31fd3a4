pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one gradient-descent update to a scalar weight and returns
    /// the new value.
    pub fn step(&self, weight: f64, gradient: f64) -> f64 {
        weight - self.learning_rate * gradient
    }
}
