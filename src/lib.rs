pub mod loss;
pub mod optim;
pub mod descent;
pub mod chart;

// Convenience re-exports
pub use loss::error::LossError;
pub use loss::mse::MseLoss;
pub use loss::mae::MaeLoss;
pub use loss::bce::BceLoss;
pub use loss::loss_type::LossType;
pub use optim::sgd::Sgd;
pub use descent::runner::descend;
pub use chart::line_chart::LineChart;
