pub mod config;
pub mod step;
pub mod runner;

pub use config::DescentConfig;
pub use step::DescentStep;
pub use runner::descend;
