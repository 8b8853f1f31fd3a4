pub mod canvas;
pub mod line_chart;

pub use canvas::Canvas;
pub use line_chart::{LineChart, Series};
