use std::path::Path;

use image::{Rgb, RgbImage};

use crate::chart::canvas::Canvas;

const MARGIN: i32 = 40;
const GRID_DIVISIONS: i32 = 10;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);

/// One polyline on a chart: data-space points plus a stroke color.
pub struct Series {
    pub points: Vec<(f64, f64)>,
    pub color: Rgb<u8>,
}

/// Fixed-purpose line-chart renderer for the demo plots.
///
/// Data bounds are computed from the union of all series; the plot area
/// is inset by a margin and overlaid with a light grid and two axis
/// lines. A chart with no series (or no points) renders as an empty
/// frame rather than failing.
pub struct LineChart {
    width: u32,
    height: u32,
    series: Vec<Series>,
}

impl LineChart {
    pub fn new(width: u32, height: u32) -> LineChart {
        LineChart {
            width,
            height,
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, points: Vec<(f64, f64)>, color: Rgb<u8>) {
        self.series.push(Series { points, color });
    }

    /// Data-space bounds over every series, padded when degenerate so the
    /// pixel mapping never divides by zero.
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for series in &self.series {
            for &(x, y) in &series.points {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }

        if !x_min.is_finite() {
            return (0.0, 1.0, 0.0, 1.0);
        }
        if x_min == x_max {
            x_min -= 0.5;
            x_max += 0.5;
        }
        if y_min == y_max {
            y_min -= 0.5;
            y_max += 0.5;
        }
        (x_min, x_max, y_min, y_max)
    }

    pub fn render(&self) -> RgbImage {
        let mut canvas = Canvas::new(self.width, self.height, BACKGROUND);

        let left = MARGIN;
        let right = self.width as i32 - MARGIN;
        let top = MARGIN;
        let bottom = self.height as i32 - MARGIN;
        let plot_w = (right - left) as f64;
        let plot_h = (bottom - top) as f64;

        // Grid first so series draw over it.
        for i in 1..GRID_DIVISIONS {
            let gx = left + (right - left) * i / GRID_DIVISIONS;
            let gy = top + (bottom - top) * i / GRID_DIVISIONS;
            canvas.draw_line(gx, top, gx, bottom, GRID);
            canvas.draw_line(left, gy, right, gy, GRID);
        }

        // Left and bottom axis lines.
        canvas.draw_line(left, top, left, bottom, AXIS);
        canvas.draw_line(left, bottom, right, bottom, AXIS);

        let (x_min, x_max, y_min, y_max) = self.bounds();
        let to_px = |(x, y): (f64, f64)| -> (i32, i32) {
            let px = left as f64 + (x - x_min) / (x_max - x_min) * plot_w;
            let py = bottom as f64 - (y - y_min) / (y_max - y_min) * plot_h;
            (px.round() as i32, py.round() as i32)
        };

        for series in &self.series {
            for pair in series.points.windows(2) {
                let (x0, y0) = to_px(pair[0]);
                let (x1, y1) = to_px(pair[1]);
                canvas.draw_line(x0, y0, x1, y1, series.color);
            }
            // A lone point has no segment to draw; mark it instead.
            if series.points.len() == 1 {
                let (x, y) = to_px(series.points[0]);
                canvas.fill_rect(x - 1, y - 1, 3, 3, series.color);
            }
        }

        canvas.into_image()
    }

    /// Renders the chart and writes it as a PNG (format chosen by the
    /// file extension).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.render().save(path)
    }
}
