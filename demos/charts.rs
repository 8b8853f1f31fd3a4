use image::Rgb;
use lossfn::chart::Canvas;
use lossfn::descent::DescentConfig;
use lossfn::{descend, LineChart, MseLoss};

const BLUE: Rgb<u8> = Rgb([31, 119, 180]);
const ORANGE: Rgb<u8> = Rgb([255, 127, 14]);
const RED: Rgb<u8> = Rgb([214, 39, 40]);
const GREEN: Rgb<u8> = Rgb([44, 160, 44]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

// Renders the four explanatory plots as PNGs in the working directory.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. MSE vs MAE sensitivity: loss as a function of a single error.
    let errors = linspace(-10.0, 10.0, 100);
    let mut sensitivity = LineChart::new(640, 480);
    sensitivity.add_series(errors.iter().map(|&e| (e, e * e)).collect(), BLUE);
    sensitivity.add_series(errors.iter().map(|&e| (e, e.abs())).collect(), ORANGE);
    sensitivity.save("mse_vs_mae.png")?;
    println!("wrote mse_vs_mae.png (blue = MSE, orange = MAE)");

    // 2. The two BCE branches: cost of a probability given each true label.
    let probs = linspace(0.01, 0.99, 100);
    let mut bce = LineChart::new(640, 480);
    bce.add_series(probs.iter().map(|&p| (p, -p.ln())).collect(), BLUE);
    bce.add_series(probs.iter().map(|&p| (p, -(1.0 - p).ln())).collect(), ORANGE);
    bce.save("binary_cross_entropy.png")?;
    println!("wrote binary_cross_entropy.png (blue = label 1, orange = label 0)");

    // 3. Gradient descent: loss shrinking epoch over epoch.
    let history = descend(&DescentConfig::default());
    let mut training = LineChart::new(640, 480);
    training.add_series(
        history.iter().map(|s| (s.epoch as f64, s.loss)).collect(),
        RED,
    );
    training.save("descent.png")?;
    let last = history.last().expect("descent history is non-empty");
    println!(
        "wrote descent.png ({} epochs, final loss {:.6})",
        history.len(),
        last.loss
    );

    // 4. Bad vs good model, as two bars of MSE.
    let actual_prices = [200.0, 250.0, 180.0, 300.0, 220.0];
    let bad = MseLoss::loss(&[150.0, 280.0, 160.0, 250.0, 200.0], &actual_prices)?;
    let good = MseLoss::loss(&[198.0, 252.0, 182.0, 298.0, 218.0], &actual_prices)?;

    let mut canvas = Canvas::new(640, 480, WHITE);
    let floor = 440;
    let scale = 380.0 / bad.max(good);
    let bad_h = (bad * scale) as u32;
    let good_h = (good * scale) as u32;
    canvas.fill_rect(120, floor - bad_h as i32, 160, bad_h, RED);
    canvas.fill_rect(360, floor - good_h as i32, 160, good_h, GREEN);
    canvas.draw_line(80, floor, 600, floor, Rgb([40, 40, 40]));
    canvas.into_image().save("model_comparison.png")?;
    println!("wrote model_comparison.png (red bar MSE = {bad:.2}, green bar MSE = {good:.2})");

    Ok(())
}

fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}
