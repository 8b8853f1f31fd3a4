use lossfn::{BceLoss, LossError};

// Spam classification: binary labels against predicted probabilities.
// The bad model hovers near 0.5 on everything; the good model commits.
fn main() -> Result<(), LossError> {
    let labels = [1.0, 0.0, 1.0, 1.0, 0.0];
    let bad_model = [0.4, 0.6, 0.3, 0.5, 0.7];
    let good_model = [0.95, 0.05, 0.92, 0.88, 0.08];

    println!("Labels (1 = spam): {labels:?}");

    println!("\nBad model probabilities: {bad_model:?}");
    println!("  BCE = {:.3}", BceLoss::loss(&bad_model, &labels)?);

    println!("\nGood model probabilities: {good_model:?}");
    println!("  BCE = {:.3}", BceLoss::loss(&good_model, &labels)?);

    Ok(())
}
