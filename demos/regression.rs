use lossfn::{LossError, MaeLoss, MseLoss};

// House-price regression: the same five listings scored by a sloppy model
// and a careful one. MSE punishes the sloppy model's big misses much
// harder than MAE does.
fn main() -> Result<(), LossError> {
    let actual_prices = [200.0, 250.0, 180.0, 300.0, 220.0];
    let bad_model = [150.0, 280.0, 160.0, 250.0, 200.0];
    let good_model = [198.0, 252.0, 182.0, 298.0, 218.0];

    println!("House prices (thousands): {actual_prices:?}");

    println!("\nBad model predictions: {bad_model:?}");
    println!("  MSE = {:.2}", MseLoss::loss(&bad_model, &actual_prices)?);
    println!("  MAE = {:.2}", MaeLoss::loss(&bad_model, &actual_prices)?);

    println!("\nGood model predictions: {good_model:?}");
    println!("  MSE = {:.2}", MseLoss::loss(&good_model, &actual_prices)?);
    println!("  MAE = {:.2}", MaeLoss::loss(&good_model, &actual_prices)?);

    Ok(())
}
