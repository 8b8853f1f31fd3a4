use lossfn::{BceLoss, LossError, MaeLoss, MseLoss};
use rand::prelude::*;

#[test]
fn house_price_scenario() {
    let actual = [200.0, 250.0, 180.0, 300.0, 220.0];
    let predicted = [150.0, 280.0, 160.0, 250.0, 200.0];
    assert_eq!(MseLoss::loss(&predicted, &actual).unwrap(), 1340.0);
    assert_eq!(MaeLoss::loss(&predicted, &actual).unwrap(), 34.0);
}

#[test]
fn spam_scenario() {
    let labels = [1.0, 0.0, 1.0, 1.0, 0.0];
    let bad = [0.4, 0.6, 0.3, 0.5, 0.7];
    let good = [0.95, 0.05, 0.92, 0.88, 0.08];

    let bad_bce = BceLoss::loss(&bad, &labels).unwrap();
    let good_bce = BceLoss::loss(&good, &labels).unwrap();
    assert!((bad_bce - 0.987).abs() < 1e-3, "bad model BCE was {bad_bce}");
    assert!((good_bce - 0.079).abs() < 1e-3, "good model BCE was {good_bce}");
    assert!(good_bce < bad_bce);
}

#[test]
fn mse_punishes_outliers_harder_than_mae() {
    let actual = [0.0, 0.0, 0.0, 0.0];
    let predicted = [0.0, 0.0, 0.0, 10.0];
    let mse = MseLoss::loss(&predicted, &actual).unwrap();
    let mae = MaeLoss::loss(&predicted, &actual).unwrap();
    assert_eq!(mse, 25.0);
    assert_eq!(mae, 2.5);
    assert_eq!(mse / mae, 10.0);
}

#[test]
fn bce_clamp_keeps_total_confidence_finite() {
    let loss = BceLoss::loss(&[0.0], &[1.0]).unwrap();
    assert!(loss.is_finite());
    assert!((loss - (-(1e-7f64.ln()))).abs() < 1e-9);

    let opposite = BceLoss::loss(&[1.0], &[0.0]).unwrap();
    assert!(opposite.is_finite());
}

#[test]
fn regression_losses_are_non_negative_and_symmetric() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let n = rng.gen_range(1..=32);
        let a: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() * 20.0 - 10.0).collect();
        let b: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() * 20.0 - 10.0).collect();

        let mse = MseLoss::loss(&a, &b).unwrap();
        let mae = MaeLoss::loss(&a, &b).unwrap();
        assert!(mse >= 0.0);
        assert!(mae >= 0.0);
        // Same elementwise terms in the same order, so exact equality holds.
        assert_eq!(mse, MseLoss::loss(&b, &a).unwrap());
        assert_eq!(mae, MaeLoss::loss(&b, &a).unwrap());
    }
}

#[test]
fn zero_loss_only_for_identical_sequences() {
    let v = [1.0, 2.0, 3.0];
    assert_eq!(MseLoss::loss(&v, &v).unwrap(), 0.0);
    assert_eq!(MaeLoss::loss(&v, &v).unwrap(), 0.0);

    let mut w = v;
    w[1] += 1e-6;
    assert!(MseLoss::loss(&w, &v).unwrap() > 0.0);
    assert!(MaeLoss::loss(&w, &v).unwrap() > 0.0);
}

#[test]
fn every_loss_rejects_mismatched_lengths() {
    let long = [1.0, 2.0, 3.0];
    let short = [1.0];
    let expected = LossError::ShapeMismatch { predicted: 3, expected: 1 };
    assert_eq!(MseLoss::loss(&long, &short).unwrap_err(), expected);
    assert_eq!(MaeLoss::loss(&long, &short).unwrap_err(), expected);
    assert_eq!(BceLoss::loss(&long, &short).unwrap_err(), expected);
}

#[test]
fn every_loss_rejects_empty_input() {
    assert_eq!(MseLoss::loss(&[], &[]).unwrap_err(), LossError::EmptyInput);
    assert_eq!(MaeLoss::loss(&[], &[]).unwrap_err(), LossError::EmptyInput);
    assert_eq!(BceLoss::loss(&[], &[]).unwrap_err(), LossError::EmptyInput);
}

#[test]
fn bce_rejects_non_binary_labels() {
    let err = BceLoss::loss(&[0.2, 0.9], &[0.0, 0.5]).unwrap_err();
    assert_eq!(err, LossError::DomainViolation { index: 1, value: 0.5 });
}
