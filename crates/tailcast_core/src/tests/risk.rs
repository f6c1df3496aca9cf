use crate::error::{ConfigError, RiskError};
use crate::risk::evaluate;

#[test]
fn five_point_scenario() {
    let terminal = [90.0, 95.0, 100.0, 105.0, 110.0];
    let report = evaluate(&terminal, 100.0, 80.0).unwrap();

    // 20th percentile by linear interpolation: rank 0.2 * 4 = 0.8,
    // between 90 and 95 -> 94.0
    assert!((report.price_at_var - 94.0).abs() < 1e-12);
    assert!((report.value_at_risk - 6.0).abs() < 1e-12);
    // Tail at or below 94.0 is just {90}
    assert!((report.price_at_cvar - 90.0).abs() < 1e-12);
    assert!((report.conditional_value_at_risk - 10.0).abs() < 1e-12);
    assert!((report.mean_price - 100.0).abs() < 1e-12);
    assert!(report.mean_loss.abs() < 1e-12);
}

#[test]
fn cvar_is_at_least_var() {
    let terminal = [
        60.0, 72.0, 81.0, 88.0, 95.0, 99.0, 104.0, 111.0, 120.0, 133.0,
    ];
    let report = evaluate(&terminal, 100.0, 90.0).unwrap();
    assert!(report.conditional_value_at_risk >= report.value_at_risk);
}

#[test]
fn gains_produce_negative_losses() {
    let terminal = [150.0, 160.0, 170.0];
    let report = evaluate(&terminal, 100.0, 50.0).unwrap();

    assert!(report.value_at_risk < 0.0);
    assert!(report.conditional_value_at_risk < 0.0);
    assert!(report.mean_loss < 0.0);
}

#[test]
fn single_terminal_price() {
    let report = evaluate(&[80.0], 100.0, 95.0).unwrap();

    assert_eq!(report.price_at_var, 80.0);
    assert_eq!(report.price_at_cvar, 80.0);
    assert_eq!(report.value_at_risk, 20.0);
    assert_eq!(report.conditional_value_at_risk, 20.0);
    assert_eq!(report.mean_price, 80.0);
}

#[test]
fn confidence_bounds_are_exclusive() {
    for level in [0.0, 100.0, -1.0, 250.0, f64::NAN] {
        let err = evaluate(&[90.0, 100.0], 100.0, level).unwrap_err();
        assert!(
            matches!(err, RiskError::Config(ConfigError::ConfidenceOutOfRange(_))),
            "level {level}"
        );
    }
}

#[test]
fn empty_terminal_prices_are_rejected() {
    let err = evaluate(&[], 100.0, 95.0).unwrap_err();
    assert!(matches!(
        err,
        RiskError::Config(ConfigError::EmptyTerminalPrices)
    ));
}

#[test]
fn input_order_does_not_matter() {
    let shuffled = evaluate(&[110.0, 90.0, 105.0, 95.0, 100.0], 100.0, 80.0).unwrap();
    let sorted = evaluate(&[90.0, 95.0, 100.0, 105.0, 110.0], 100.0, 80.0).unwrap();
    assert_eq!(shuffled, sorted);
}
