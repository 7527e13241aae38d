use tradeup_ev::ev::{compute_outcome_distribution, outcome_prices, ExpectedValueEngine};
use tradeup_ev::Item;

const EPS: f64 = 1e-9;

fn inputs() -> Vec<Item> {
    (0..10)
        .map(|i| Item::new(format!("input-{}", i), "c", "Classified", 0.25, 15).unwrap())
        .collect()
}

#[test]
fn max_loss_and_gain_follow_price_extremes() {
    let pool = vec![
        Item::new("A", "c", "Covert", 0.2, 100).unwrap(),
        Item::new("B", "c", "Covert", 0.2, 300).unwrap(),
    ];
    let dist = compute_outcome_distribution(&inputs(), &pool);
    let risk = ExpectedValueEngine::default().compute_risk_metrics(&dist, &outcome_prices(&pool), 150);

    assert!((risk.max_loss - 50.0).abs() < EPS);
    assert!((risk.max_gain - 150.0).abs() < EPS);
    assert!((risk.expected_return_percent - 100.0 / 3.0).abs() < 1e-6);
    // returns are -1/3 and +1 around a mean of 1/3
    assert!((risk.risk_percent - 200.0 / 3.0).abs() < 1e-6);
    assert!((risk.sharpe_ratio - 0.5).abs() < 1e-9);
    assert!((risk.loss_probability - 0.5).abs() < EPS);
    assert!(!risk.is_riskless());
}

#[test]
fn single_outcome_has_zero_risk_and_infinite_sharpe() {
    let pool = vec![Item::new("only", "c", "Covert", 0.2, 180).unwrap()];
    let dist = compute_outcome_distribution(&inputs(), &pool);
    let risk = ExpectedValueEngine::default().compute_risk_metrics(&dist, &outcome_prices(&pool), 150);

    assert_eq!(risk.risk_percent, 0.0);
    assert_eq!(risk.sharpe_ratio, f64::INFINITY);
    assert!(risk.is_riskless());
    assert_eq!(risk.loss_probability, 0.0);
}

#[test]
fn zero_input_cost_has_zero_return() {
    let pool = vec![
        Item::new("A", "c", "Covert", 0.2, 100).unwrap(),
        Item::new("B", "c", "Covert", 0.2, 300).unwrap(),
    ];
    let dist = compute_outcome_distribution(&inputs(), &pool);
    let risk = ExpectedValueEngine::default().compute_risk_metrics(&dist, &outcome_prices(&pool), 0);
    assert_eq!(risk.expected_return_percent, 0.0);
    assert_eq!(risk.risk_percent, 0.0);
    assert!(risk.sharpe_ratio.is_infinite());
    assert_eq!(risk.max_loss, -100.0);
}
