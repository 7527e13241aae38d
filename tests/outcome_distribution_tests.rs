use tradeup_ev::ev::{
    compute_outcome_distribution, compute_outcome_distribution_with, estimate_float_statistics,
    StatisticalApproximation, WearOverlapFilter,
};
use tradeup_ev::{Item, WearTier};

const EPS: f64 = 1e-9;

fn inputs(floats: &[f64]) -> Vec<Item> {
    floats
        .iter()
        .enumerate()
        .map(|(i, f)| {
            Item::new(format!("input-{}", i), "The Mirage Collection", "Mil-Spec Grade", *f, 40)
                .unwrap()
        })
        .collect()
}

fn pool() -> Vec<Item> {
    vec![
        Item::new("MAC-10 | Amber Fade (Field-Tested)", "The Mirage Collection", "Restricted", 0.2, 300).unwrap(),
        Item::new("MP7 | Gunsmoke (Field-Tested)", "The Mirage Collection", "Restricted", 0.2, 120).unwrap(),
        Item::new("UMP-45 | Blaze (Factory New)", "The Mirage Collection", "Restricted", 0.03, 900).unwrap(),
    ]
}

#[test]
fn float_statistics_match_sample_variance() {
    let items = inputs(&[0.10, 0.12, 0.14, 0.16, 0.18, 0.20, 0.22, 0.24, 0.26, 0.28]);
    let stats = estimate_float_statistics(&items);
    assert!((stats.mean - 0.19).abs() < EPS);
    // sum of squared deviations = 0.033, divided by n - 1 = 9
    assert!((stats.variance - 0.033 / 9.0).abs() < EPS);
    assert_eq!(stats.min, 0.10);
    assert_eq!(stats.max, 0.28);
    assert_eq!(stats.count, 10);
}

#[test]
fn outcome_probabilities_are_uniform_and_sum_to_one() {
    let items = inputs(&[0.2; 10]);
    let dist = compute_outcome_distribution(&items, &pool());
    assert_eq!(dist.outcome_probabilities.len(), 3);
    for p in dist.outcome_probabilities.values() {
        assert!((p - 1.0 / 3.0).abs() < EPS);
    }
    let total: f64 = dist.outcome_probabilities.values().sum();
    assert!((total - 1.0).abs() < EPS);
}

#[test]
fn identical_floats_put_all_wear_mass_on_one_tier() {
    let items = inputs(&[0.2; 10]);
    let dist = compute_outcome_distribution(&items, &pool());
    assert_eq!(dist.wear_probability(WearTier::FieldTested), 1.0);
    assert_eq!(dist.float_variance, 0.0);
    assert!((dist.expected_float - 0.2).abs() < EPS);
    assert_eq!(dist.most_likely_wear(), Some(WearTier::FieldTested));
}

#[test]
fn inputs_on_a_tier_boundary_land_in_the_upper_tier() {
    let cases = [
        (0.07, WearTier::MinimalWear),
        (0.15, WearTier::FieldTested),
        (0.38, WearTier::WellWorn),
        (0.45, WearTier::BattleScarred),
    ];
    for (float, expected) in cases {
        let dist = compute_outcome_distribution(&inputs(&[float; 10]), &pool());
        assert_eq!(dist.expected_float, float);
        assert_eq!(dist.float_variance, 0.0);
        assert_eq!(dist.wear_probability(expected), 1.0, "float {}", float);
        assert_eq!(dist.most_likely_wear(), Some(expected));
    }
}

#[test]
fn spread_floats_produce_normalized_wear_distribution() {
    let items = inputs(&[0.01, 0.05, 0.09, 0.12, 0.2, 0.3, 0.35, 0.4, 0.5, 0.6]);
    let dist = compute_outcome_distribution(&items, &pool());
    let total: f64 = dist.wear_probabilities.values().sum();
    assert!((total - 1.0).abs() < EPS);
    assert_eq!(dist.wear_probabilities.len(), 5);
    assert!(dist.wear_probability(WearTier::FieldTested) > 0.0);
}

#[test]
fn empty_pool_has_no_outcomes_but_keeps_float_stats() {
    let items = inputs(&[0.3; 10]);
    let dist = compute_outcome_distribution(&items, &[]);
    assert!(dist.outcome_probabilities.is_empty());
    assert!((dist.expected_float - 0.3).abs() < EPS);
    assert_eq!(dist.wear_probability(WearTier::FieldTested), 1.0);
}

#[test]
fn distribution_is_deterministic() {
    let items = inputs(&[0.01, 0.05, 0.09, 0.12, 0.2, 0.3, 0.35, 0.4, 0.5, 0.6]);
    let pool = pool();
    let a = compute_outcome_distribution(&items, &pool);
    let b = compute_outcome_distribution(&items, &pool);
    assert_eq!(a, b);
}

#[test]
fn wear_filter_narrows_the_pool() {
    let items = inputs(&[0.2; 10]);
    let dist =
        compute_outcome_distribution_with(&items, &pool(), &WearOverlapFilter, &StatisticalApproximation);
    assert_eq!(dist.outcome_probabilities.len(), 2);
    assert_eq!(dist.probability_of("UMP-45 | Blaze (Factory New)"), 0.0);
    assert!((dist.probability_of("MP7 | Gunsmoke (Field-Tested)") - 0.5).abs() < EPS);
}
