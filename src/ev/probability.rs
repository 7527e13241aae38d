use std::collections::BTreeMap;

use serde::Serialize;

use crate::ev::float_range::{
    estimate_float_statistics, FloatRange, OutputFloatModel, StatisticalApproximation,
};
use crate::model::{Item, WearTier};

/// Narrows the outcome pool before probabilities are assigned.
pub trait OutcomeFilter {
    fn filter<'a>(&self, pool: &'a [Item], output_range: FloatRange) -> Vec<&'a Item>;
}

/// Keeps every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl OutcomeFilter for PassThrough {
    fn filter<'a>(&self, pool: &'a [Item], _output_range: FloatRange) -> Vec<&'a Item> {
        pool.iter().collect()
    }
}

/// Keeps candidates whose wear tier intersects the expected output range.
#[derive(Debug, Clone, Copy, Default)]
pub struct WearOverlapFilter;

impl OutcomeFilter for WearOverlapFilter {
    fn filter<'a>(&self, pool: &'a [Item], output_range: FloatRange) -> Vec<&'a Item> {
        pool.iter()
            .filter(|item| {
                let tier = item.wear();
                if output_range.is_point() {
                    tier.contains(output_range.lo)
                } else {
                    overlap(output_range, tier) > 0.0
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityDistribution {
    /// Outcome name to probability; sums to 1 over a nonempty pool.
    pub outcome_probabilities: BTreeMap<String, f64>,
    /// Every tier is present; sums to 1 whenever any weight exists.
    pub wear_probabilities: BTreeMap<WearTier, f64>,
    pub expected_float: f64,
    pub float_variance: f64,
}

impl ProbabilityDistribution {
    pub fn probability_of(&self, name: &str) -> f64 {
        self.outcome_probabilities.get(name).copied().unwrap_or(0.0)
    }

    pub fn wear_probability(&self, tier: WearTier) -> f64 {
        self.wear_probabilities.get(&tier).copied().unwrap_or(0.0)
    }

    pub fn most_likely_wear(&self) -> Option<WearTier> {
        self.wear_probabilities
            .iter()
            .filter(|(_, p)| **p > 0.0)
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(tier, _)| *tier)
    }
}

/// Uniform `1 / N` per pool entry. Entries sharing a name pool their mass.
pub fn uniform_outcome_probabilities(pool: &[&Item]) -> BTreeMap<String, f64> {
    if pool.is_empty() {
        return BTreeMap::new();
    }
    let p = 1.0 / pool.len() as f64;
    pool.iter().fold(BTreeMap::new(), |mut acc, item| {
        *acc.entry(item.name().to_string()).or_insert(0.0) += p;
        acc
    })
}

fn overlap(range: FloatRange, tier: WearTier) -> f64 {
    let lo = range.lo.max(tier.min_float());
    let hi = range.hi.min(tier.max_float());
    (hi - lo).max(0.0)
}

/// Spread probability over wear tiers in proportion to their overlap with `range`.
pub fn wear_distribution(range: FloatRange) -> BTreeMap<WearTier, f64> {
    let raw: Vec<(WearTier, f64)> = if range.is_point() {
        let tier = WearTier::from_float(range.lo);
        WearTier::ALL
            .into_iter()
            .map(|t| (t, if t == tier { 1.0 } else { 0.0 }))
            .collect()
    } else {
        let width = range.width();
        WearTier::ALL
            .into_iter()
            .map(|t| (t, overlap(range, t) / width))
            .collect()
    };

    let total: f64 = raw.iter().map(|(_, w)| w).sum();
    raw.into_iter()
        .map(|(t, w)| (t, if total > 0.0 { w / total } else { 0.0 }))
        .collect()
}

fn empty_wear_distribution() -> BTreeMap<WearTier, f64> {
    WearTier::ALL.into_iter().map(|t| (t, 0.0)).collect()
}

/// Outcome and wear distribution using the given filter and float model.
pub fn compute_outcome_distribution_with<F, M>(
    items: &[Item],
    pool: &[Item],
    filter: &F,
    float_model: &M,
) -> ProbabilityDistribution
where
    F: OutcomeFilter + ?Sized,
    M: OutputFloatModel + ?Sized,
{
    let stats = estimate_float_statistics(items);
    let output_range = float_model.output_range(&stats);
    let candidates = filter.filter(pool, output_range);

    let wear_probabilities = if stats.count == 0 {
        empty_wear_distribution()
    } else {
        wear_distribution(output_range)
    };

    ProbabilityDistribution {
        outcome_probabilities: uniform_outcome_probabilities(&candidates),
        wear_probabilities,
        expected_float: stats.mean,
        float_variance: stats.variance,
    }
}

pub fn compute_outcome_distribution(items: &[Item], pool: &[Item]) -> ProbabilityDistribution {
    compute_outcome_distribution_with(items, pool, &PassThrough, &StatisticalApproximation)
}
