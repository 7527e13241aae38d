use std::collections::BTreeMap;

use crate::contract::TradeupContract;
use crate::error::Result;
use crate::ev::confidence::ConfidenceTable;
use crate::ev::float_range::{estimate_float_statistics, OutputFloatModel, StatisticalApproximation};
use crate::ev::probability::{OutcomeFilter, PassThrough, ProbabilityDistribution};
use crate::ev::types::{EvResult, OutcomeCandidate, RiskMetrics, UncertaintyEstimate};
use crate::model::Item;

#[derive(Debug, Clone, Default)]
pub struct EvEngineConfig {
    pub confidence: ConfidenceTable,
}

/// Values contracts against an outcome pool.
///
/// Stateless apart from configuration; every method is a pure function of its
/// arguments and may be called concurrently.
#[derive(Debug, Clone)]
pub struct ExpectedValueEngine<F = PassThrough, M = StatisticalApproximation>
where
    F: OutcomeFilter,
    M: OutputFloatModel,
{
    cfg: EvEngineConfig,
    filter: F,
    float_model: M,
}

impl Default for ExpectedValueEngine {
    fn default() -> Self {
        Self::new(EvEngineConfig::default())
    }
}

impl ExpectedValueEngine {
    pub fn new(cfg: EvEngineConfig) -> Self {
        Self {
            cfg,
            filter: PassThrough,
            float_model: StatisticalApproximation,
        }
    }
}

impl<F: OutcomeFilter, M: OutputFloatModel> ExpectedValueEngine<F, M> {
    pub fn with_models(cfg: EvEngineConfig, filter: F, float_model: M) -> Self {
        Self {
            cfg,
            filter,
            float_model,
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn float_model(&self) -> &M {
        &self.float_model
    }

    pub fn compute_expected_value(&self, contract: &TradeupContract, pool: &[Item]) -> EvResult {
        let total_input_cost = contract.total_input_cost();
        let stats = estimate_float_statistics(contract.items());
        let output_range = self.float_model.output_range(&stats);
        let candidates = self.filter.filter(pool, output_range);

        let outcomes: Vec<OutcomeCandidate> = if candidates.is_empty() {
            Vec::new()
        } else {
            let probability = 1.0 / candidates.len() as f64;
            candidates
                .into_iter()
                .map(|item| OutcomeCandidate {
                    item: item.clone(),
                    probability,
                    float_range: stats.min_max_range(),
                })
                .collect()
        };

        let expected_output_value: f64 = outcomes
            .iter()
            .map(|o| o.probability * o.item.price() as f64)
            .sum();
        let expected_profit = expected_output_value - total_input_cost as f64;
        let profit_margin_percent = if total_input_cost == 0 {
            0.0
        } else {
            expected_profit / total_input_cost as f64 * 100.0
        };
        let break_even_probability = break_even_probability(&outcomes, total_input_cost);

        tracing::debug!(
            rarity = contract.rarity(),
            pool = pool.len(),
            outcomes = outcomes.len(),
            total_input_cost,
            expected_output_value,
            expected_profit,
            "Computed contract expected value"
        );

        EvResult {
            total_input_cost,
            expected_output_value,
            expected_profit,
            profit_margin_percent,
            outcomes,
            break_even_probability,
        }
    }

    pub fn compute_expected_value_with_uncertainty(
        &self,
        distribution: &ProbabilityDistribution,
        prices: &BTreeMap<String, u64>,
        input_cost: u64,
        confidence_level: f64,
    ) -> Result<UncertaintyEstimate> {
        let z_score = self.cfg.confidence.z_score(confidence_level).inspect_err(|e| {
            tracing::warn!(confidence_level, error = %e, "Rejected confidence level");
        })?;

        let (mean, second_moment) = weighted_price_moments(distribution, prices);
        let variance = second_moment - mean * mean;
        let standard_deviation = variance.max(0.0).sqrt();
        let expected_value = mean - input_cost as f64;
        let margin = z_score * standard_deviation;

        Ok(UncertaintyEstimate {
            expected_value,
            lower_bound: expected_value - margin,
            upper_bound: expected_value + margin,
            profit_probability: profit_probability(distribution, prices, input_cost),
            standard_deviation,
            confidence_level,
        })
    }

    pub fn compute_risk_metrics(
        &self,
        distribution: &ProbabilityDistribution,
        prices: &BTreeMap<String, u64>,
        input_cost: u64,
    ) -> RiskMetrics {
        let outcomes: Vec<(f64, f64)> = distribution
            .outcome_probabilities
            .iter()
            .map(|(name, p)| (*p, price_of(prices, name)))
            .collect();
        let cost = input_cost as f64;

        let min_price = outcomes
            .iter()
            .map(|(_, price)| *price)
            .reduce(f64::min)
            .unwrap_or(0.0);
        let max_price = outcomes
            .iter()
            .map(|(_, price)| *price)
            .reduce(f64::max)
            .unwrap_or(0.0);

        let expected_output: f64 = outcomes.iter().map(|(p, price)| p * price).sum();
        let (expected_return, variance) = if input_cost == 0 {
            (0.0, 0.0)
        } else {
            let expected_return = (expected_output - cost) / cost;
            let variance = outcomes
                .iter()
                .map(|(p, price)| {
                    let r = (price - cost) / cost - expected_return;
                    p * r * r
                })
                .sum::<f64>();
            (expected_return, variance)
        };
        let risk = variance.max(0.0).sqrt();
        let sharpe_ratio = if risk == 0.0 {
            f64::INFINITY
        } else {
            expected_return / risk
        };

        RiskMetrics {
            max_loss: cost - min_price,
            max_gain: max_price - cost,
            expected_return_percent: expected_return * 100.0,
            risk_percent: risk * 100.0,
            sharpe_ratio,
            loss_probability: 1.0 - profit_probability(distribution, prices, input_cost),
        }
    }
}

fn price_of(prices: &BTreeMap<String, u64>, name: &str) -> f64 {
    prices.get(name).copied().unwrap_or(0) as f64
}

fn weighted_price_moments(
    distribution: &ProbabilityDistribution,
    prices: &BTreeMap<String, u64>,
) -> (f64, f64) {
    distribution
        .outcome_probabilities
        .iter()
        .fold((0.0, 0.0), |(m1, m2), (name, p)| {
            let price = price_of(prices, name);
            (m1 + p * price, m2 + p * price * price)
        })
}

/// Probability mass of outcomes priced at or above `input_cost`.
///
/// Returns 0 for an empty outcome list and 1.0 when nothing reaches the cost.
pub fn break_even_probability(outcomes: &[OutcomeCandidate], input_cost: u64) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let mut reached = outcomes
        .iter()
        .filter(|o| o.item.price() >= input_cost)
        .peekable();
    if reached.peek().is_none() {
        return 1.0;
    }
    reached.map(|o| o.probability).sum()
}

/// Probability mass of outcomes priced strictly above `input_cost`.
pub fn profit_probability(
    distribution: &ProbabilityDistribution,
    prices: &BTreeMap<String, u64>,
    input_cost: u64,
) -> f64 {
    distribution
        .outcome_probabilities
        .iter()
        .filter(|(name, _)| prices.get(name.as_str()).copied().unwrap_or(0) > input_cost)
        .map(|(_, p)| p)
        .sum()
}

/// Name to price lookup for a pool. The first entry wins for repeated names.
pub fn outcome_prices(pool: &[Item]) -> BTreeMap<String, u64> {
    let mut prices = BTreeMap::new();
    for item in pool {
        prices
            .entry(item.name().to_string())
            .or_insert_with(|| item.price());
    }
    prices
}
