use serde::Serialize;

use crate::contract::TradeupContract;
use crate::error::Result;
use crate::ev::engine::{outcome_prices, ExpectedValueEngine};
use crate::ev::float_range::{estimate_float_statistics, FloatStatistics, OutputFloatModel};
use crate::ev::probability::{
    compute_outcome_distribution_with, OutcomeFilter, ProbabilityDistribution,
};
use crate::ev::types::{EvResult, RiskMetrics, UncertaintyEstimate};
use crate::model::Item;

/// Everything a reporting layer needs about one contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractAnalysis {
    pub input_rarity: String,
    pub float_statistics: FloatStatistics,
    pub distribution: ProbabilityDistribution,
    pub expected_value: EvResult,
    pub uncertainty: UncertaintyEstimate,
    pub risk: RiskMetrics,
}

pub fn analyze_contract<F, M>(
    engine: &ExpectedValueEngine<F, M>,
    contract: &TradeupContract,
    pool: &[Item],
    confidence_level: f64,
) -> Result<ContractAnalysis>
where
    F: OutcomeFilter,
    M: OutputFloatModel,
{
    let float_statistics = estimate_float_statistics(contract.items());
    let distribution = compute_outcome_distribution_with(
        contract.items(),
        pool,
        engine.filter(),
        engine.float_model(),
    );
    let prices = outcome_prices(pool);
    let input_cost = contract.total_input_cost();

    let expected_value = engine.compute_expected_value(contract, pool);
    let uncertainty = engine.compute_expected_value_with_uncertainty(
        &distribution,
        &prices,
        input_cost,
        confidence_level,
    )?;
    let risk = engine.compute_risk_metrics(&distribution, &prices, input_cost);

    tracing::info!(
        rarity = contract.rarity(),
        expected_profit = expected_value.expected_profit,
        profit_probability = uncertainty.profit_probability,
        sharpe_ratio = risk.sharpe_ratio,
        "Analyzed trade-up contract"
    );

    Ok(ContractAnalysis {
        input_rarity: contract.rarity().to_string(),
        float_statistics,
        distribution,
        expected_value,
        uncertainty,
        risk,
    })
}
