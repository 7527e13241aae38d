use serde::Serialize;

use crate::ev::float_range::FloatRange;
use crate::model::Item;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeCandidate {
    pub item: Item,
    pub probability: f64,
    /// Nominal tag taken from the input min/max float spread.
    pub float_range: FloatRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvResult {
    pub total_input_cost: u64,
    pub expected_output_value: f64,
    pub expected_profit: f64,
    /// 0 when the input cost is 0.
    pub profit_margin_percent: f64,
    pub outcomes: Vec<OutcomeCandidate>,
    /// 1.0 when no outcome reaches the input cost.
    pub break_even_probability: f64,
}

impl EvResult {
    pub fn is_profitable(&self) -> bool {
        self.expected_profit > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UncertaintyEstimate {
    /// Expected profit, net of the input cost.
    pub expected_value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub profit_probability: f64,
    pub standard_deviation: f64,
    pub confidence_level: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskMetrics {
    pub max_loss: f64,
    pub max_gain: f64,
    pub expected_return_percent: f64,
    pub risk_percent: f64,
    /// `f64::INFINITY` when risk is exactly zero.
    pub sharpe_ratio: f64,
    pub loss_probability: f64,
}

impl RiskMetrics {
    pub fn is_riskless(&self) -> bool {
        self.sharpe_ratio.is_infinite()
    }
}
