pub mod analysis;
pub mod confidence;
pub mod engine;
pub mod float_range;
pub mod probability;
pub mod types;

pub use analysis::{analyze_contract, ContractAnalysis};
pub use confidence::{ConfidenceEntry, ConfidenceTable};
pub use engine::{
    break_even_probability, outcome_prices, profit_probability, EvEngineConfig,
    ExpectedValueEngine,
};
pub use float_range::{
    estimate_float_statistics, FloatRange, FloatStatistics, OutputFloatModel,
    StatisticalApproximation,
};
pub use probability::{
    compute_outcome_distribution, compute_outcome_distribution_with, uniform_outcome_probabilities,
    wear_distribution, OutcomeFilter, PassThrough, ProbabilityDistribution, WearOverlapFilter,
};
pub use types::{EvResult, OutcomeCandidate, RiskMetrics, UncertaintyEstimate};
