use serde::Serialize;

use crate::model::Item;

/// Closed float interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatRange {
    pub lo: f64,
    pub hi: f64,
}

impl FloatRange {
    pub fn width(&self) -> f64 {
        (self.hi - self.lo).max(0.0)
    }

    pub fn is_point(&self) -> bool {
        self.hi <= self.lo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FloatStatistics {
    pub mean: f64,
    /// Sample variance (n - 1 denominator); 0 for fewer than two values.
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl FloatStatistics {
    pub fn from_floats(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            // Identical inputs: keep the mean exactly on the value.
            return Self {
                mean: min,
                variance: 0.0,
                min,
                max,
                count: values.len(),
            };
        }

        let n = values.len() as f64;
        let naive = values.iter().sum::<f64>() / n;
        // Second pass removes the rounding error left by the plain sum.
        let mean = (naive + values.iter().map(|v| v - naive).sum::<f64>() / n).clamp(min, max);
        let variance = if values.len() >= 2 {
            values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        Self {
            mean,
            variance,
            min,
            max,
            count: values.len(),
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.max(0.0).sqrt()
    }

    /// `mean ± one standard deviation`, clamped to `[0, 1]`.
    pub fn statistical_range(&self) -> FloatRange {
        let sd = self.std_dev();
        FloatRange {
            lo: (self.mean - sd).clamp(0.0, 1.0),
            hi: (self.mean + sd).clamp(0.0, 1.0),
        }
    }

    /// Observed input spread; only used to tag outcome candidates.
    pub fn min_max_range(&self) -> FloatRange {
        FloatRange {
            lo: self.min,
            hi: self.max,
        }
    }
}

pub fn estimate_float_statistics(items: &[Item]) -> FloatStatistics {
    let floats: Vec<f64> = items.iter().map(Item::float_value).collect();
    FloatStatistics::from_floats(&floats)
}

/// Maps input float statistics to the range an output float is expected in.
///
/// The in-game output float also depends on each outcome item's own min/max
/// float bounds. That data is not modelled here, so the default model is an
/// approximation based only on the input spread.
pub trait OutputFloatModel {
    fn output_range(&self, stats: &FloatStatistics) -> FloatRange;
}

/// Output float assumed to lie within one standard deviation of the input mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalApproximation;

impl OutputFloatModel for StatisticalApproximation {
    fn output_range(&self, stats: &FloatStatistics) -> FloatRange {
        stats.statistical_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_variance_uses_n_minus_one() {
        let stats = FloatStatistics::from_floats(&[0.1, 0.2, 0.3]);
        assert!((stats.mean - 0.2).abs() < 1e-12);
        assert!((stats.variance - 0.01).abs() < 1e-12);
        assert_eq!(stats.min, 0.1);
        assert_eq!(stats.max, 0.3);
    }

    #[test]
    fn single_value_has_zero_variance_and_point_range() {
        let stats = FloatStatistics::from_floats(&[0.25]);
        assert_eq!(stats.variance, 0.0);
        let range = stats.statistical_range();
        assert!(range.is_point());
        assert_eq!(range.lo, 0.25);
    }

    #[test]
    fn identical_values_stay_exactly_on_their_float() {
        for value in [0.07, 0.15, 0.2, 0.38, 0.45] {
            let stats = FloatStatistics::from_floats(&[value; 10]);
            assert_eq!(stats.mean, value);
            assert_eq!(stats.variance, 0.0);
            let range = stats.statistical_range();
            assert!(range.is_point(), "{value}: {:?}", range);
            assert_eq!(range.lo, value);
        }
    }

    #[test]
    fn statistical_range_is_clamped() {
        let stats = FloatStatistics::from_floats(&[0.0, 0.0, 0.9]);
        let range = stats.statistical_range();
        assert_eq!(range.lo, 0.0);
        assert!(range.hi <= 1.0);
    }

    #[test]
    fn ranges_are_independent() {
        let stats = FloatStatistics::from_floats(&[0.1, 0.1, 0.1, 0.4]);
        let stat = stats.statistical_range();
        let mm = stats.min_max_range();
        assert_eq!(mm.lo, 0.1);
        assert_eq!(mm.hi, 0.4);
        // mean 0.175, sd 0.15
        assert!((stat.lo - 0.025).abs() < 1e-12);
        assert!((stat.hi - 0.325).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_zeroed_statistics() {
        let stats = FloatStatistics::from_floats(&[]);
        assert_eq!(stats, FloatStatistics::default());
    }
}
