//! Result types produced by the engine and consumed by reporters.

use serde::Serialize;
use sickday_stats::{
    descriptive::DescriptiveStats, normality::ShapiroWilk, variance::Levene,
    variance::LeveneCenter,
};

use crate::{
    grouping::{FilterCriterion, GroupingMode, Sample},
    selection::TestChoice,
};

/// Shapiro–Wilk outcome for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalityResult {
    pub statistic: f64,
    pub p_value: f64,
}

impl From<ShapiroWilk> for NormalityResult {
    fn from(test: ShapiroWilk) -> Self {
        Self {
            statistic: test.statistic,
            p_value: test.p_value,
        }
    }
}

/// Levene outcome for the pair of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VarianceResult {
    pub statistic: f64,
    pub p_value: f64,
    pub center: LeveneCenter,
}

impl From<Levene> for VarianceResult {
    fn from(test: Levene) -> Self {
        Self {
            statistic: test.statistic,
            p_value: test.p_value,
            center: test.center,
        }
    }
}

/// Statistic and p-value of the comparison that was run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub statistic: f64,
    pub p_value: f64,
}

/// Full decision trail of one engine run.
///
/// `variance_p_value` is present exactly when both normality checks passed,
/// in which case `test_used` is a t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub test_used: TestChoice,
    pub statistic: f64,
    pub p_value: f64,
    pub normality_p_values: (f64, f64),
    pub variance_p_value: Option<f64>,
}

impl ComparisonResult {
    /// Returns `true` if `p_value < alpha`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_analysis::{result::ComparisonResult, selection::TestChoice};
    ///
    /// let result = ComparisonResult {
    ///     test_used: TestChoice::MannWhitneyU,
    ///     statistic: 17.0,
    ///     p_value: 0.0556,
    ///     normality_p_values: (0.01, 0.7),
    ///     variance_p_value: None,
    /// };
    /// assert!(!result.is_significant(0.05));
    /// assert!(result.is_significant(0.1));
    /// ```
    #[must_use]
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Descriptive summary of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    /// `None` when the group is empty.
    pub stats: Option<DescriptiveStats>,
}

impl GroupSummary {
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        Self {
            label: sample.label.clone(),
            stats: DescriptiveStats::new(sample.values.iter().copied()),
        }
    }
}

/// Everything a reporter needs to present one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub grouping: GroupingMode,
    pub filter: FilterCriterion,
    pub group_a: GroupSummary,
    pub group_b: GroupSummary,
    pub result: ComparisonResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_summary_of_empty_sample() {
        let summary = GroupSummary::from_sample(&Sample::new("Men", vec![]));
        assert_eq!(summary.label, "Men");
        assert!(summary.stats.is_none());
    }

    #[test]
    fn test_group_summary_values() {
        let summary = GroupSummary::from_sample(&Sample::new("Young", vec![4.0, 1.0, 3.0, 2.0]));
        let stats = summary.stats.unwrap();
        assert_eq!(stats.len, 4);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.median, 2.5);
        assert!((stats.mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_significance_is_strict() {
        let result = ComparisonResult {
            test_used: TestChoice::PooledTTest,
            statistic: 1.8,
            p_value: 0.05,
            normality_p_values: (0.5, 0.5),
            variance_p_value: Some(0.5),
        };
        assert!(!result.is_significant(0.05));
    }
}
