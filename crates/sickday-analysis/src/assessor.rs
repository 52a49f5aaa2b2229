//! Effectful test runners behind the engine.
//!
//! The engine talks to these traits only, so decision logic can be driven by
//! fakes in tests. The default implementations delegate to `sickday-stats`.

use sickday_stats::{
    StatsError, mann_whitney::MannWhitneyU, normality::ShapiroWilk, ttest::TTest,
    variance::{Levene, LeveneCenter},
};

use crate::{
    error::AnalysisError,
    grouping::Sample,
    result::{Comparison, NormalityResult, VarianceResult},
    selection::TestChoice,
};

/// Runs a normality test on one sample.
pub trait NormalityAssessor {
    fn assess_normality(&self, sample: &Sample) -> Result<NormalityResult, AnalysisError>;
}

/// Runs a variance-homogeneity test on a pair of samples.
pub trait VarianceAssessor {
    fn assess_variance(&self, a: &Sample, b: &Sample) -> Result<VarianceResult, AnalysisError>;
}

/// Runs the chosen one-sided comparison with the alternative "`a` > `b`".
pub trait Comparator {
    fn compare(
        &self,
        a: &Sample,
        b: &Sample,
        choice: TestChoice,
    ) -> Result<Comparison, AnalysisError>;
}

/// Shapiro–Wilk normality assessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapiroWilkAssessor;

impl NormalityAssessor for ShapiroWilkAssessor {
    fn assess_normality(&self, sample: &Sample) -> Result<NormalityResult, AnalysisError> {
        ShapiroWilk::test(&sample.values)
            .map(NormalityResult::from)
            .map_err(|source| AnalysisError::InsufficientSample {
                label: sample.label.clone(),
                source,
            })
    }
}

/// Levene variance assessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeveneAssessor {
    pub center: LeveneCenter,
}

impl LeveneAssessor {
    #[must_use]
    pub fn new(center: LeveneCenter) -> Self {
        Self { center }
    }
}

impl VarianceAssessor for LeveneAssessor {
    fn assess_variance(&self, a: &Sample, b: &Sample) -> Result<VarianceResult, AnalysisError> {
        Levene::test(&a.values, &b.values, self.center)
            .map(VarianceResult::from)
            .map_err(|source| degenerate_pair(a, b, source))
    }
}

/// Comparator backed by the t-tests and the Mann–Whitney U test.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardComparator;

impl Comparator for StandardComparator {
    fn compare(
        &self,
        a: &Sample,
        b: &Sample,
        choice: TestChoice,
    ) -> Result<Comparison, AnalysisError> {
        let comparison = match choice {
            TestChoice::PooledTTest => TTest::pooled(&a.values, &b.values).map(|t| Comparison {
                statistic: t.statistic,
                p_value: t.p_value,
            }),
            TestChoice::WelchTTest => TTest::welch(&a.values, &b.values).map(|t| Comparison {
                statistic: t.statistic,
                p_value: t.p_value,
            }),
            TestChoice::MannWhitneyU => {
                MannWhitneyU::test(&a.values, &b.values).map(|u| Comparison {
                    statistic: u.statistic,
                    p_value: u.p_value,
                })
            }
        };
        comparison.map_err(|source| degenerate_pair(a, b, source))
    }
}

/// Attributes a two-sample failure to the sample that caused it, falling back
/// to both labels when the pair as a whole is degenerate.
fn degenerate_pair(a: &Sample, b: &Sample, source: StatsError) -> AnalysisError {
    let label = match &source {
        StatsError::TooFewValues { min_len, .. } if a.len() < *min_len => a.label.clone(),
        StatsError::TooFewValues { .. } => b.label.clone(),
        StatsError::NonFiniteValue if a.values.iter().any(|v| !v.is_finite()) => {
            a.label.clone()
        }
        StatsError::NonFiniteValue => b.label.clone(),
        StatsError::ZeroVariance | StatsError::Distribution { .. } => {
            format!("{} / {}", a.label, b.label)
        }
    };
    AnalysisError::DegenerateSample { label, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normality_errors_are_insufficient_sample() {
        let sample = Sample::new("Women", vec![1.0, 2.0]);
        let err = ShapiroWilkAssessor.assess_normality(&sample).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientSample {
                label: "Women".to_owned(),
                source: StatsError::TooFewValues { len: 2, min_len: 3 },
            }
        );

        let constant = Sample::new("Men", vec![4.0; 5]);
        assert!(matches!(
            ShapiroWilkAssessor.assess_normality(&constant),
            Err(AnalysisError::InsufficientSample { .. })
        ));
    }

    #[test]
    fn test_normality_result_is_forwarded() {
        let sample = Sample::new("Men", vec![1.0, 2.0, 4.0]);
        let result = ShapiroWilkAssessor.assess_normality(&sample).unwrap();
        assert!((result.statistic - 0.964_286).abs() < 1e-5);
        assert!((result.p_value - 0.636_887).abs() < 1e-4);
    }

    #[test]
    fn test_levene_assessor_uses_configured_center() {
        let a = Sample::new("A", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = Sample::new("B", vec![2.0, 4.0, 6.0, 8.0, 10.0]);
        let result = LeveneAssessor::new(LeveneCenter::Mean)
            .assess_variance(&a, &b)
            .unwrap();
        assert_eq!(result.center, LeveneCenter::Mean);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn test_comparator_reports_offending_sample() {
        let a = Sample::new("Adults", vec![1.0, 2.0, 3.0]);
        let b = Sample::new("Young", vec![]);
        let err = StandardComparator
            .compare(&a, &b, TestChoice::MannWhitneyU)
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::DegenerateSample {
                label: "Young".to_owned(),
                source: StatsError::TooFewValues { len: 0, min_len: 1 },
            }
        );
    }

    #[test]
    fn test_comparator_rejects_constant_samples_for_t_tests() {
        let a = Sample::new("Men", vec![3.0; 4]);
        let b = Sample::new("Women", vec![3.0; 4]);
        for choice in [TestChoice::PooledTTest, TestChoice::WelchTTest] {
            let err = StandardComparator.compare(&a, &b, choice).unwrap_err();
            assert!(matches!(err, AnalysisError::DegenerateSample { .. }));
        }
    }

    #[test]
    fn test_comparator_direction() {
        let high = Sample::new("Men", vec![5.0, 6.0, 7.0, 8.0, 9.0]);
        let low = Sample::new("Women", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let pooled = StandardComparator
            .compare(&high, &low, TestChoice::PooledTTest)
            .unwrap();
        assert!((pooled.statistic - 4.0).abs() < 1e-12);
        assert!((pooled.p_value - 0.001_974_9).abs() < 1e-6);

        let reversed = StandardComparator
            .compare(&low, &high, TestChoice::PooledTTest)
            .unwrap();
        assert!((reversed.p_value - (1.0 - pooled.p_value)).abs() < 1e-9);
    }
}
