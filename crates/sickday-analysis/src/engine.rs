//! Orchestration of the assumption checks, the selector, and the comparison.

use sickday_stats::variance::LeveneCenter;

use crate::{
    assessor::{
        Comparator, LeveneAssessor, NormalityAssessor, ShapiroWilkAssessor, StandardComparator,
        VarianceAssessor,
    },
    error::AnalysisError,
    grouping::{self, FilterCriterion, GroupingMode, Sample},
    record::Record,
    result::{AnalysisReport, ComparisonResult, GroupSummary, VarianceResult},
    selection::{self, Selection},
};

/// Groups smaller than this get a warning: the tests have little power.
pub const SMALL_GROUP_LEN: usize = 10;

/// Runs the full decision procedure on two samples.
///
/// 1. Both samples are checked for normality.
/// 2. If both pass, variances are compared.
/// 3. The selector picks pooled t, Welch t, or Mann–Whitney U.
/// 4. The chosen one-sided comparison runs with the alternative "A > B".
///
/// Any error aborts the run and is returned unchanged.
#[derive(Debug, Clone)]
pub struct HypothesisEngine<N = ShapiroWilkAssessor, V = LeveneAssessor, C = StandardComparator>
{
    normality: N,
    variance: V,
    comparator: C,
}

impl HypothesisEngine {
    /// Creates an engine with the standard assessors.
    #[must_use]
    pub fn new(levene_center: LeveneCenter) -> Self {
        Self::with_assessors(
            ShapiroWilkAssessor,
            LeveneAssessor::new(levene_center),
            StandardComparator,
        )
    }
}

impl<N, V, C> HypothesisEngine<N, V, C>
where
    N: NormalityAssessor,
    V: VarianceAssessor,
    C: Comparator,
{
    #[must_use]
    pub fn with_assessors(normality: N, variance: V, comparator: C) -> Self {
        Self {
            normality,
            variance,
            comparator,
        }
    }

    /// Compares sample `a` against sample `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_analysis::{
    ///     engine::HypothesisEngine, grouping::Sample, selection::TestChoice,
    /// };
    /// use sickday_stats::variance::LeveneCenter;
    ///
    /// let men = Sample::new("Men", vec![19.0, 22.0, 16.0, 29.0, 24.0, 80.0]);
    /// let women = Sample::new("Women", vec![20.0, 11.0, 17.0, 12.0]);
    /// let result = HypothesisEngine::new(LeveneCenter::Median).run(&men, &women).unwrap();
    /// assert_eq!(result.test_used, TestChoice::MannWhitneyU);
    /// assert_eq!(result.variance_p_value, None);
    /// ```
    pub fn run(&self, a: &Sample, b: &Sample) -> Result<ComparisonResult, AnalysisError> {
        let normality_a = self.normality.assess_normality(a)?;
        let normality_b = self.normality.assess_normality(b)?;
        tracing::debug!(
            group_a = %a.label,
            p_a = normality_a.p_value,
            group_b = %b.label,
            p_b = normality_b.p_value,
            "normality assessed"
        );

        let mut variance: Option<VarianceResult> = None;
        let choice = loop {
            match selection::select(
                normality_a.p_value,
                normality_b.p_value,
                variance.map(|v| v.p_value),
            ) {
                Selection::Decided(choice) => break choice,
                Selection::NeedsVarianceAssessment => {
                    let result = self.variance.assess_variance(a, b)?;
                    tracing::debug!(p = result.p_value, center = ?result.center, "variance assessed");
                    variance = Some(result);
                }
            }
        };
        tracing::debug!(test = %choice, "comparison selected");

        let comparison = self.comparator.compare(a, b, choice)?;
        tracing::debug!(
            statistic = comparison.statistic,
            p = comparison.p_value,
            "comparison finished"
        );

        Ok(ComparisonResult {
            test_used: choice,
            statistic: comparison.statistic,
            p_value: comparison.p_value,
            normality_p_values: (normality_a.p_value, normality_b.p_value),
            variance_p_value: variance.map(|v| v.p_value),
        })
    }

    /// Filters and groups `records`, then runs [`Self::run`] on the two groups.
    pub fn analyze(
        &self,
        records: &[Record],
        filter: FilterCriterion,
        mode: GroupingMode,
    ) -> Result<AnalysisReport, AnalysisError> {
        let (a, b) = grouping::group(records, filter, mode);
        for sample in [&a, &b] {
            tracing::info!(group = %sample.label, len = sample.len(), "group formed");
            if sample.len() < SMALL_GROUP_LEN {
                tracing::warn!(
                    group = %sample.label,
                    len = sample.len(),
                    "small group, test results may be unreliable"
                );
            }
        }

        let result = self.run(&a, &b)?;
        Ok(AnalysisReport {
            grouping: mode,
            filter,
            group_a: GroupSummary::from_sample(&a),
            group_b: GroupSummary::from_sample(&b),
            result,
        })
    }
}
