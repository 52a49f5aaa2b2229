//! Choice of the comparison procedure from the assumption checks.
//!
//! [`select`] is a pure decision function. It is called once after both
//! normality p-values are known and, if it asks for it, a second time with the
//! variance p-value.

use serde::Serialize;

/// Normality is accepted when both Shapiro–Wilk p-values exceed this.
pub const NORMALITY_ALPHA: f64 = 0.05;

/// Equal variances are accepted when the Levene p-value exceeds this.
pub const VARIANCE_ALPHA: f64 = 0.05;

/// Threshold for the verdict on the comparison itself.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// The one-sided comparison procedure that was run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum TestChoice {
    #[display("t-test (equal variances)")]
    PooledTTest,
    #[display("Welch's t-test (unequal variances)")]
    WelchTTest,
    #[display("Mann-Whitney U test")]
    MannWhitneyU,
}

impl TestChoice {
    /// Returns `true` for the parametric procedures, which compare means.
    #[must_use]
    pub fn is_t_test(self) -> bool {
        matches!(self, Self::PooledTTest | Self::WelchTTest)
    }
}

/// Outcome of one call to [`select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Both samples look normal; the variance check has to run first.
    NeedsVarianceAssessment,
    Decided(TestChoice),
}

/// Maps assumption-check p-values to a [`Selection`].
///
/// Both thresholds use a strict `>`: a p-value of exactly 0.05 fails the check.
///
/// # Examples
///
/// ```
/// use sickday_analysis::selection::{self, Selection, TestChoice};
///
/// assert_eq!(
///     selection::select(0.9, 0.9, None),
///     Selection::NeedsVarianceAssessment
/// );
/// assert_eq!(
///     selection::select(0.9, 0.9, Some(0.01)),
///     Selection::Decided(TestChoice::WelchTTest)
/// );
/// assert_eq!(
///     selection::select(0.01, 0.9, None),
///     Selection::Decided(TestChoice::MannWhitneyU)
/// );
/// ```
#[must_use]
pub fn select(normality_p_a: f64, normality_p_b: f64, variance_p: Option<f64>) -> Selection {
    let both_normal = normality_p_a > NORMALITY_ALPHA && normality_p_b > NORMALITY_ALPHA;
    if !both_normal {
        return Selection::Decided(TestChoice::MannWhitneyU);
    }
    match variance_p {
        None => Selection::NeedsVarianceAssessment,
        Some(p) if p > VARIANCE_ALPHA => Selection::Decided(TestChoice::PooledTTest),
        Some(_) => Selection::Decided(TestChoice::WelchTTest),
    }
}
