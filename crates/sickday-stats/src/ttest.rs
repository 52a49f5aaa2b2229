//! One-sided two-sample t-tests.
//!
//! Both variants test the alternative "the mean of `a` is greater than the mean
//! of `b`". The p-value is the upper tail of Student's t distribution at the
//! observed statistic, so a positive statistic means `a` has the larger mean.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::{
    descriptive::{mean, sample_variance},
    error::{StatsError, check_values},
};

/// Result of a one-sided two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTest {
    /// The t statistic, `(mean(a) - mean(b)) / standard_error`.
    pub statistic: f64,
    /// Degrees of freedom of the reference t distribution.
    pub df: f64,
    /// Upper-tail probability of the statistic.
    pub p_value: f64,
}

impl TTest {
    /// Student's t-test assuming equal population variances.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_stats::ttest::TTest;
    ///
    /// let a = [5.0, 6.0, 7.0, 8.0, 9.0];
    /// let b = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let result = TTest::pooled(&a, &b).unwrap();
    /// assert!((result.statistic - 4.0).abs() < 1e-12);
    /// assert_eq!(result.df, 8.0);
    /// assert!(result.p_value < 0.01);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn pooled(a: &[f64], b: &[f64]) -> Result<Self, StatsError> {
        let (a_summary, b_summary) = summarize_pair(a, b)?;
        let n_a = a.len() as f64;
        let n_b = b.len() as f64;

        let df = n_a + n_b - 2.0;
        let pooled_variance =
            ((n_a - 1.0) * a_summary.variance + (n_b - 1.0) * b_summary.variance) / df;
        let standard_error = (pooled_variance * (1.0 / n_a + 1.0 / n_b)).sqrt();
        let statistic = (a_summary.mean - b_summary.mean) / standard_error;

        Self::from_statistic(statistic, df)
    }

    /// Welch's t-test, which does not assume equal population variances.
    ///
    /// Degrees of freedom come from the Welch–Satterthwaite equation.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_stats::ttest::TTest;
    ///
    /// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let b = [2.0, 4.0, 6.0, 8.0, 10.0];
    /// let result = TTest::welch(&a, &b).unwrap();
    /// assert!(result.statistic < 0.0);
    /// assert!(result.p_value > 0.5);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn welch(a: &[f64], b: &[f64]) -> Result<Self, StatsError> {
        let (a_summary, b_summary) = summarize_pair(a, b)?;
        let n_a = a.len() as f64;
        let n_b = b.len() as f64;

        let se_a = a_summary.variance / n_a;
        let se_b = b_summary.variance / n_b;
        let standard_error = (se_a + se_b).sqrt();
        let statistic = (a_summary.mean - b_summary.mean) / standard_error;
        let df = (se_a + se_b).powi(2) / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));

        Self::from_statistic(statistic, df)
    }

    fn from_statistic(statistic: f64, df: f64) -> Result<Self, StatsError> {
        let dist = StudentsT::new(0.0, 1.0, df).map_err(StatsError::distribution)?;
        let p_value = dist.sf(statistic).clamp(0.0, 1.0);
        Ok(Self {
            statistic,
            df,
            p_value,
        })
    }
}

struct Summary {
    mean: f64,
    variance: f64,
}

fn summarize(values: &[f64]) -> Result<Summary, StatsError> {
    check_values(values, 2)?;
    let variance = sample_variance(values);
    if variance <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    Ok(Summary {
        mean: mean(values),
        variance,
    })
}

fn summarize_pair(a: &[f64], b: &[f64]) -> Result<(Summary, Summary), StatsError> {
    Ok((summarize(a)?, summarize(b)?))
}
