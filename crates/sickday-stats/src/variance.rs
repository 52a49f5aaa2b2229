//! Levene's test for equality of variances between two samples.
//!
//! Each value is replaced by its absolute deviation from the group center and a
//! one-way ANOVA is run on the deviations. With two groups the statistic follows
//! `F(1, N - 2)` under the null hypothesis of equal variances.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::{
    descriptive::{mean, median},
    error::{StatsError, check_values},
};

/// Center used to compute absolute deviations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeveneCenter {
    /// Classic Levene test.
    Mean,
    /// Brown–Forsythe variant, robust to non-normal data.
    #[default]
    Median,
}

/// Result of Levene's test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Levene {
    /// The W statistic (an F statistic on the absolute deviations).
    pub statistic: f64,
    /// Probability of a statistic at least this large under equal variances.
    pub p_value: f64,
    /// Center the deviations were taken from.
    pub center: LeveneCenter,
}

impl Levene {
    /// Runs the test on two samples.
    ///
    /// Each sample needs at least two values. Fails with [`StatsError::ZeroVariance`]
    /// when there is no dispersion of deviations within either group.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_stats::variance::{Levene, LeveneCenter};
    ///
    /// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let b = [2.0, 4.0, 6.0, 8.0, 10.0];
    /// let result = Levene::test(&a, &b, LeveneCenter::Median).unwrap();
    /// assert!((result.statistic - 2.057_142_857).abs() < 1e-6);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn test(a: &[f64], b: &[f64], center: LeveneCenter) -> Result<Self, StatsError> {
        check_values(a, 2)?;
        check_values(b, 2)?;

        let za = deviations(a, center);
        let zb = deviations(b, center);
        let total = (za.len() + zb.len()) as f64;

        let mean_a = mean(&za);
        let mean_b = mean(&zb);
        let grand_mean = (za.iter().sum::<f64>() + zb.iter().sum::<f64>()) / total;

        let between = za.len() as f64 * (mean_a - grand_mean).powi(2)
            + zb.len() as f64 * (mean_b - grand_mean).powi(2);
        let within = za.iter().map(|z| (z - mean_a).powi(2)).sum::<f64>()
            + zb.iter().map(|z| (z - mean_b).powi(2)).sum::<f64>();
        if within <= 0.0 {
            return Err(StatsError::ZeroVariance);
        }

        let df_within = total - 2.0;
        let statistic = df_within * between / within;
        let dist = FisherSnedecor::new(1.0, df_within).map_err(StatsError::distribution)?;
        let p_value = dist.sf(statistic).clamp(0.0, 1.0);

        Ok(Self {
            statistic,
            p_value,
            center,
        })
    }
}

fn deviations(values: &[f64], center: LeveneCenter) -> Vec<f64> {
    let c = match center {
        LeveneCenter::Mean => mean(values),
        LeveneCenter::Median => median(values),
    };
    values.iter().map(|v| (v - c).abs()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_centered_statistic() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let result = Levene::test(&a, &b, LeveneCenter::Median).unwrap();
        assert!((result.statistic - 2.057_142_857).abs() < 1e-6);
        // F(1, 8) tail at 2.057 is the two-sided t(8) tail at 1.434
        assert!(result.p_value > 0.15 && result.p_value < 0.25);
        assert_eq!(result.center, LeveneCenter::Median);
    }

    #[test]
    fn test_mean_centered_statistic() {
        // symmetric groups: mean and median centers coincide
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let by_mean = Levene::test(&a, &b, LeveneCenter::Mean).unwrap();
        let by_median = Levene::test(&a, &b, LeveneCenter::Median).unwrap();
        assert!((by_mean.statistic - by_median.statistic).abs() < 1e-12);
    }

    #[test]
    fn test_equal_spread_is_not_significant() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [11.0, 12.0, 13.0, 14.0, 15.0];
        let result = Levene::test(&a, &b, LeveneCenter::Median).unwrap();
        assert!(result.statistic.abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_very_different_spread_is_significant() {
        let a = [2.9, 3.0, 3.1, 3.0, 2.95, 3.05, 3.0, 2.9, 3.1, 3.0];
        let b = [0.0, 6.0, 1.0, 5.0, 0.5, 5.5, 2.0, 4.0, 0.2, 5.8];
        let result = Levene::test(&a, &b, LeveneCenter::Median).unwrap();
        assert!(result.p_value < 0.01);
    }

    #[test]
    fn test_requires_two_values_per_group() {
        assert_eq!(
            Levene::test(&[1.0], &[1.0, 2.0], LeveneCenter::Median),
            Err(StatsError::TooFewValues { len: 1, min_len: 2 })
        );
    }

    #[test]
    fn test_constant_groups_are_degenerate() {
        assert_eq!(
            Levene::test(&[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0], LeveneCenter::Median),
            Err(StatsError::ZeroVariance)
        );
    }
}
