//! One-sided Mann–Whitney U test.
//!
//! Tests the alternative "values of `a` tend to be larger than values of `b`"
//! (stochastic dominance of `a` over `b`). The reported statistic is `U` for
//! `a`: the number of pairs `(x in a, y in b)` with `x > y`, ties counting one half.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::{
    error::{StatsError, check_values},
    rank::Ranks,
};

/// Largest per-sample size for which the exact null distribution is used.
pub const EXACT_MANN_WHITNEY_MAX_LEN: usize = 8;

/// How the p-value was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MannWhitneyMethod {
    /// Enumerated null distribution of U (small samples without ties).
    Exact,
    /// Normal approximation with tie and continuity corrections.
    Asymptotic,
}

/// Result of a one-sided Mann–Whitney U test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MannWhitneyU {
    /// The U statistic of the first sample.
    pub statistic: f64,
    /// Probability of a U at least this large when neither sample dominates.
    pub p_value: f64,
    /// How the p-value was obtained.
    pub method: MannWhitneyMethod,
}

impl MannWhitneyU {
    /// Runs the test.
    ///
    /// The exact distribution is used when both samples have at most
    /// [`EXACT_MANN_WHITNEY_MAX_LEN`] values and there are no ties; otherwise
    /// the normal approximation is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_stats::mann_whitney::{MannWhitneyMethod, MannWhitneyU};
    ///
    /// let males = [19.0, 22.0, 16.0, 29.0, 24.0];
    /// let females = [20.0, 11.0, 17.0, 12.0];
    /// let result = MannWhitneyU::test(&males, &females).unwrap();
    /// assert_eq!(result.statistic, 17.0);
    /// assert_eq!(result.method, MannWhitneyMethod::Exact);
    /// assert!((result.p_value - 7.0 / 126.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn test(a: &[f64], b: &[f64]) -> Result<Self, StatsError> {
        check_values(a, 1)?;
        check_values(b, 1)?;

        let combined = a.iter().chain(b).copied().collect::<Vec<_>>();
        let ranks = Ranks::new(&combined);
        let n_a = a.len() as f64;
        let n_b = b.len() as f64;
        let rank_sum_a = ranks.ranks[..a.len()].iter().sum::<f64>();
        let statistic = rank_sum_a - n_a * (n_a + 1.0) / 2.0;

        let use_exact = a.len() <= EXACT_MANN_WHITNEY_MAX_LEN
            && b.len() <= EXACT_MANN_WHITNEY_MAX_LEN
            && !ranks.has_ties();

        if use_exact {
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let u = statistic.round() as usize;
            return Ok(Self {
                statistic,
                p_value: exact_upper_tail(a.len(), b.len(), u),
                method: MannWhitneyMethod::Exact,
            });
        }

        let n = n_a + n_b;
        let mean_u = n_a * n_b / 2.0;
        let variance_u =
            n_a * n_b / 12.0 * ((n + 1.0) - ranks.tie_correction_sum() / (n * (n - 1.0)));
        if variance_u <= 0.0 {
            return Err(StatsError::ZeroVariance);
        }
        let z = (statistic - mean_u - 0.5) / variance_u.sqrt();
        let normal = Normal::new(0.0, 1.0).map_err(StatsError::distribution)?;

        Ok(Self {
            statistic,
            p_value: normal.sf(z).clamp(0.0, 1.0),
            method: MannWhitneyMethod::Asymptotic,
        })
    }
}

/// Computes `P(U >= u)` under the null hypothesis by enumerating the number of
/// rank arrangements that yield each value of U.
#[expect(clippy::cast_precision_loss)]
fn exact_upper_tail(n_a: usize, n_b: usize, u: usize) -> f64 {
    // counts[i][j][k]: arrangements of i values of `a` and j of `b` with U = k
    let mut counts = vec![vec![Vec::<u64>::new(); n_b + 1]; n_a + 1];
    for i in 0..=n_a {
        for j in 0..=n_b {
            let dist = if i == 0 || j == 0 {
                vec![1]
            } else {
                let mut dist = vec![0; i * j + 1];
                // the largest value belongs to `a` and beats all j values of `b`
                for (k, &c) in counts[i - 1][j].iter().enumerate() {
                    dist[k + j] += c;
                }
                // or it belongs to `b` and beats nothing
                for (k, &c) in counts[i][j - 1].iter().enumerate() {
                    dist[k] += c;
                }
                dist
            };
            counts[i][j] = dist;
        }
    }

    let dist = &counts[n_a][n_b];
    let total = dist.iter().sum::<u64>();
    let upper = dist.iter().skip(u).sum::<u64>();
    upper as f64 / total as f64
}
