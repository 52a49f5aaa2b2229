//! Shapiro–Wilk test for normality.
//!
//! The coefficients and the p-value approximation follow Royston's algorithm
//! AS R94 (1995), which is valid for `3 <= n <= 5000`. Larger samples are still
//! evaluated, but the p-value approximation becomes less accurate.
//!
//! # Examples
//!
//! ```
//! use sickday_stats::normality::ShapiroWilk;
//!
//! let heights = [148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0];
//! let result = ShapiroWilk::test(&heights).unwrap();
//! assert!((result.statistic - 0.7888).abs() < 1e-3);
//! assert!(result.p_value < 0.01);
//! ```

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_3, PI};

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{StatsError, check_values};

/// Minimum number of observations the test is defined for.
pub const SHAPIRO_WILK_MIN_LEN: usize = 3;

const C1: [f64; 6] = [0.0, 0.221_157, -0.147_981, -2.071_190, 4.434_685, -2.706_056];
const C2: [f64; 6] = [0.0, 0.042_981, -0.293_762, -1.752_461, 5.682_633, -3.582_633];
const C3: [f64; 4] = [0.544, -0.399_78, 0.025_054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.778_57, 0.062_767, -0.002_032_2];
const C5: [f64; 4] = [-1.5861, -0.310_82, -0.083_751, 0.003_891_5];
const C6: [f64; 3] = [-0.4803, -0.082_676, 0.003_030_2];
const G: [f64; 2] = [-2.273, 0.459];

/// Result of a Shapiro–Wilk test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapiroWilk {
    /// The W statistic, in `(0, 1]`. Values close to 1 indicate normality.
    pub statistic: f64,
    /// Probability of a W at least this extreme under the normal hypothesis.
    pub p_value: f64,
}

impl ShapiroWilk {
    /// Runs the test on unsorted `values`.
    ///
    /// Fails with [`StatsError::TooFewValues`] for fewer than three values,
    /// [`StatsError::NonFiniteValue`] for NaN or infinite values, and
    /// [`StatsError::ZeroVariance`] when all values are identical.
    pub fn test(values: &[f64]) -> Result<Self, StatsError> {
        check_values(values, SHAPIRO_WILK_MIN_LEN)?;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let range = sorted[n - 1] - sorted[0];
        if range <= f64::EPSILON * sorted[n - 1].abs().max(1.0) {
            return Err(StatsError::ZeroVariance);
        }

        let coefficients = coefficients(n)?;
        let statistic = w_statistic(&sorted, &coefficients);
        let p_value = p_value(statistic, n)?;

        Ok(Self { statistic, p_value })
    }
}

/// Evaluates `c[0] + c[1] x + c[2] x^2 + ...`.
fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &coef| acc * x + coef)
}

/// Computes the positive half of the antisymmetric weight vector.
///
/// `a[i]` weights the pair `(x[n - 1 - i] - x[i])` of the sorted sample.
#[expect(clippy::cast_precision_loss)]
fn coefficients(n: usize) -> Result<Vec<f64>, StatsError> {
    let half = n / 2;
    if n == 3 {
        return Ok(vec![FRAC_1_SQRT_2]);
    }

    let normal = Normal::new(0.0, 1.0).map_err(StatsError::distribution)?;
    let an = n as f64;
    let m = (1..=half)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / (an + 0.25)))
        .collect::<Vec<_>>();

    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;

    let mut a = vec![0.0; half];
    a[0] = a1;
    let (first_scaled, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0].powi(2) - 2.0 * m[1].powi(2))
            / (1.0 - 2.0 * a1.powi(2) - 2.0 * a2.powi(2)))
        .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0].powi(2)) / (1.0 - 2.0 * a1.powi(2))).sqrt();
        (1, fac)
    };
    for (ai, mi) in a.iter_mut().zip(&m).skip(first_scaled) {
        *ai = -mi / fac;
    }
    Ok(a)
}

fn w_statistic(sorted: &[f64], a: &[f64]) -> f64 {
    let n = sorted.len();
    let mean = crate::descriptive::mean(sorted);
    let ssx = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    let sum_a2 = 2.0 * a.iter().map(|v| v * v).sum::<f64>();
    let numerator = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (sorted[n - 1 - i] - sorted[i]))
        .sum::<f64>();
    (numerator.powi(2) / (sum_a2 * ssx)).min(1.0)
}

#[expect(clippy::cast_precision_loss)]
fn p_value(w: f64, n: usize) -> Result<f64, StatsError> {
    if n == 3 {
        let p = 6.0 / PI * (w.sqrt().asin() - FRAC_PI_3);
        return Ok(p.clamp(0.0, 1.0));
    }

    let an = n as f64;
    let mut w1 = (1.0 - w).ln();
    let (mu, sigma) = if n <= 11 {
        let gamma = poly(&G, an);
        if w1 >= gamma {
            return Ok(0.0);
        }
        w1 = -(gamma - w1).ln();
        (poly(&C3, an), poly(&C4, an).exp())
    } else {
        let ln_n = an.ln();
        (poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };

    let normal = Normal::new(mu, sigma).map_err(StatsError::distribution)?;
    Ok(normal.sf(w1).clamp(0.0, 1.0))
}
