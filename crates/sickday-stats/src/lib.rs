//! Statistical primitives for the sick-day hypothesis engine.
//!
//! This crate provides the numeric building blocks used to compare two samples:
//!
//! - **Descriptive statistics**: mean, median, sample variance, standard deviation
//! - **Normality**: Shapiro–Wilk test
//! - **Variance homogeneity**: Levene's test (mean or median centered)
//! - **Two-sample comparison**: one-sided pooled and Welch t-tests, one-sided
//!   Mann–Whitney U test
//!
//! Every comparison in this crate is one-sided with the alternative "the first
//! sample tends to be greater than the second". Two-sided variants are not
//! provided.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`normality`]: Shapiro–Wilk normality test
//! - [`variance`]: Levene's test for equal variances
//! - [`ttest`]: Student's and Welch's t-tests
//! - [`rank`]: Average ranks with tie bookkeeping
//! - [`mann_whitney`]: Mann–Whitney U test
//!
//! # Examples
//!
//! ## Checking normality
//!
//! ```
//! use sickday_stats::normality::ShapiroWilk;
//!
//! let values = [2.8, 3.1, 2.9, 3.0, 3.2, 3.0, 2.9, 3.1, 3.0, 3.05];
//! let result = ShapiroWilk::test(&values).unwrap();
//! assert!(result.p_value > 0.05);
//! ```
//!
//! ## Comparing two samples
//!
//! ```
//! use sickday_stats::{mann_whitney::MannWhitneyU, ttest::TTest};
//!
//! let a = [5.0, 6.0, 7.0, 8.0, 9.0];
//! let b = [1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let t = TTest::welch(&a, &b).unwrap();
//! assert!(t.p_value < 0.01);
//!
//! let u = MannWhitneyU::test(&a, &b).unwrap();
//! assert!(u.statistic > 12.5);
//! ```

pub use self::error::StatsError;

pub mod descriptive;
mod error;
pub mod mann_whitney;
pub mod normality;
pub mod rank;
pub mod ttest;
pub mod variance;
