//! Hypothesis engine comparing sick-day counts between two groups.
//!
//! Records are filtered and split into two labeled samples, then the engine
//! checks the assumptions of the parametric tests and runs the most
//! appropriate one-sided comparison:
//!
//! ```text
//! records ─► group() ─► (A, B) ─► Shapiro–Wilk on A and B
//!                                   │
//!                 both p > 0.05 ────┴──── otherwise
//!                      │                     │
//!                   Levene              Mann–Whitney U
//!                      │
//!          p > 0.05 ───┴─── otherwise
//!              │               │
//!         pooled t-test   Welch's t-test
//! ```
//!
//! Every comparison tests the alternative "group A takes more sick days than
//! group B", where A is men (grouping by sex) or adults (grouping by age).
//!
//! # Modules
//!
//! - [`record`]: Input rows
//! - [`grouping`]: Filtering and partitioning into samples
//! - [`selection`]: Pure test-selection logic and thresholds
//! - [`assessor`]: Traits for the test runners and their default implementations
//! - [`engine`]: The orchestrating [`engine::HypothesisEngine`]
//! - [`result`]: Result and report types
//! - [`report`]: The [`report::ResultReporter`] trait
//!
//! # Examples
//!
//! ```
//! use sickday_analysis::{
//!     engine::HypothesisEngine,
//!     grouping::{FilterCriterion, GroupingMode},
//!     record::{Record, Sex},
//!     selection::SIGNIFICANCE_LEVEL,
//! };
//! use sickday_stats::variance::LeveneCenter;
//!
//! let records = [
//!     (8, Sex::Male),
//!     (9, Sex::Male),
//!     (7, Sex::Male),
//!     (10, Sex::Male),
//!     (8, Sex::Male),
//!     (3, Sex::Female),
//!     (4, Sex::Female),
//!     (2, Sex::Female),
//!     (5, Sex::Female),
//!     (3, Sex::Female),
//! ]
//! .map(|(days, sex)| Record::new(days, sex, 40));
//!
//! let mode = GroupingMode::from_token("sex", None)?;
//! let engine = HypothesisEngine::new(LeveneCenter::Median);
//! let report = engine.analyze(&records, FilterCriterion::new(0), mode)?;
//! assert!(report.result.is_significant(SIGNIFICANCE_LEVEL));
//! # Ok::<(), sickday_analysis::AnalysisError>(())
//! ```

pub use self::error::AnalysisError;

pub mod assessor;
pub mod engine;
mod error;
pub mod grouping;
pub mod record;
pub mod report;
pub mod result;
pub mod selection;
