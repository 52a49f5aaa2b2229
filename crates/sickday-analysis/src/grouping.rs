//! Filtering and two-way partitioning of records into labeled samples.
//!
//! Grouping always yields exactly two samples. Sample A is the group expected
//! to take more sick days under the alternative hypothesis (men, or adults);
//! sample B is the other group.

use serde::Serialize;

use crate::{
    error::AnalysisError,
    record::{Record, Sex},
};

/// Eligibility filter applied before grouping.
///
/// Only records with a sick-day count strictly greater than
/// `minimum_work_days` are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterCriterion {
    pub minimum_work_days: i64,
}

impl FilterCriterion {
    #[must_use]
    pub fn new(minimum_work_days: i64) -> Self {
        Self { minimum_work_days }
    }

    /// Returns `true` if the record passes the filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_analysis::{
    ///     grouping::FilterCriterion,
    ///     record::{Record, Sex},
    /// };
    ///
    /// let filter = FilterCriterion::new(2);
    /// assert!(!filter.is_eligible(&Record::new(2, Sex::Male, 30)));
    /// assert!(filter.is_eligible(&Record::new(3, Sex::Male, 30)));
    /// ```
    #[must_use]
    pub fn is_eligible(&self, record: &Record) -> bool {
        i64::from(record.sick_days) > self.minimum_work_days
    }
}

/// How eligible records are split into two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GroupingMode {
    /// Men versus women.
    BySex,
    /// Adults (age strictly above `threshold`) versus young (age at or below).
    ByAge { threshold: i64 },
}

impl GroupingMode {
    pub const SEX_TOKEN: &'static str = "sex";
    pub const AGE_TOKEN: &'static str = "age";

    /// Parses a grouping token (`"sex"` or `"age"`) together with the optional
    /// age threshold.
    ///
    /// A threshold passed alongside `"sex"` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_analysis::{AnalysisError, grouping::GroupingMode};
    ///
    /// assert_eq!(GroupingMode::from_token("sex", None), Ok(GroupingMode::BySex));
    /// assert_eq!(
    ///     GroupingMode::from_token("age", Some(40)),
    ///     Ok(GroupingMode::ByAge { threshold: 40 })
    /// );
    /// assert!(matches!(
    ///     GroupingMode::from_token("age", None),
    ///     Err(AnalysisError::MissingParameter { .. })
    /// ));
    /// ```
    pub fn from_token(token: &str, age_threshold: Option<i64>) -> Result<Self, AnalysisError> {
        match token {
            Self::SEX_TOKEN => Ok(Self::BySex),
            Self::AGE_TOKEN => {
                let threshold = age_threshold.ok_or(AnalysisError::MissingParameter {
                    parameter: Self::AGE_TOKEN,
                })?;
                Ok(Self::ByAge { threshold })
            }
            _ => Err(AnalysisError::InvalidGroupingMode {
                token: token.to_owned(),
            }),
        }
    }

    /// Labels of sample A and sample B, in that order.
    #[must_use]
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Self::BySex => ("Men", "Women"),
            Self::ByAge { .. } => ("Adults", "Young"),
        }
    }

    fn is_in_group_a(&self, record: &Record) -> bool {
        match self {
            Self::BySex => record.sex == Sex::Male,
            Self::ByAge { threshold } => i64::from(record.age) > *threshold,
        }
    }
}

/// A labeled sequence of sick-day values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub label: String,
    pub values: Vec<f64>,
}

impl Sample {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Filters `records` and partitions the survivors into sample A and sample B.
///
/// Record order is preserved within each sample. Every eligible record lands in
/// exactly one of the two samples.
///
/// # Examples
///
/// ```
/// use sickday_analysis::{
///     grouping::{self, FilterCriterion, GroupingMode},
///     record::{Record, Sex},
/// };
///
/// let records = [
///     Record::new(5, Sex::Male, 50),
///     Record::new(0, Sex::Female, 20),
///     Record::new(3, Sex::Female, 35),
/// ];
/// let (men, women) = grouping::group(&records, FilterCriterion::new(1), GroupingMode::BySex);
/// assert_eq!(men.values, vec![5.0]);
/// assert_eq!(women.values, vec![3.0]);
/// assert_eq!(women.label, "Women");
/// ```
#[must_use]
pub fn group(records: &[Record], filter: FilterCriterion, mode: GroupingMode) -> (Sample, Sample) {
    let (label_a, label_b) = mode.labels();
    let mut a = Sample::new(label_a, vec![]);
    let mut b = Sample::new(label_b, vec![]);

    for record in records.iter().filter(|r| filter.is_eligible(r)) {
        let value = f64::from(record.sick_days);
        if mode.is_in_group_a(record) {
            a.values.push(value);
        } else {
            b.values.push(value);
        }
    }

    (a, b)
}
