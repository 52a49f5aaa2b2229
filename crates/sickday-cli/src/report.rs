//! Text and JSON renderings of an [`AnalysisReport`].

use std::io::{self, Write};

use sickday_analysis::{
    report::ResultReporter,
    result::{AnalysisReport, GroupSummary},
    selection::{NORMALITY_ALPHA, SIGNIFICANCE_LEVEL, TestChoice, VARIANCE_ALPHA},
};

/// Human-readable report with hypotheses, verdict and the decision trail.
#[derive(Debug)]
pub struct TextReporter<W> {
    writer: W,
}

impl<W> TextReporter<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ResultReporter for TextReporter<W>
where
    W: Write,
{
    fn report(&mut self, report: &AnalysisReport) -> io::Result<()> {
        let w = &mut self.writer;
        let result = &report.result;
        let label_a = &report.group_a.label;
        let label_b = &report.group_b.label;

        writeln!(w, "Hypotheses")?;
        if result.test_used.is_t_test() {
            writeln!(w, "  H0: mean sick days of {label_a} <= mean of {label_b}")?;
            writeln!(w, "  H1: mean sick days of {label_a} > mean of {label_b}")?;
        } else {
            writeln!(
                w,
                "  H0: sick days of {label_a} and {label_b} follow the same distribution"
            )?;
            writeln!(
                w,
                "  H1: sick days of {label_a} tend to be larger than those of {label_b}"
            )?;
        }
        writeln!(w)?;

        writeln!(w, "Result")?;
        writeln!(w, "  test:      {}", result.test_used)?;
        writeln!(w, "  statistic: {:.4}", result.statistic)?;
        writeln!(w, "  p-value:   {:.4}", result.p_value)?;
        if result.is_significant(SIGNIFICANCE_LEVEL) {
            writeln!(w, "  verdict:   reject H0 at alpha = {SIGNIFICANCE_LEVEL}")?;
        } else {
            writeln!(w, "  verdict:   fail to reject H0 at alpha = {SIGNIFICANCE_LEVEL}")?;
        }
        writeln!(w)?;

        writeln!(w, "Assumption checks")?;
        let (p_a, p_b) = result.normality_p_values;
        writeln!(w, "  Shapiro-Wilk p-value ({label_a}): {p_a:.4}")?;
        writeln!(w, "  Shapiro-Wilk p-value ({label_b}): {p_b:.4}")?;
        match result.variance_p_value {
            Some(p) => writeln!(w, "  Levene p-value: {p:.4}")?,
            None => writeln!(w, "  Levene test skipped (normality rejected)")?,
        }
        writeln!(w)?;

        writeln!(w, "Selection logic")?;
        writeln!(
            w,
            "  both Shapiro-Wilk p > {NORMALITY_ALPHA}, Levene p > {VARIANCE_ALPHA}: {}",
            TestChoice::PooledTTest
        )?;
        writeln!(
            w,
            "  both Shapiro-Wilk p > {NORMALITY_ALPHA}, Levene p <= {VARIANCE_ALPHA}: {}",
            TestChoice::WelchTTest
        )?;
        writeln!(
            w,
            "  any Shapiro-Wilk p <= {NORMALITY_ALPHA}: {}",
            TestChoice::MannWhitneyU
        )?;
        writeln!(w)?;

        write_group_summaries(w, &[&report.group_a, &report.group_b])?;
        w.flush()
    }
}

/// Machine-readable report: the serialized [`AnalysisReport`].
#[derive(Debug)]
pub struct JsonReporter<W> {
    writer: W,
}

impl<W> JsonReporter<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ResultReporter for JsonReporter<W>
where
    W: Write,
{
    fn report(&mut self, report: &AnalysisReport) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Writes one table row of descriptive statistics per group.
pub fn write_group_summaries<W>(w: &mut W, summaries: &[&GroupSummary]) -> io::Result<()>
where
    W: Write,
{
    let width = summaries
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Group".len());

    writeln!(
        w,
        "{:<width$}  {:>5}  {:>8}  {:>8}  {:>8}  {:>6}  {:>6}",
        "Group", "Count", "Mean", "Median", "Std Dev", "Min", "Max"
    )?;
    for summary in summaries {
        match &summary.stats {
            Some(stats) => writeln!(
                w,
                "{:<width$}  {:>5}  {:>8.2}  {:>8.2}  {:>8.2}  {:>6}  {:>6}",
                summary.label,
                stats.len,
                stats.mean,
                stats.median,
                stats.std_dev,
                stats.min,
                stats.max
            )?,
            None => writeln!(w, "{:<width$}  {:>5}", summary.label, 0)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sickday_analysis::{
        grouping::{FilterCriterion, GroupingMode, Sample},
        result::ComparisonResult,
    };

    use super::*;

    fn sample_report(test_used: TestChoice, variance_p_value: Option<f64>) -> AnalysisReport {
        AnalysisReport {
            grouping: GroupingMode::ByAge { threshold: 40 },
            filter: FilterCriterion::new(2),
            group_a: GroupSummary::from_sample(&Sample::new("Adults", vec![5.0, 6.0, 7.0])),
            group_b: GroupSummary::from_sample(&Sample::new("Young", vec![])),
            result: ComparisonResult {
                test_used,
                statistic: 2.345_67,
                p_value: 0.012_34,
                normality_p_values: (0.5, 0.25),
                variance_p_value,
            },
        }
    }

    #[test]
    fn test_text_report_t_test() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter
            .report(&sample_report(TestChoice::WelchTTest, Some(0.01)))
            .unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("H1: mean sick days of Adults > mean of Young"));
        assert!(text.contains("test:      Welch's t-test (unequal variances)"));
        assert!(text.contains("statistic: 2.3457"));
        assert!(text.contains("p-value:   0.0123"));
        assert!(text.contains("verdict:   reject H0"));
        assert!(text.contains("Shapiro-Wilk p-value (Young): 0.2500"));
        assert!(text.contains("Levene p-value: 0.0100"));
    }

    #[test]
    fn test_text_report_mann_whitney() {
        let mut report = sample_report(TestChoice::MannWhitneyU, None);
        report.result.p_value = 0.2;
        let mut reporter = TextReporter::new(Vec::new());
        reporter.report(&report).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("tend to be larger than those of Young"));
        assert!(text.contains("fail to reject H0"));
        assert!(text.contains("Levene test skipped"));
    }

    #[test]
    fn test_group_summaries_table() {
        let a = GroupSummary::from_sample(&Sample::new("Men", vec![1.0, 2.0, 3.0]));
        let b = GroupSummary::from_sample(&Sample::new("Women", vec![]));
        let mut buf = Vec::new();
        write_group_summaries(&mut buf, &[&a, &b]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Group"));
        assert!(lines[1].starts_with("Men  "));
        assert!(lines[1].contains("2.00"));
        assert!(lines[2].starts_with("Women"));
    }

    #[test]
    fn test_json_report() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter
            .report(&sample_report(TestChoice::PooledTTest, Some(0.8)))
            .unwrap();
        let bytes = reporter.into_inner();
        assert_eq!(bytes.last(), Some(&b'\n'));

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["result"]["test_used"], "pooled_t_test");
        assert_eq!(value["result"]["variance_p_value"], 0.8);
        assert_eq!(value["result"]["normality_p_values"][1], 0.25);
        assert_eq!(value["grouping"]["mode"], "by_age");
        assert_eq!(value["grouping"]["threshold"], 40);
        assert_eq!(value["filter"]["minimum_work_days"], 2);
        assert_eq!(value["group_a"]["stats"]["len"], 3);
        assert!(value["group_b"]["stats"].is_null());
    }
}
